mod high_score;
mod snake_session;

use std::future::Future;

use crate::games::snake::{Direction, GameEndReason, GameSnapshot, SettingsUpdate};

pub use high_score::HighScore;
pub use snake_session::SnakeSession;

/// Requests the session task accepts from the input side.
#[derive(Clone, Debug, PartialEq)]
pub enum GameCommand {
    /// Fresh round, started immediately.
    NewGame,
    /// Fresh round left idle until `NewGame`.
    Reset,
    Turn(Direction),
    Pause,
    Resume,
    TogglePause,
    UpdateSettings(SettingsUpdate),
}

/// Final result of one round, handed to whoever keeps scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
    pub score: u32,
    pub is_new_high_score: bool,
    pub reason: GameEndReason,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    FoodEaten { score: u32 },
    GameOver(SessionOutcome),
}

/// Receives everything the session produces. The engine itself never sees presentation state.
pub trait GameObserver: Send + Sync + 'static {
    fn publish_frame(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn publish_event(&self, event: GameEvent) -> impl Future<Output = ()> + Send;
}
