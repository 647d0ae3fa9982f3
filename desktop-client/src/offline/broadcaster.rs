use std::sync::Arc;

use snake_common::engine::session::{GameEvent, GameObserver};
use snake_common::games::snake::GameSnapshot;
use snake_common::{log, log_debug, log_warn};

use crate::config::DesktopConfigManager;
use crate::state::SharedState;

/// Publishes session output into the UI state and stores new high scores.
#[derive(Clone)]
pub struct LocalObserver {
    shared_state: SharedState,
    config_manager: Arc<DesktopConfigManager>,
}

impl LocalObserver {
    pub fn new(shared_state: SharedState, config_manager: Arc<DesktopConfigManager>) -> Self {
        Self {
            shared_state,
            config_manager,
        }
    }
}

impl GameObserver for LocalObserver {
    async fn publish_frame(&self, snapshot: GameSnapshot) {
        self.shared_state.update_snapshot(snapshot);
        self.shared_state.request_repaint();
    }

    async fn publish_event(&self, event: GameEvent) {
        match event {
            GameEvent::FoodEaten { score } => {
                log_debug!("Food eaten, score {}", score);
            }
            GameEvent::GameOver(outcome) => {
                if outcome.is_new_high_score {
                    log!("New high score: {}", outcome.score);
                    if let Err(e) = self
                        .config_manager
                        .update_config(|config| config.high_score = outcome.score)
                    {
                        log_warn!("Failed to save high score: {}", e);
                    }
                }
                self.shared_state.set_outcome(outcome);
                self.shared_state.request_repaint();
            }
        }
    }
}
