use snake_common::engine::session::{GameCommand, SessionOutcome};
use snake_common::games::snake::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Options,
    Playing,
    Paused,
    GameOver(SessionOutcome),
}

/// Everything that can move the UI between screens, from keys, buttons or the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Play,
    OpenOptions,
    Turn(Direction),
    TogglePause,
    Escape,
    RoundEnded(SessionOutcome),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub screen: Screen,
    pub command: Option<GameCommand>,
}

impl Transition {
    fn stay(screen: Screen) -> Self {
        Self { screen, command: None }
    }

    fn to(screen: Screen, command: GameCommand) -> Self {
        Self {
            screen,
            command: Some(command),
        }
    }
}

impl Screen {
    pub fn handle(self, event: UiEvent) -> Transition {
        match (self, event) {
            (Screen::Menu | Screen::GameOver(_), UiEvent::Play) => {
                Transition::to(Screen::Playing, GameCommand::NewGame)
            }
            (Screen::Menu, UiEvent::OpenOptions) => Transition::stay(Screen::Options),
            (Screen::Options, UiEvent::Escape) => Transition::stay(Screen::Menu),
            (Screen::GameOver(_), UiEvent::Escape) => Transition::to(Screen::Menu, GameCommand::Reset),

            (Screen::Playing, UiEvent::Turn(direction)) => {
                Transition::to(Screen::Playing, GameCommand::Turn(direction))
            }
            (Screen::Playing, UiEvent::TogglePause | UiEvent::Escape) => {
                Transition::to(Screen::Paused, GameCommand::Pause)
            }
            // A pause pressed in the same frame the round ended must not swallow the outcome.
            (Screen::Playing | Screen::Paused, UiEvent::RoundEnded(outcome)) => {
                Transition::stay(Screen::GameOver(outcome))
            }

            (Screen::Paused, UiEvent::TogglePause) => Transition::to(Screen::Playing, GameCommand::Resume),
            (Screen::Paused, UiEvent::Escape) => Transition::to(Screen::Menu, GameCommand::Reset),

            (screen, _) => Transition::stay(screen),
        }
    }
}
