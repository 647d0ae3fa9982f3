use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval};

use crate::config::Validate;
use crate::engine::{FrameDriver, StopToken};
use crate::games::snake::StepOutcome;
use crate::{log, log_debug, log_warn};
use super::{GameCommand, GameEvent, GameObserver, HighScore};

pub struct SnakeSession;

impl SnakeSession {
    /// Owns the driver for the whole session. Frames are only scheduled while a round is
    /// running; commands and the stop token are always served. Returns the updated high score.
    pub async fn run(
        mut driver: FrameDriver,
        mut commands: mpsc::UnboundedReceiver<GameCommand>,
        observer: impl GameObserver,
        mut stop: StopToken,
        frame_interval: Duration,
        mut high_score: HighScore,
    ) -> HighScore {
        let mut frames = interval(frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log!("Session started, frame interval {:?}", frame_interval);
        observer.publish_frame(driver.snapshot()).await;

        loop {
            let running = driver.is_running();

            tokio::select! {
                biased;

                _ = stop.stopped() => {
                    log!("Session stop requested");
                    break;
                }

                command = commands.recv() => {
                    let Some(command) = command else {
                        log!("Command channel closed, ending session");
                        break;
                    };
                    Self::handle_command(&mut driver, command);
                    observer.publish_frame(driver.snapshot()).await;
                }

                now = frames.tick(), if running => {
                    let report = driver.on_frame(now);
                    observer.publish_frame(report.snapshot.clone()).await;

                    match report.outcome {
                        Some(StepOutcome::AteFood { score }) => {
                            observer.publish_event(GameEvent::FoodEaten { score }).await;
                        }
                        Some(StepOutcome::GameOver(reason)) => {
                            let outcome = high_score.record(report.snapshot.score, reason);
                            log!(
                                "Round finished: score {}, new high score: {}",
                                outcome.score,
                                outcome.is_new_high_score
                            );
                            observer.publish_event(GameEvent::GameOver(outcome)).await;
                        }
                        Some(StepOutcome::Moved) | Some(StepOutcome::Skipped) | None => {}
                    }
                }
            }
        }

        high_score
    }

    fn handle_command(driver: &mut FrameDriver, command: GameCommand) {
        log_debug!("Command: {:?}", command);
        match command {
            GameCommand::NewGame => {
                let settings = driver.engine().settings().clone();
                driver.reset(settings);
                driver.start(Instant::now());
            }
            GameCommand::Reset => {
                let settings = driver.engine().settings().clone();
                driver.reset(settings);
            }
            GameCommand::Turn(direction) => driver.request_direction(direction),
            GameCommand::Pause => driver.pause(),
            GameCommand::Resume => driver.resume(Instant::now()),
            GameCommand::TogglePause => driver.toggle_pause(Instant::now()),
            GameCommand::UpdateSettings(update) => match update.validate() {
                Ok(()) => driver.update_settings(&update),
                Err(e) => log_warn!("Ignoring settings update: {}", e),
            },
        }
    }
}
