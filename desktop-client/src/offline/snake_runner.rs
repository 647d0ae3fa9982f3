use std::thread::JoinHandle;
use std::time::Duration;

use snake_common::engine::session::{GameCommand, HighScore, SnakeSession};
use snake_common::engine::{FrameDriver, StopHandle, stop_channel};
use snake_common::games::SessionRng;
use snake_common::games::snake::{GameSettings, SnakeEngine};
use snake_common::{log, log_warn};
use tokio::sync::mpsc;

use super::LocalObserver;

pub struct SessionSettings {
    pub game: GameSettings,
    pub seed: Option<u64>,
    pub high_score: u32,
    pub frame_interval: Duration,
}

/// UI side of a running session. Dropping it stops the session and joins its thread.
pub struct SessionHandle {
    command_tx: mpsc::UnboundedSender<GameCommand>,
    stop: StopHandle,
    thread: Option<JoinHandle<()>>,
}

impl SessionHandle {
    pub fn send(&self, command: GameCommand) {
        if self.command_tx.send(command).is_err() {
            log_warn!("Session is not running, command dropped");
        }
    }

    pub fn shutdown(&mut self) {
        self.stop.stop();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log_warn!("Session thread panicked");
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Starts the session on its own thread with a single-threaded runtime.
pub fn spawn_session(settings: SessionSettings, observer: LocalObserver) -> Result<SessionHandle, String> {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (stop, stop_token) = stop_channel();

    let rng = match settings.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting session with seed {}", rng.seed());
    let engine = SnakeEngine::new(settings.game, rng);

    let thread = std::thread::Builder::new()
        .name("snake-session".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread().enable_time().build() {
                Ok(runtime) => runtime,
                Err(e) => {
                    log_warn!("Failed to create session runtime: {}", e);
                    return;
                }
            };

            runtime.block_on(async move {
                let high_score = SnakeSession::run(
                    FrameDriver::new(engine),
                    command_rx,
                    observer,
                    stop_token,
                    settings.frame_interval,
                    HighScore::new(settings.high_score),
                )
                .await;
                log!("Session finished, best score {}", high_score.best());
            });
        })
        .map_err(|e| format!("Failed to spawn session thread: {}", e))?;

    Ok(SessionHandle {
        command_tx,
        stop,
        thread: Some(thread),
    })
}
