use tokio::time::Instant;

use crate::games::snake::{Direction, GameSettings, GameSnapshot, SettingsUpdate, SnakeEngine, StepOutcome};

/// Result of one frame callback.
#[derive(Clone, Debug)]
pub struct FrameReport {
    /// `None` when the tick interval had not elapsed yet.
    pub outcome: Option<StepOutcome>,
    /// Render input for this frame.
    pub snapshot: GameSnapshot,
    /// Whether another frame should be scheduled.
    pub keep_running: bool,
}

/// Couples the engine to wall-clock frames: at most one step per frame, and only once the
/// current tick interval has elapsed since the last committed move.
pub struct FrameDriver {
    engine: SnakeEngine,
    last_move: Instant,
    started: bool,
}

impl FrameDriver {
    pub fn new(engine: SnakeEngine) -> Self {
        Self {
            engine,
            last_move: Instant::now(),
            started: false,
        }
    }

    pub fn engine(&self) -> &SnakeEngine {
        &self.engine
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.engine.is_game_over() && !self.engine.is_paused()
    }

    pub fn start(&mut self, now: Instant) {
        self.started = true;
        self.last_move = now;
    }

    /// Fresh round that waits for `start`.
    pub fn reset(&mut self, settings: GameSettings) {
        self.engine.reset(settings);
        self.started = false;
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Ticks missed while paused are not replayed; timing restarts from `now`.
    pub fn resume(&mut self, now: Instant) {
        if self.engine.is_paused() {
            self.engine.resume();
            self.last_move = now;
        }
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        if self.engine.is_paused() {
            self.resume(now);
        } else {
            self.pause();
        }
    }

    pub fn request_direction(&mut self, direction: Direction) {
        self.engine.request_direction(direction);
    }

    pub fn update_settings(&mut self, update: &SettingsUpdate) {
        self.engine.update_settings(update);
    }

    pub fn on_frame(&mut self, now: Instant) -> FrameReport {
        let mut outcome = None;
        if self.is_running() && now.saturating_duration_since(self.last_move) >= self.engine.tick_interval() {
            outcome = Some(self.engine.step());
            self.last_move = now;
        }

        FrameReport {
            outcome,
            snapshot: self.engine.snapshot(),
            keep_running: self.is_running(),
        }
    }
}
