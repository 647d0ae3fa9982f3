use super::types::{Direction, GameEndReason, Point, WallMode};

/// Owned copy of the engine state at one instant. Holding one never observes later steps.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    /// Head first.
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub direction: Direction,
    pub next_direction: Direction,
    pub score: u32,
    pub is_game_over: bool,
    pub is_paused: bool,
    pub speed: f32,
    pub wall_mode: WallMode,
    pub sound_enabled: bool,
    pub grid_size: usize,
    pub end_reason: Option<GameEndReason>,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }
}
