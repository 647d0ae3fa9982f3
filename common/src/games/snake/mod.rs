mod engine;
mod food;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use engine::{FOOD_SCORE, INITIAL_SNAKE_LENGTH, SPEED_INCREMENT, SnakeEngine};
pub use food::place_food;
pub use settings::{
    GameSettings, MAX_CELL_SIZE, MAX_GRID_SIZE, MAX_SPEED, MIN_CELL_SIZE, MIN_GRID_SIZE,
    SettingsUpdate,
};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use types::{Direction, GameEndReason, Point, StepOutcome, WallMode};
