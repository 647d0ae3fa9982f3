use std::time::Duration;

use crate::games::SessionRng;
use crate::{log, log_debug};
use super::food::place_food;
use super::settings::{GameSettings, MAX_SPEED, SettingsUpdate};
use super::snake::Snake;
use super::snapshot::GameSnapshot;
use super::types::{Direction, GameEndReason, Point, StepOutcome, WallMode};

pub const INITIAL_SNAKE_LENGTH: usize = 3;
pub const FOOD_SCORE: u32 = 10;
pub const SPEED_INCREMENT: f32 = 0.1;

#[derive(Clone, Debug)]
struct RoundState {
    snake: Snake,
    food: Option<Point>,
    direction: Direction,
    next_direction: Direction,
    score: u32,
    speed: f32,
    wall_mode: WallMode,
    sound_enabled: bool,
    is_game_over: bool,
    is_paused: bool,
    end_reason: Option<GameEndReason>,
}

impl RoundState {
    fn initial(settings: &GameSettings, rng: &mut SessionRng) -> Self {
        let center = settings.grid_size / 2;
        let snake = Snake::new(
            Point::new(center, center),
            Direction::Right,
            INITIAL_SNAKE_LENGTH,
            settings.grid_size,
        );
        let food = place_food(&snake, settings.grid_size, rng);

        Self {
            snake,
            food,
            direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            speed: settings.initial_speed,
            wall_mode: settings.wall_mode,
            sound_enabled: settings.sound_enabled,
            is_game_over: false,
            is_paused: false,
            end_reason: None,
        }
    }
}

/// Authoritative single-player snake simulation. Nothing outside the engine can reach its
/// containers; readers get a [`GameSnapshot`].
pub struct SnakeEngine {
    settings: GameSettings,
    state: RoundState,
    rng: SessionRng,
}

impl SnakeEngine {
    /// `settings` must already have passed `GameSettings::validate`.
    pub fn new(settings: GameSettings, mut rng: SessionRng) -> Self {
        let state = RoundState::initial(&settings, &mut rng);
        Self { settings, state, rng }
    }

    pub fn reset(&mut self, settings: GameSettings) {
        self.settings = settings;
        self.state = RoundState::initial(&self.settings, &mut self.rng);
        log_debug!(
            "New round on {}x{} grid, seed {}",
            self.settings.grid_size,
            self.settings.grid_size,
            self.rng.seed()
        );
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused
    }

    /// Time between two moves at the current speed.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.state.speed)
    }

    /// Buffers a turn for the next step. Reversing into the neck is ignored.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.state.is_game_over || direction.is_opposite(&self.state.direction) {
            return;
        }
        self.state.next_direction = direction;
    }

    pub fn pause(&mut self) {
        if !self.state.is_game_over {
            self.state.is_paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.state.is_paused = false;
    }

    pub fn toggle_pause(&mut self) {
        if self.state.is_paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Wall mode, speed and sound take effect on the next step; snake and score are kept.
    pub fn update_settings(&mut self, update: &SettingsUpdate) {
        self.settings.apply(update);
        if let Some(wall_mode) = update.wall_mode {
            self.state.wall_mode = wall_mode;
        }
        if let Some(speed) = update.initial_speed {
            self.state.speed = speed;
        }
        if let Some(sound_enabled) = update.sound_enabled {
            self.state.sound_enabled = sound_enabled;
        }
        log_debug!(
            "Settings updated: walls {:?}, speed {}, sound {}",
            self.state.wall_mode,
            self.state.speed,
            self.state.sound_enabled
        );
    }

    pub fn step(&mut self) -> StepOutcome {
        let grid_size = self.settings.grid_size;
        let state = &mut self.state;
        if state.is_game_over || state.is_paused {
            return StepOutcome::Skipped;
        }

        state.direction = state.next_direction;

        let Some(new_head) = advance(state.snake.head(), state.direction, state.wall_mode, grid_size)
        else {
            return self.end_round(GameEndReason::WallCollision);
        };

        // The tail still counts here even though it would move away this tick.
        if state.snake.contains(&new_head) {
            return self.end_round(GameEndReason::SelfCollision);
        }

        state.snake.push_head(new_head);

        if state.food != Some(new_head) {
            state.snake.pop_tail();
            return StepOutcome::Moved;
        }

        state.score += FOOD_SCORE;
        state.speed = (state.speed + SPEED_INCREMENT).min(MAX_SPEED);
        log_debug!(
            "Ate food at ({}, {}). Score: {}, speed: {:.1}",
            new_head.x,
            new_head.y,
            state.score,
            state.speed
        );

        state.food = place_food(&state.snake, grid_size, &mut self.rng);
        if state.food.is_none() {
            return self.end_round(GameEndReason::BoardFilled);
        }

        StepOutcome::AteFood { score: state.score }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let state = &self.state;
        GameSnapshot {
            snake: state.snake.segments().copied().collect(),
            food: state.food,
            direction: state.direction,
            next_direction: state.next_direction,
            score: state.score,
            is_game_over: state.is_game_over,
            is_paused: state.is_paused,
            speed: state.speed,
            wall_mode: state.wall_mode,
            sound_enabled: state.sound_enabled,
            grid_size: self.settings.grid_size,
            end_reason: state.end_reason,
        }
    }

    fn end_round(&mut self, reason: GameEndReason) -> StepOutcome {
        self.state.is_game_over = true;
        self.state.end_reason = Some(reason);
        log!(
            "Game over ({:?}) with score {} and length {}",
            reason,
            self.state.score,
            self.state.snake.len()
        );
        StepOutcome::GameOver(reason)
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, segments: Vec<Point>, direction: Direction) {
        self.state.snake = Snake::from_segments(segments);
        self.state.direction = direction;
        self.state.next_direction = direction;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Point>) {
        self.state.food = food;
    }
}

fn wrapping_inc(value: usize, max: usize) -> usize {
    if value + 1 >= max { 0 } else { value + 1 }
}

fn wrapping_dec(value: usize, max: usize) -> usize {
    if value == 0 { max - 1 } else { value - 1 }
}

/// The cell one move from `head`, or `None` when a solid wall is in the way.
fn advance(head: Point, direction: Direction, wall_mode: WallMode, grid_size: usize) -> Option<Point> {
    match wall_mode {
        WallMode::Solid => match direction {
            Direction::Up => head.y.checked_sub(1).map(|y| Point::new(head.x, y)),
            Direction::Down => (head.y + 1 < grid_size).then(|| Point::new(head.x, head.y + 1)),
            Direction::Left => head.x.checked_sub(1).map(|x| Point::new(x, head.y)),
            Direction::Right => (head.x + 1 < grid_size).then(|| Point::new(head.x + 1, head.y)),
        },
        WallMode::Wrap => Some(match direction {
            Direction::Up => Point::new(head.x, wrapping_dec(head.y, grid_size)),
            Direction::Down => Point::new(head.x, wrapping_inc(head.y, grid_size)),
            Direction::Left => Point::new(wrapping_dec(head.x, grid_size), head.y),
            Direction::Right => Point::new(wrapping_inc(head.x, grid_size), head.y),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(grid_size: usize, wall_mode: WallMode) -> GameSettings {
        GameSettings {
            grid_size,
            wall_mode,
            ..GameSettings::default()
        }
    }

    fn create_engine(wall_mode: WallMode) -> SnakeEngine {
        SnakeEngine::new(settings(20, wall_mode), SessionRng::new(42))
    }

    fn points(coords: &[(usize, usize)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_initial_state() {
        for grid_size in [5, 7, 20, 100] {
            let engine = SnakeEngine::new(settings(grid_size, WallMode::Solid), SessionRng::new(3));
            let state = engine.snapshot();
            let c = grid_size / 2;

            assert_eq!(state.snake, points(&[(c, c), (c - 1, c), (c - 2, c)]));
            assert_eq!(state.direction, Direction::Right);
            assert_eq!(state.next_direction, Direction::Right);
            assert_eq!(state.score, 0);
            assert_eq!(state.speed, 8.0);
            assert!(!state.is_game_over);
            assert!(!state.is_paused);
            assert_eq!(state.end_reason, None);

            let food = state.food.unwrap();
            assert!(!state.snake.contains(&food));
            assert!(food.x < grid_size && food.y < grid_size);
        }
    }

    #[test]
    fn test_single_step_scenario() {
        let mut engine = create_engine(WallMode::Solid);
        engine.set_food(Some(Point::new(0, 0)));

        assert_eq!(engine.step(), StepOutcome::Moved);

        let state = engine.snapshot();
        assert_eq!(state.snake, points(&[(11, 10), (10, 10), (9, 10)]));
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over);
    }

    #[test]
    fn test_reverse_request_is_ignored() {
        let mut engine = create_engine(WallMode::Solid);
        engine.request_direction(Direction::Left);
        assert_eq!(engine.snapshot().next_direction, Direction::Right);

        engine.request_direction(Direction::Up);
        engine.set_food(Some(Point::new(0, 19)));
        engine.step();
        engine.request_direction(Direction::Down);
        assert_eq!(engine.snapshot().next_direction, Direction::Up);
    }

    #[test]
    fn test_only_last_valid_turn_per_tick_is_applied() {
        let mut engine = create_engine(WallMode::Solid);
        engine.set_food(Some(Point::new(0, 0)));

        engine.request_direction(Direction::Up);
        engine.request_direction(Direction::Left);
        assert_eq!(engine.snapshot().next_direction, Direction::Up);

        engine.step();
        let state = engine.snapshot();
        assert_eq!(state.direction, Direction::Up);
        assert_eq!(state.head(), Some(Point::new(10, 9)));
        assert!(!state.is_game_over);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut engine = create_engine(WallMode::Solid);
        engine.set_food(Some(Point::new(11, 10)));

        assert_eq!(engine.step(), StepOutcome::AteFood { score: 10 });

        let state = engine.snapshot();
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 10);
        assert!((state.speed - 8.1).abs() < 1e-5);
        let food = state.food.unwrap();
        assert!(!state.snake.contains(&food));

        engine.set_food(Some(Point::new(0, 0)));
        assert_eq!(engine.step(), StepOutcome::Moved);
        let state = engine.snapshot();
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_wrap_mode_crosses_every_edge() {
        let cases = [
            (points(&[(19, 5), (18, 5), (17, 5)]), Direction::Right, Point::new(0, 5)),
            (points(&[(0, 5), (1, 5), (2, 5)]), Direction::Left, Point::new(19, 5)),
            (points(&[(5, 0), (5, 1), (5, 2)]), Direction::Up, Point::new(5, 19)),
            (points(&[(5, 19), (5, 18), (5, 17)]), Direction::Down, Point::new(5, 0)),
        ];

        for (segments, direction, expected_head) in cases {
            let mut engine = create_engine(WallMode::Wrap);
            engine.set_snake(segments, direction);
            engine.set_food(Some(Point::new(10, 10)));

            assert_eq!(engine.step(), StepOutcome::Moved);
            let state = engine.snapshot();
            assert_eq!(state.head(), Some(expected_head));
            assert_eq!(state.snake.len(), 3);
            assert!(!state.is_game_over);
        }
    }

    #[test]
    fn test_solid_wall_ends_game_without_moving() {
        let cases = [
            (points(&[(19, 5), (18, 5), (17, 5)]), Direction::Right),
            (points(&[(0, 5), (1, 5), (2, 5)]), Direction::Left),
            (points(&[(5, 0), (5, 1), (5, 2)]), Direction::Up),
            (points(&[(5, 19), (5, 18), (5, 17)]), Direction::Down),
        ];

        for (segments, direction) in cases {
            let mut engine = create_engine(WallMode::Solid);
            engine.set_snake(segments.clone(), direction);
            engine.set_food(Some(Point::new(10, 10)));

            assert_eq!(engine.step(), StepOutcome::GameOver(GameEndReason::WallCollision));
            let after_hit = engine.snapshot();
            assert!(after_hit.is_game_over);
            assert_eq!(after_hit.end_reason, Some(GameEndReason::WallCollision));
            assert_eq!(after_hit.snake, segments);
            assert_eq!(after_hit.score, 0);

            engine.request_direction(Direction::Up);
            engine.request_direction(Direction::Down);
            assert_eq!(engine.step(), StepOutcome::Skipped);
            assert_eq!(engine.step(), StepOutcome::Skipped);
            assert_eq!(engine.snapshot(), after_hit);
        }
    }

    #[test]
    fn test_running_into_body_ends_game() {
        let mut engine = create_engine(WallMode::Solid);
        engine.set_snake(points(&[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)]), Direction::Left);
        engine.set_food(Some(Point::new(0, 0)));

        engine.request_direction(Direction::Down);
        assert_eq!(engine.step(), StepOutcome::GameOver(GameEndReason::SelfCollision));

        let state = engine.snapshot();
        assert!(state.is_game_over);
        assert_eq!(state.snake.len(), 5);
    }

    #[test]
    fn test_running_into_tail_ends_game() {
        let mut engine = create_engine(WallMode::Wrap);
        engine.set_snake(points(&[(5, 5), (6, 5), (6, 6), (5, 6)]), Direction::Left);
        engine.set_food(Some(Point::new(0, 0)));

        engine.request_direction(Direction::Down);
        assert_eq!(engine.step(), StepOutcome::GameOver(GameEndReason::SelfCollision));
    }

    #[test]
    fn test_speed_never_exceeds_cap() {
        let mut engine = SnakeEngine::new(settings(100, WallMode::Wrap), SessionRng::new(9));

        for _ in 0..90 {
            let head = engine.snapshot().head().unwrap();
            engine.set_food(Some(Point::new((head.x + 1) % 100, head.y)));
            assert!(matches!(engine.step(), StepOutcome::AteFood { .. }));
            assert!(engine.snapshot().speed <= MAX_SPEED);
        }

        let state = engine.snapshot();
        assert_eq!(state.speed, MAX_SPEED);
        assert_eq!(state.score, 900);
        assert_eq!(state.snake.len(), 93);
        assert_eq!(engine.tick_interval(), Duration::from_secs_f32(1.0 / MAX_SPEED));
    }

    #[test]
    fn test_filling_the_board_is_a_win() {
        let grid_size = 5;
        let serpentine: Vec<Point> = (0..grid_size)
            .flat_map(|y| {
                let row: Vec<Point> = if y % 2 == 0 {
                    (0..grid_size).map(|x| Point::new(x, y)).collect()
                } else {
                    (0..grid_size).rev().map(|x| Point::new(x, y)).collect()
                };
                row
            })
            .collect();

        let mut engine = SnakeEngine::new(settings(grid_size, WallMode::Solid), SessionRng::new(5));
        let body: Vec<Point> = serpentine[..24].iter().rev().copied().collect();
        assert_eq!(body[0], Point::new(3, 4));
        engine.set_snake(body, Direction::Right);
        engine.set_food(Some(Point::new(4, 4)));

        assert_eq!(engine.step(), StepOutcome::GameOver(GameEndReason::BoardFilled));
        let state = engine.snapshot();
        assert!(state.is_game_over);
        assert_eq!(state.food, None);
        assert_eq!(state.snake.len(), 25);
        assert_eq!(state.score, 10);
        assert!(state.end_reason.unwrap().is_win());
    }

    #[test]
    fn test_snapshots_are_equal_and_independent() {
        let engine = create_engine(WallMode::Solid);
        let mut first = engine.snapshot();
        let second = engine.snapshot();
        assert_eq!(first, second);

        first.snake.clear();
        first.score = 999;
        first.is_game_over = true;
        assert_eq!(engine.snapshot(), second);
    }

    #[test]
    fn test_pause_blocks_steps_until_resume() {
        let mut engine = create_engine(WallMode::Solid);
        engine.set_food(Some(Point::new(0, 0)));
        let before = engine.snapshot();

        engine.pause();
        assert!(engine.is_paused());
        assert_eq!(engine.step(), StepOutcome::Skipped);
        assert_eq!(engine.snapshot().snake, before.snake);

        engine.toggle_pause();
        assert!(!engine.is_paused());
        assert_eq!(engine.step(), StepOutcome::Moved);
    }

    #[test]
    fn test_pause_is_ignored_after_game_over() {
        let mut engine = create_engine(WallMode::Solid);
        engine.set_snake(points(&[(19, 5), (18, 5), (17, 5)]), Direction::Right);
        engine.step();
        engine.pause();
        assert!(engine.is_game_over());
        assert!(!engine.is_paused());
    }

    #[test]
    fn test_settings_update_applies_mid_game() {
        let mut engine = create_engine(WallMode::Solid);
        engine.set_snake(points(&[(19, 5), (18, 5), (17, 5)]), Direction::Right);
        engine.set_food(Some(Point::new(10, 10)));

        engine.update_settings(&SettingsUpdate {
            wall_mode: Some(WallMode::Wrap),
            initial_speed: Some(4.0),
            sound_enabled: Some(false),
        });

        let state = engine.snapshot();
        assert_eq!(state.wall_mode, WallMode::Wrap);
        assert_eq!(state.speed, 4.0);
        assert!(!state.sound_enabled);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(engine.tick_interval(), Duration::from_millis(250));

        assert_eq!(engine.step(), StepOutcome::Moved);
        assert_eq!(engine.snapshot().head(), Some(Point::new(0, 5)));
        assert_eq!(engine.settings().wall_mode, WallMode::Wrap);
    }

    #[test]
    fn test_reset_discards_round() {
        let mut engine = create_engine(WallMode::Solid);
        engine.set_snake(points(&[(19, 5), (18, 5), (17, 5)]), Direction::Right);
        engine.step();
        assert!(engine.is_game_over());

        engine.reset(settings(10, WallMode::Wrap));
        let state = engine.snapshot();
        assert!(!state.is_game_over);
        assert_eq!(state.end_reason, None);
        assert_eq!(state.grid_size, 10);
        assert_eq!(state.wall_mode, WallMode::Wrap);
        assert_eq!(state.snake, points(&[(5, 5), (4, 5), (3, 5)]));
        assert_eq!(state.score, 0);
    }
}
