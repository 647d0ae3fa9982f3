use crate::games::SessionRng;
use super::snake::Snake;
use super::types::Point;

const MAX_SAMPLING_ATTEMPTS: usize = 100;

/// Picks a cell uniformly among the cells the snake does not occupy.
///
/// Random probing handles the common sparse board; once it keeps missing, the free cells are
/// enumerated and one is drawn directly, so a crowded board still terminates. Returns `None`
/// only when the snake covers the whole grid.
pub fn place_food(snake: &Snake, grid_size: usize, rng: &mut SessionRng) -> Option<Point> {
    let cell_count = grid_size * grid_size;
    if snake.len() >= cell_count {
        return None;
    }

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let candidate = Point::new(rng.random_range(0..grid_size), rng.random_range(0..grid_size));
        if !snake.contains(&candidate) {
            return Some(candidate);
        }
    }

    let free: Vec<Point> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Point::new(x, y)))
        .filter(|p| !snake.contains(p))
        .collect();

    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}
