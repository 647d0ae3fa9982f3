use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Snake body, head first. `body_set` mirrors `body` for constant-time occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Lays out `length` segments starting at `head`, trailing away from `direction`.
    pub fn new(head: Point, direction: Direction, length: usize, grid_size: usize) -> Self {
        let (dx, dy) = match direction {
            Direction::Up => (0i64, 1i64),
            Direction::Down => (0, -1),
            Direction::Left => (1, 0),
            Direction::Right => (-1, 0),
        };

        let size = grid_size as i64;
        let mut segments = Vec::with_capacity(length);
        let mut current = head;
        for _ in 0..length.max(1) {
            segments.push(current);
            current = Point::new(
                ((current.x as i64 + dx + size) % size) as usize,
                ((current.y as i64 + dy + size) % size) as usize,
            );
        }

        Self::from_segments(segments)
    }

    pub fn from_segments(segments: impl IntoIterator<Item = Point>) -> Self {
        let body: VecDeque<Point> = segments.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn push_head(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    pub fn pop_tail(&mut self) -> Option<Point> {
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}
