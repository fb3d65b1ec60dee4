use std::collections::VecDeque;

use crate::basic::board::{CELL_WIDTH, SNAKE_SPAWN_LENGTH};
use crate::basic::{Dir, Point};

pub struct Snake {
    /// Occupied cells, head at the front
    pub cells: VecDeque<Point>,
    /// Direction the snake is currently going, doubles as the
    /// no-reverse baseline when no turns are queued
    pub dir: Dir,
}

impl Snake {
    /// A fresh snake: a horizontal line of cells extending left from
    /// `head`, facing right
    pub fn spawn(head: Point) -> Self {
        let cells = (0..SNAKE_SPAWN_LENGTH)
            .map(|i| Point::new(head.x - i as i32 * CELL_WIDTH, head.y))
            .collect();
        Self { cells, dir: Dir::Right }
    }

    pub fn head(&self) -> Point {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Where the head will be after the next movement step
    pub fn next_head(&self) -> Point {
        self.head() + self.dir.velocity()
    }

    /// Moves the snake one cell in its current direction. Growing
    /// keeps the tail for a net length of +1; otherwise the tail is
    /// dropped, except that the snake never shrinks below its spawn
    /// length.
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.next_head();
        self.cells.push_front(new_head);
        if !grow && self.cells.len() > SNAKE_SPAWN_LENGTH {
            self.cells.pop_back();
        }
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }

    /// Whether the head has run into the rest of the body
    pub fn self_collides(&self) -> bool {
        let head = self.head();
        self.cells.iter().skip(1).any(|&cell| cell == head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::board::SNAKE_START;

    #[test]
    fn spawn_layout() {
        let snake = Snake::spawn(SNAKE_START);
        assert_eq!(snake.len(), SNAKE_SPAWN_LENGTH);
        assert_eq!(snake.dir, Dir::Right);

        let expected: Vec<_> = (0..5)
            .map(|i| Point::new(200 - i * CELL_WIDTH, 200))
            .collect();
        assert!(snake.cells.iter().copied().eq(expected));
    }

    #[test]
    fn advance_keeps_length_constant() {
        let mut snake = Snake::spawn(SNAKE_START);
        snake.advance(false);
        assert_eq!(snake.len(), SNAKE_SPAWN_LENGTH);
        assert_eq!(snake.head(), Point::new(220, 200));
        // the tail was dropped
        assert!(!snake.occupies(Point::new(120, 200)));
    }

    #[test]
    fn advance_with_growth() {
        let mut snake = Snake::spawn(SNAKE_START);
        snake.advance(true);
        assert_eq!(snake.len(), SNAKE_SPAWN_LENGTH + 1);
        // the tail stays put
        assert!(snake.occupies(Point::new(120, 200)));
    }

    #[test]
    fn never_shrinks_below_spawn_length() {
        // a degenerate short snake grows back up to the spawn length
        let mut snake = Snake {
            cells: [Point::new(200, 200), Point::new(180, 200), Point::new(160, 200)]
                .into_iter()
                .collect(),
            dir: Dir::Right,
        };
        snake.advance(false);
        assert_eq!(snake.len(), 4);
        snake.advance(false);
        assert_eq!(snake.len(), 5);
        snake.advance(false);
        assert_eq!(snake.len(), 5);
    }

    #[test]
    fn self_collision() {
        let mut snake = Snake::spawn(SNAKE_START);
        assert!(!snake.self_collides());

        // a tight left turn immediately reverses into the neck
        snake.dir = Dir::Left;
        snake.advance(false);
        assert!(snake.self_collides());
    }
}
