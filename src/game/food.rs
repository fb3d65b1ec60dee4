use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::basic::board::{
    CELL_HEIGHT, CELL_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, WALL_THICKNESS,
};
use crate::basic::Point;
use crate::game::snake::Snake;

/// How many random draws to try before falling back to enumerating
/// the free cells
const MAX_RANDOM_ATTEMPTS: usize = 16;

const INTERIOR_COLS: i32 = (SCREEN_WIDTH - WALL_THICKNESS * 2) / CELL_WIDTH;
const INTERIOR_ROWS: i32 = (SCREEN_HEIGHT - WALL_THICKNESS * 2) / CELL_HEIGHT;

fn cell_at(col: i32, row: i32) -> Point {
    Point::new(
        WALL_THICKNESS + col * CELL_WIDTH,
        WALL_THICKNESS + row * CELL_HEIGHT,
    )
}

/// Picks a uniformly random unoccupied cell strictly inside the
/// interior. Random draws are bounded; on a nearly full board the
/// free cells are enumerated instead so this always terminates.
/// `None` means the board is completely full.
pub fn spawn(snake: &Snake, rng: &mut impl Rng) -> Option<Point> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let pos = cell_at(
            rng.gen_range(0..INTERIOR_COLS),
            rng.gen_range(0..INTERIOR_ROWS),
        );
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }

    // the snake covers most of the board, sample from the explicit
    // set of free cells
    let free = (0..INTERIOR_COLS)
        .cartesian_product(0..INTERIOR_ROWS)
        .map(|(col, row)| cell_at(col, row))
        .filter(|&pos| !snake.occupies(pos))
        .collect::<Vec<_>>();
    free.choose(rng).copied()
}
