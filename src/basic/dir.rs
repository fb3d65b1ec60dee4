use std::ops::Neg;

use crate::basic::board::{CELL_HEIGHT, CELL_WIDTH};
use crate::basic::Point;
use Dir::*;

/// The four directions the snake can travel in on the grid
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

impl Dir {
    /// Displacement of one cell per tick, y grows downwards
    pub fn velocity(self) -> Point {
        match self {
            Up => Point::new(0, -CELL_HEIGHT),
            Down => Point::new(0, CELL_HEIGHT),
            Left => Point::new(-CELL_WIDTH, 0),
            Right => Point::new(CELL_WIDTH, 0),
        }
    }
}

#[test]
fn test_opposites() {
    let pairs = [(Up, Down), (Down, Up), (Left, Right), (Right, Left)];

    for (dir, opposite) in pairs {
        assert_eq!(-dir, opposite);
        assert_eq!(dir.velocity() + opposite.velocity(), Point::new(0, 0));
    }
}
