use static_assertions::const_assert_eq;

use crate::basic::Point;

pub const SCREEN_WIDTH: i32 = 680;
pub const SCREEN_HEIGHT: i32 = 400;

pub const WALL_THICKNESS: i32 = 20;

pub const CELL_WIDTH: i32 = 20;
pub const CELL_HEIGHT: i32 = 20;

/// Number of cells in the playable interior
pub const CELL_COUNT: i32 = ((SCREEN_WIDTH - WALL_THICKNESS * 2)
    * (SCREEN_HEIGHT - WALL_THICKNESS * 2))
    / (CELL_WIDTH * CELL_HEIGHT);

pub const SNAKE_START: Point = Point::new(200, 200);
pub const SNAKE_SPAWN_LENGTH: usize = 5;

// the interior must be a whole number of cells
const_assert_eq!((SCREEN_WIDTH - WALL_THICKNESS * 2) % CELL_WIDTH, 0);
const_assert_eq!((SCREEN_HEIGHT - WALL_THICKNESS * 2) % CELL_HEIGHT, 0);

pub const INTERIOR_LEFT: i32 = WALL_THICKNESS;
pub const INTERIOR_TOP: i32 = WALL_THICKNESS;
pub const INTERIOR_RIGHT: i32 = SCREEN_WIDTH - WALL_THICKNESS;
pub const INTERIOR_BOTTOM: i32 = SCREEN_HEIGHT - WALL_THICKNESS;

/// Whether a cell at `point` lies fully within the playable interior
pub fn in_interior(point: Point) -> bool {
    point.x >= INTERIOR_LEFT
        && point.x < INTERIOR_RIGHT
        && point.y >= INTERIOR_TOP
        && point.y < INTERIOR_BOTTOM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_bounds() {
        assert!(in_interior(Point::new(INTERIOR_LEFT, INTERIOR_TOP)));
        assert!(in_interior(Point::new(
            INTERIOR_RIGHT - CELL_WIDTH,
            INTERIOR_BOTTOM - CELL_HEIGHT
        )));

        assert!(!in_interior(Point::new(INTERIOR_LEFT - CELL_WIDTH, INTERIOR_TOP)));
        assert!(!in_interior(Point::new(INTERIOR_RIGHT, INTERIOR_TOP)));
        assert!(!in_interior(Point::new(INTERIOR_LEFT, INTERIOR_TOP - CELL_HEIGHT)));
        assert!(!in_interior(Point::new(INTERIOR_LEFT, INTERIOR_BOTTOM)));
    }

    #[test]
    fn cell_count() {
        assert_eq!(CELL_COUNT, 576);
    }
}
