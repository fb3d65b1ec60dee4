use crate::basic::board;
use crate::game::snake::Snake;

/// Whether the snake's head has run into its own body or a wall.
/// Pure check over the current body, evaluated after movement; both
/// outcomes are fatal, self-collision is checked first by convention.
pub fn check(snake: &Snake) -> bool {
    if snake.self_collides() {
        return true;
    }
    !board::in_interior(snake.head())
}
