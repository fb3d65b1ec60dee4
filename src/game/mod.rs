use rand::prelude::*;

use crate::basic::board::{SNAKE_START, WALL_THICKNESS};
use crate::basic::{Dir, Point};

pub use event::Event;
pub use input_buffer::InputBuffer;
pub use snake::Snake;

pub mod collisions;
mod event;
pub mod food;
mod input_buffer;
mod snake;

/// The whole simulation state for one session. Owns the snake, the
/// input buffer, the food and the score; knows nothing about
/// rendering, audio or timing.
pub struct Game {
    pub snake: Snake,
    pub buffer: InputBuffer,
    pub food: Point,
    pub score: u32,
    /// Set on the tick the snake dies, stops all further movement
    pub game_over: bool,
    rng: ThreadRng,
}

impl Game {
    pub fn new() -> Self {
        let mut rng = thread_rng();
        let snake = Snake::spawn(SNAKE_START);
        let food = food::spawn(&snake, &mut rng)
            .unwrap_or(Point::new(WALL_THICKNESS, WALL_THICKNESS));
        Self {
            snake,
            buffer: InputBuffer::new(),
            food,
            score: 0,
            game_over: false,
            rng,
        }
    }

    /// Full session reset: snake respawned, food respawned, score
    /// zeroed, pending input discarded
    pub fn reset(&mut self) {
        self.snake = Snake::spawn(SNAKE_START);
        self.buffer.clear();
        self.score = 0;
        self.game_over = false;
        self.respawn_food();
    }

    /// Queues a turn unless it would reverse the snake into its own
    /// neck. The baseline is the most recently queued turn if any is
    /// pending, otherwise the direction the snake is going; checking
    /// against the queue tail is what lets rapid sequences like
    /// up-then-left within one tick queue correctly.
    pub fn propose_direction(&mut self, new_dir: Dir) {
        let effective = self.buffer.last().unwrap_or(self.snake.dir);
        if new_dir == -effective {
            return;
        }
        self.buffer.push(new_dir);
    }

    /// Advances the simulation by exactly one step: applies at most
    /// one queued turn, moves the snake, handles eating and runs
    /// collision detection. Returns the events the caller must act on.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = vec![];
        if self.game_over {
            return events;
        }

        if let Some(dir) = self.buffer.pop() {
            self.snake.dir = dir;
        }

        let ate = self.snake.next_head() == self.food;
        self.snake.advance(ate);

        if ate {
            self.score += 1;
            events.push(Event::Ate);
            events.push(Event::ScoreChanged(self.score));
            self.respawn_food();
        }

        if collisions::check(&self.snake) {
            self.game_over = true;
            events.push(Event::Died);
        }

        events
    }

    fn respawn_food(&mut self) {
        match food::spawn(&self.snake, &mut self.rng) {
            Some(pos) => self.food = pos,
            // grid size >> snake length, so this only happens when the
            // snake has filled the board
            None => eprintln!(
                "warning: no free cell left for food, leaving it at {:?}",
                self.food
            ),
        }
    }
}
