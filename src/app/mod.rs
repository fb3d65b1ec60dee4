use ggez::event::EventHandler;
use ggez::graphics::{Canvas, Color, DrawParam, Mesh, PxScale, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameError, GameResult};

use crate::app::assets::Assets;
use crate::app::control::{Control, State};
use crate::app::sfx::Sfx;
use crate::basic::Dir;
use crate::error::Result;
use crate::game::{Event, Game};
use crate::rendering;

pub mod assets;
pub mod control;
pub mod sfx;

/// Simulation rate, one movement step every 100ms
pub const TICKS_PER_SECOND: f64 = 10.;

pub struct App {
    control: Control,
    game: Game,

    assets: Assets,
    sfx: Sfx,

    wall_mesh: Mesh,
    /// Regenerated only when the score actually changes
    score_text: Text,
}

impl App {
    pub fn new(ctx: &mut Context) -> Result<Self> {
        Ok(Self {
            control: Control::new(TICKS_PER_SECOND),
            game: Game::new(),
            assets: Assets::load(ctx)?,
            sfx: Sfx::load(ctx)?,
            wall_mesh: rendering::wall_mesh(ctx)?,
            score_text: score_text(0),
        })
    }

    fn set_score_display(&mut self, ctx: &mut Context, score: u32) {
        self.score_text = score_text(score);
        ctx.gfx.set_window_title(&format!("Score: {}", score));
    }

    fn draw_playfield(&self, ctx: &mut Context, canvas: &mut Canvas) -> GameResult {
        if let Some(image) = self.assets.get("hamburger") {
            canvas.draw(image, rendering::fit_to_rect(image, rendering::cell_rect(self.game.food)));
        }

        let dead = self.control.state() == State::GameOver;
        let snake = rendering::snake_mesh(ctx, &self.game.snake, dead)?;
        canvas.draw(&snake, DrawParam::default());

        canvas.draw(
            &self.score_text,
            DrawParam::default().dest([4., 1.]).color(Color::BLACK),
        );
        Ok(())
    }

    fn draw_overlay(&self, canvas: &mut Canvas, name: &str) {
        if let Some(image) = self.assets.get(name) {
            canvas.draw(image, rendering::fit_to_rect(image, rendering::screen_rect()));
        }
    }
}

fn score_text(score: u32) -> Text {
    let mut text = Text::new(format!("Score: {}", score));
    text.set_scale(PxScale::from(18.));
    text
}

impl EventHandler<GameError> for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while self.control.can_update() {
            for event in self.game.tick() {
                match event {
                    Event::Ate => self.sfx.play(ctx, "chomp"),
                    Event::ScoreChanged(score) => self.set_score_display(ctx, score),
                    Event::Died => {
                        self.control.game_over();
                        self.sfx.play(ctx, "die");
                    }
                }
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, rendering::BACKGROUND_COLOR);
        canvas.draw(&self.wall_mesh, DrawParam::default());

        match self.control.state() {
            State::TitleScreen => self.draw_overlay(&mut canvas, "title"),
            State::Playing => self.draw_playfield(ctx, &mut canvas)?,
            State::Paused => {
                self.draw_playfield(ctx, &mut canvas)?;
                self.draw_overlay(&mut canvas, "pause");
            }
            State::GameOver => {
                self.draw_playfield(ctx, &mut canvas)?;
                self.draw_overlay(&mut canvas, "game_over");
            }
        }

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        let keycode = match input.keycode {
            Some(keycode) => keycode,
            None => return Ok(()),
        };

        // quit from any state
        if keycode == KeyCode::Escape {
            ctx.request_quit();
            return Ok(());
        }

        match self.control.state() {
            State::TitleScreen => {
                if keycode == KeyCode::Return {
                    self.control.begin();
                }
            }
            State::Playing => match keycode {
                KeyCode::Up => self.game.propose_direction(Dir::Up),
                KeyCode::Down => self.game.propose_direction(Dir::Down),
                KeyCode::Left => self.game.propose_direction(Dir::Left),
                KeyCode::Right => self.game.propose_direction(Dir::Right),
                KeyCode::P => self.control.pause(),
                _ => {}
            },
            State::Paused => {
                if keycode == KeyCode::P {
                    self.control.unpause();
                }
            }
            State::GameOver => {
                if keycode == KeyCode::Return {
                    self.game.reset();
                    self.set_score_display(ctx, 0);
                    self.control.to_title();
                }
            }
        }

        Ok(())
    }
}
