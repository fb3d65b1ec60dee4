#[macro_use]
extern crate derive_more;

use std::{env, path};

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};

use crate::app::App;
use crate::basic::board::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod basic;
mod error;
mod game;
mod rendering;

fn main() -> Result {
    let resource_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        let mut path = path::PathBuf::from(manifest_dir);
        path.push("resources");
        path
    } else {
        path::PathBuf::from("./resources")
    };

    let (mut ctx, event_loop) = ContextBuilder::new("grid_snake", "grid_snake")
        .window_setup(WindowSetup::default().title("Score: 0").vsync(true))
        .window_mode(
            WindowMode::default()
                .dimensions(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
                .resizable(false),
        )
        .add_resource_path(resource_dir)
        .build()
        .map_err(Error::from)
        .with_trace_step("main")?;

    let app = App::new(&mut ctx).with_trace_step("main")?;
    event::run(ctx, event_loop, app)
}
