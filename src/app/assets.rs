use ggez::graphics::Image;
use ggez::Context;

use crate::error::{Error, ErrorConversion, Result};

/// Overlay art and the food sprite, loaded once at startup and looked
/// up by logical name
const TEXTURE_NAMES: [&str; 4] = ["title", "pause", "game_over", "hamburger"];

pub struct Assets {
    textures: Vec<(&'static str, Image)>,
}

impl Assets {
    /// Missing or unreadable images are a fatal initialization error
    pub fn load(ctx: &mut Context) -> Result<Self> {
        let mut textures = Vec::with_capacity(TEXTURE_NAMES.len());
        for name in TEXTURE_NAMES {
            let image = Image::from_path(ctx, format!("/{name}.png"))
                .map_err(Error::from)
                .with_trace_step(format!("Assets::load ({name})"))?;
            textures.push((name, image));
        }
        Ok(Self { textures })
    }

    pub fn get(&self, name: &str) -> Option<&Image> {
        self.textures
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, image)| image)
    }
}
