use ggez::audio::{SoundSource, Source};
use ggez::Context;

use crate::error::{Error, ErrorConversion, Result};

const SOUND_NAMES: [&str; 2] = ["chomp", "die"];

/// Sound effects looked up by logical name. Playback is
/// fire-and-forget; a sound failing to play must never take the game
/// loop down with it.
pub struct Sfx {
    sounds: Vec<(&'static str, Source)>,
}

impl Sfx {
    pub fn load(ctx: &mut Context) -> Result<Self> {
        let mut sounds = Vec::with_capacity(SOUND_NAMES.len());
        for name in SOUND_NAMES {
            let source = Source::new(ctx, format!("/{name}.wav"))
                .map_err(Error::from)
                .with_trace_step(format!("Sfx::load ({name})"))?;
            sounds.push((name, source));
        }
        Ok(Self { sounds })
    }

    pub fn play(&mut self, ctx: &Context, name: &str) {
        match self.sounds.iter_mut().find(|(n, _)| *n == name) {
            Some((_, source)) => {
                if let Err(e) = source.play_detached(ctx) {
                    eprintln!("warning: failed to play sound '{}': {}", name, e);
                }
            }
            None => eprintln!("warning: unknown sound '{}'", name),
        }
    }
}
