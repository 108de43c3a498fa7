//! Sound effects — rodio, fire-and-forget playback.
//!
//! Two clips load once at startup.  If the audio device cannot be opened or
//! either file is unreadable, every play call becomes a no-op; a missing
//! sound never stops the game.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use log::warn;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

pub struct Audio {
    inner: Option<Loaded>,
}

struct Loaded {
    stream: OutputStream,
    point: Vec<u8>,
    crash: Vec<u8>,
}

impl Audio {
    /// Load from the fixed relative `sounds/` directory.
    pub fn load() -> Audio {
        Self::load_from(Path::new("sounds"))
    }

    pub fn load_from(dir: &Path) -> Audio {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(err) => {
                warn!("audio device unavailable ({err}); sound disabled");
                return Audio { inner: None };
            }
        };
        match (fs::read(dir.join("point.wav")), fs::read(dir.join("crash.wav"))) {
            (Ok(point), Ok(crash)) => Audio {
                inner: Some(Loaded { stream, point, crash }),
            },
            (Err(err), _) | (_, Err(err)) => {
                warn!("sound load failed ({err}); sound disabled");
                Audio { inner: None }
            }
        }
    }

    /// Scoring chime (top of screen, crystal collected).
    pub fn play_point(&self) {
        if let Some(loaded) = &self.inner {
            loaded.play(&loaded.point);
        }
    }

    /// Asteroid crash.
    pub fn play_crash(&self) {
        if let Some(loaded) = &self.inner {
            loaded.play(&loaded.crash);
        }
    }
}

impl Loaded {
    fn play(&self, bytes: &[u8]) {
        let cursor = Cursor::new(bytes.to_vec());
        if let Ok(source) = Decoder::new(cursor) {
            let sink = Sink::connect_new(self.stream.mixer());
            sink.append(source);
            sink.detach();
        }
    }
}
