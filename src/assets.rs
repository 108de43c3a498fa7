//! Sprite loading with primitive-shape fallback.
//!
//! Four text-art sprites are read once at startup.  If any of them fails to
//! load, all four visuals fall back to built-in solid-color shapes and a
//! diagnostic is logged; the game never aborts over a missing asset.

use std::fs;
use std::io;
use std::path::Path;

use log::warn;

/// A text-art sprite: rows of glyphs drawn as-is by the display layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub rows: Vec<String>,
}

/// Built-in fallback shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Apex-up filled triangle (craft).
    Triangle,
    /// Filled circle (asteroid, crystal).
    Circle,
    /// Solid fill (backdrop).
    Fill,
}

/// How to draw a thing, decided once at load time.
#[derive(Clone, Debug, PartialEq)]
pub enum Visual {
    Sprite(Sprite),
    Shape(Shape),
}

/// The full visual set for one game session.
#[derive(Clone, Debug, PartialEq)]
pub struct Visuals {
    pub craft: Visual,
    pub backdrop: Visual,
    pub crystal: Visual,
    pub asteroid: Visual,
}

impl Visuals {
    /// The all-primitive fallback set.
    fn shapes() -> Self {
        Visuals {
            craft: Visual::Shape(Shape::Triangle),
            backdrop: Visual::Shape(Shape::Fill),
            crystal: Visual::Shape(Shape::Circle),
            asteroid: Visual::Shape(Shape::Circle),
        }
    }
}

fn load_sprite(path: &Path) -> io::Result<Sprite> {
    let text = fs::read_to_string(path)?;
    let rows: Vec<String> = text
        .lines()
        .map(|l| l.trim_end().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: empty sprite", path.display()),
        ));
    }
    Ok(Sprite { rows })
}

/// Load all four sprites from `dir`, or fall back to shapes if any is
/// missing or unreadable.  One failure drops the whole set: the game either
/// looks fully dressed or fully primitive, never a mix.
pub fn load_visuals_from(dir: &Path) -> Visuals {
    let load = || -> io::Result<Visuals> {
        Ok(Visuals {
            craft: Visual::Sprite(load_sprite(&dir.join("spaceship.txt"))?),
            backdrop: Visual::Sprite(load_sprite(&dir.join("background.txt"))?),
            crystal: Visual::Sprite(load_sprite(&dir.join("crystal.txt"))?),
            asteroid: Visual::Sprite(load_sprite(&dir.join("asteroid.txt"))?),
        })
    };
    match load() {
        Ok(visuals) => visuals,
        Err(err) => {
            warn!("sprite load failed ({err}); using primitive shapes");
            Visuals::shapes()
        }
    }
}

/// Load from the fixed relative `sprites/` directory.
pub fn load_visuals() -> Visuals {
    load_visuals_from(Path::new("sprites"))
}
