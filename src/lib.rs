//! Space Adventure — a vertically scrolling crystal-collecting arcade game.
//!
//! Core modules:
//! - `entities`: game entity types, pure data
//! - `compute`: pure state-transition functions (the whole simulation)
//! - `assets`: sprite loading with primitive-shape fallback
//!
//! The simulation runs in a fixed 800×600 logical pixel space; the binary's
//! display layer scales logical coordinates to terminal cells at draw time.

pub mod assets;
pub mod compute;
pub mod entities;

/// Game configuration constants (logical pixels unless noted).
pub mod consts {
    /// Logical play-field dimensions.
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Craft bounding box and per-frame speed.
    pub const CRAFT_WIDTH: f32 = 40.0;
    pub const CRAFT_HEIGHT: f32 = 60.0;
    pub const CRAFT_SPEED: f32 = 5.0;
    /// Craft's collision radius added to the other object's size.
    pub const CRAFT_HIT_RADIUS: f32 = 20.0;

    /// Vertical start row; the craft returns here on scoring or a crash.
    pub const CRAFT_START_Y: f32 = SCREEN_HEIGHT - 100.0;

    /// Initial object counts and sizes.
    pub const HAZARD_COUNT: usize = 5;
    pub const HAZARD_SIZE: f32 = 15.0;
    pub const COLLECTIBLE_COUNT: usize = 3;
    pub const COLLECTIBLE_SIZE: f32 = 10.0;

    /// Random placement keeps this margin from the side edges.
    pub const SPAWN_MARGIN: f32 = 20.0;

    /// Collectible respawn delay: 3000 ms at 60 fps.
    pub const RESPAWN_DELAY_TICKS: u32 = 180;

    /// Score at which the difficulty ramp kicks in.
    pub const HARD_MODE_SCORE: i32 = 10;
    /// Per-frame chance of a new hazard entering from the right edge.
    pub const HAZARD_SPAWN_CHANCE: f64 = 0.02;
    /// Leftward drift of active hazards once the ramp is on.
    pub const HAZARD_DRIFT: f32 = 2.0;

    /// Backdrop scroll rate.
    pub const SCROLL_SPEED: f32 = 2.0;
}
