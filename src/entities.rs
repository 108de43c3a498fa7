//! All game entity types — pure data, no logic.

use crate::consts::*;

// ── Player craft ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Craft {
    /// Top-left corner, logical pixels.
    pub x: f32,
    pub y: f32,
    /// Pixels moved per frame per held direction key.
    pub speed: f32,
}

// ── Field objects ─────────────────────────────────────────────────────────────

/// An asteroid. Deactivated on contact and never reactivated; entries are
/// never removed from their container.
#[derive(Clone, Debug, PartialEq)]
pub struct Hazard {
    /// Center position, logical pixels.
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub active: bool,
}

/// A crystal. Deactivated on collection; reactivated either by its own
/// respawn countdown or by the next top-of-screen reset, whichever fires
/// first.
#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    /// Center position, logical pixels.
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub active: bool,
    /// Ticks until respawn, armed on collection. `None` when idle.
    pub respawn_timer: Option<u32>,
}

// ── Scrolling backdrop ────────────────────────────────────────────────────────

/// Two screen-sized tiles cycled vertically. Invariant: the tiles are always
/// exactly one screen height apart, so together they cover the visible area.
#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    /// Top edge of each tile, logical pixels.
    pub tile1_y: f32,
    pub tile2_y: f32,
}

impl Backdrop {
    pub fn new() -> Self {
        // First tile flush with the screen, second directly above it.
        Backdrop {
            tile1_y: 0.0,
            tile2_y: -SCREEN_HEIGHT,
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

// ── Input snapshot ────────────────────────────────────────────────────────────

/// Directional keys held this frame. Directions apply independently at full
/// speed: no diagonal normalization, opposite keys cancel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

// ── Frame events ──────────────────────────────────────────────────────────────

/// What happened during one tick, for the binary to react to (sounds).
/// The simulation itself never touches the audio device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameEvent {
    /// Craft reached the top of the screen.
    ReachedTop,
    /// A crystal was collected.
    Collected,
    /// An asteroid was struck.
    HazardStruck,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so pure update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub craft: Craft,
    pub hazards: Vec<Hazard>,
    pub collectibles: Vec<Collectible>,
    pub backdrop: Backdrop,
    /// Unbounded in both directions: hazard hits can push it negative.
    pub score: i32,
    pub frame: u64,
}
