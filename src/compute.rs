//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! value.  Side effects are limited to the injected RNG, so a seeded
//! `StdRng` makes every run reproducible in tests — no display required.

use rand::Rng;

use crate::consts::*;
use crate::entities::{
    Backdrop, Collectible, Craft, FrameEvent, GameState, Hazard, InputState,
};

// ── Random placement ─────────────────────────────────────────────────────────

/// A random position in the upper half of the field, kept clear of the side
/// edges.  Used for initial placement and every respawn.
fn random_field_position(rng: &mut impl Rng) -> (f32, f32) {
    let x = rng.gen_range(SPAWN_MARGIN..=SCREEN_WIDTH - SPAWN_MARGIN);
    let y = rng.gen_range(SPAWN_MARGIN..=SCREEN_HEIGHT / 2.0);
    (x, y)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: craft on the start row, five asteroids and
/// three crystals scattered over the upper half of the field.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    let hazards = (0..HAZARD_COUNT)
        .map(|_| {
            let (x, y) = random_field_position(rng);
            Hazard {
                x,
                y,
                size: HAZARD_SIZE,
                active: true,
            }
        })
        .collect();

    let collectibles = (0..COLLECTIBLE_COUNT)
        .map(|_| {
            let (x, y) = random_field_position(rng);
            Collectible {
                x,
                y,
                size: COLLECTIBLE_SIZE,
                active: true,
                respawn_timer: None,
            }
        })
        .collect();

    GameState {
        craft: Craft {
            x: SCREEN_WIDTH / 2.0,
            y: CRAFT_START_Y,
            speed: CRAFT_SPEED,
        },
        hazards,
        collectibles,
        backdrop: Backdrop::new(),
        score: 0,
        frame: 0,
    }
}

// ── Input-driven state transition (pure) ─────────────────────────────────────

/// Apply one frame of held-key movement.  Each direction adds its full speed
/// independently (opposite keys cancel, diagonals are not normalized), then
/// each axis is clamped so the craft never leaves the screen rectangle.
pub fn steer(state: &GameState, input: InputState) -> GameState {
    let craft = &state.craft;
    let mut x = craft.x;
    let mut y = craft.y;

    if input.left {
        x -= craft.speed;
    }
    if input.right {
        x += craft.speed;
    }
    if input.up {
        y -= craft.speed;
    }
    if input.down {
        y += craft.speed;
    }

    GameState {
        craft: Craft {
            x: x.clamp(0.0, SCREEN_WIDTH - CRAFT_WIDTH),
            y: y.clamp(0.0, SCREEN_HEIGHT - CRAFT_HEIGHT),
            ..craft.clone()
        },
        ..state.clone()
    }
}

// ── Collision test ───────────────────────────────────────────────────────────

/// True iff the distance from the craft's bounding-box center to `(x, y)` is
/// strictly below `size + CRAFT_HIT_RADIUS`.  Grazing contact at exactly the
/// threshold is no collision.
pub fn check_collision(craft: &Craft, x: f32, y: f32, size: f32) -> bool {
    let cx = craft.x + CRAFT_WIDTH / 2.0;
    let cy = craft.y + CRAFT_HEIGHT / 2.0;
    let distance = ((cx - x).powi(2) + (cy - y).powi(2)).sqrt();
    distance < size + CRAFT_HIT_RADIUS
}

// ── Backdrop scroll ──────────────────────────────────────────────────────────

/// Advance the two-tile loop by one frame.  A tile whose top edge passes the
/// bottom of the screen is moved flush above the other tile, so the pair
/// stays exactly one screen height apart.
pub fn scroll_backdrop(backdrop: &Backdrop) -> Backdrop {
    let mut tile1_y = backdrop.tile1_y + SCROLL_SPEED;
    let mut tile2_y = backdrop.tile2_y + SCROLL_SPEED;

    if tile1_y >= SCREEN_HEIGHT {
        tile1_y = tile2_y - SCREEN_HEIGHT;
    }
    if tile2_y >= SCREEN_HEIGHT {
        tile2_y = tile1_y - SCREEN_HEIGHT;
    }

    Backdrop { tile1_y, tile2_y }
}

// ── Per-frame tick (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one frame, after movement has been applied.
/// Returns the new state plus the events that occurred, in order, so the
/// caller can trigger sound effects.
///
/// Phase order mirrors the frame sequence: top-of-screen check, hazard pass,
/// collectible pass, difficulty ramp, backdrop scroll, respawn countdowns.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<FrameEvent>) {
    let mut events = Vec::new();
    let mut craft = state.craft.clone();
    let mut hazards = state.hazards.clone();
    let mut collectibles = state.collectibles.clone();
    let mut score = state.score;

    // ── 1. Top of screen: score, reset row, revive idle crystals ────────────
    if craft.y <= 0.0 {
        score += 1;
        events.push(FrameEvent::ReachedTop);
        craft.y = CRAFT_START_Y;

        // Pending countdowns keep running; the already-active guard in
        // phase 6 stops them from relocating a crystal revived here.
        for c in collectibles.iter_mut() {
            if !c.active {
                let (x, y) = random_field_position(rng);
                c.x = x;
                c.y = y;
                c.active = true;
            }
        }
    }

    // ── 2. Hazard pass ───────────────────────────────────────────────────────
    // The craft row resets on a hit, so later hazards in the same frame are
    // tested against the new position.
    for h in hazards.iter_mut() {
        if h.active && check_collision(&craft, h.x, h.y, h.size) {
            score -= 1;
            events.push(FrameEvent::HazardStruck);
            craft.y = CRAFT_START_Y;
            h.active = false;
        }
    }

    // ── 3. Collectible pass ──────────────────────────────────────────────────
    for c in collectibles.iter_mut() {
        if c.active && check_collision(&craft, c.x, c.y, c.size) {
            score += 5;
            events.push(FrameEvent::Collected);
            c.active = false;
            c.respawn_timer = Some(RESPAWN_DELAY_TICKS);
        }
    }

    // ── 4. Difficulty ramp ───────────────────────────────────────────────────
    // From HARD_MODE_SCORE up, each frame may admit one hazard from the right
    // edge, and every active hazard (including one spawned this frame) drifts
    // left.  Deactivated hazards stay where they died.
    if score >= HARD_MODE_SCORE {
        if rng.gen_bool(HAZARD_SPAWN_CHANCE) {
            hazards.push(Hazard {
                x: SCREEN_WIDTH,
                y: rng.gen_range(0.0..=SCREEN_HEIGHT),
                size: HAZARD_SIZE,
                active: true,
            });
        }
        for h in hazards.iter_mut() {
            if h.active {
                h.x -= HAZARD_DRIFT;
            }
        }
    }

    // ── 5. Backdrop scroll ───────────────────────────────────────────────────
    let backdrop = scroll_backdrop(&state.backdrop);

    // ── 6. Respawn countdowns (end of frame) ─────────────────────────────────
    // A countdown that expires on an already-active crystal is a no-op beyond
    // clearing itself: nothing is ever revived twice for one collection.
    for c in collectibles.iter_mut() {
        if let Some(remaining) = c.respawn_timer {
            if remaining == 0 {
                c.respawn_timer = None;
                if !c.active {
                    let (x, y) = random_field_position(rng);
                    c.x = x;
                    c.y = y;
                    c.active = true;
                }
            } else {
                c.respawn_timer = Some(remaining - 1);
            }
        }
    }

    let next = GameState {
        craft,
        hazards,
        collectibles,
        backdrop,
        score,
        frame: state.frame + 1,
    };
    (next, events)
}
