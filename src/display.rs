//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer plus an immutable view of the
//! game state and the load-time visual set.  No game logic is performed;
//! this module only scales logical 800×600 coordinates to terminal cells
//! and translates them into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use space_adventure::assets::{Visual, Visuals};
use space_adventure::consts::*;
use space_adventure::entities::{Backdrop, Collectible, Craft, GameState, Hazard};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_CRAFT: Color = Color::White;
const C_HAZARD: Color = Color::Red;
const C_CRYSTAL: Color = Color::Yellow;
const C_BACKDROP: Color = Color::DarkBlue;
const C_SCORE: Color = Color::White;

// ── Coordinate scaling ────────────────────────────────────────────────────────

/// Map a logical position to a terminal cell.  Returns `None` when the
/// position scales outside the visible grid (e.g. a backdrop tile parked
/// above the screen or a hazard that drifted past the left edge).
fn to_cell(x: f32, y: f32, cols: u16, rows: u16) -> Option<(u16, u16)> {
    let cx = (x / SCREEN_WIDTH * cols as f32).floor() as i32;
    let cy = (y / SCREEN_HEIGHT * rows as f32).floor() as i32;
    if cx < 0 || cy < 0 || cx >= cols as i32 || cy >= rows as i32 {
        None
    } else {
        Some((cx as u16, cy as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    visuals: &Visuals,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    if cols == 0 || rows == 0 {
        return Ok(());
    }

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_backdrop(out, &state.backdrop, &visuals.backdrop, cols, rows)?;
    draw_craft(out, &state.craft, &visuals.craft, cols, rows)?;
    for hazard in state.hazards.iter().filter(|h| h.active) {
        draw_hazard(out, hazard, &visuals.asteroid, cols, rows)?;
    }
    for crystal in state.collectibles.iter().filter(|c| c.active) {
        draw_collectible(out, crystal, &visuals.crystal, cols, rows)?;
    }
    draw_score(out, state)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Sprite plotting ───────────────────────────────────────────────────────────

/// Draw sprite rows so the block is centered on the given cell, clipped to
/// the terminal grid.
fn draw_sprite_centered<W: Write>(
    out: &mut W,
    rows_of: &[String],
    cx: u16,
    cy: u16,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let half_h = rows_of.len() as i32 / 2;
    for (i, line) in rows_of.iter().enumerate() {
        let y = cy as i32 - half_h + i as i32;
        if y < 0 || y >= rows as i32 {
            continue;
        }
        let x = cx as i32 - line.chars().count() as i32 / 2;
        let skip = (-x).max(0) as usize;
        let x = x.max(0) as u16;
        let span = (cols - x.min(cols)) as usize;
        let visible: String = line.chars().skip(skip).take(span).collect();
        if visible.is_empty() {
            continue;
        }
        out.queue(cursor::MoveTo(x, y as u16))?;
        out.queue(Print(visible))?;
    }
    Ok(())
}

// ── Backdrop ──────────────────────────────────────────────────────────────────

fn draw_backdrop<W: Write>(
    out: &mut W,
    backdrop: &Backdrop,
    visual: &Visual,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let sprite = match visual {
        Visual::Sprite(s) => s,
        // Fallback backdrop is solid black — the cleared screen already is.
        Visual::Shape(_) => return Ok(()),
    };

    out.queue(style::SetForegroundColor(C_BACKDROP))?;
    for tile_y in [backdrop.tile1_y, backdrop.tile2_y] {
        // Cell row of the tile's top edge; may start above the screen.
        let top = (tile_y / SCREEN_HEIGHT * rows as f32).floor() as i32;
        for (i, line) in sprite.rows.iter().enumerate() {
            let y = top + i as i32;
            if y < 0 || y >= rows as i32 {
                continue;
            }
            let visible: String = line.chars().take(cols as usize).collect();
            out.queue(cursor::MoveTo(0, y as u16))?;
            out.queue(Print(visible))?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_craft<W: Write>(
    out: &mut W,
    craft: &Craft,
    visual: &Visual,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_CRAFT))?;
    // Anchor on the craft's center so sprite and fallback line up.
    let Some((cx, cy)) = to_cell(
        craft.x + CRAFT_WIDTH / 2.0,
        craft.y + CRAFT_HEIGHT / 2.0,
        cols,
        rows,
    ) else {
        return Ok(());
    };

    match visual {
        Visual::Sprite(sprite) => draw_sprite_centered(out, &sprite.rows, cx, cy, cols, rows),
        Visual::Shape(_) => {
            // Apex-up triangle:
            //   ▲       ← tip
            //  /█\      ← fuselage + wings
            out.queue(cursor::MoveTo(cx, cy))?;
            out.queue(Print("▲"))?;
            if cy + 1 < rows {
                out.queue(cursor::MoveTo(cx.saturating_sub(1), cy + 1))?;
                out.queue(Print("/█\\"))?;
            }
            Ok(())
        }
    }
}

fn draw_hazard<W: Write>(
    out: &mut W,
    hazard: &Hazard,
    visual: &Visual,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let Some((cx, cy)) = to_cell(hazard.x, hazard.y, cols, rows) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_HAZARD))?;
    match visual {
        Visual::Sprite(sprite) => draw_sprite_centered(out, &sprite.rows, cx, cy, cols, rows),
        Visual::Shape(_) => {
            out.queue(cursor::MoveTo(cx, cy))?;
            out.queue(Print("●"))?;
            Ok(())
        }
    }
}

fn draw_collectible<W: Write>(
    out: &mut W,
    crystal: &Collectible,
    visual: &Visual,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let Some((cx, cy)) = to_cell(crystal.x, crystal.y, cols, rows) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_CRYSTAL))?;
    match visual {
        Visual::Sprite(sprite) => draw_sprite_centered(out, &sprite.rows, cx, cy, cols, rows),
        Visual::Shape(_) => {
            out.queue(cursor::MoveTo(cx, cy))?;
            out.queue(Print("●"))?;
            Ok(())
        }
    }
}

// ── Score overlay (top-left) ──────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;
    Ok(())
}
