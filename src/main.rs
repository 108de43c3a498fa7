mod audio;
mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal,
    ExecutableCommand,
};
use rand::thread_rng;

use space_adventure::assets::{self, Visuals};
use space_adventure::compute::{init_state, steer, tick};
use space_adventure::entities::{FrameEvent, GameState, InputState};

use audio::Audio;

const FRAME: Duration = Duration::from_micros(16_667); // ≈60 FPS

// ── Held-key model ────────────────────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

/// Drain all pending input events (non-blocking), updating the held-key map.
/// Returns `true` when a quit signal arrived: Escape, or Ctrl-C as the
/// close signal.
fn drain_input(
    rx: &mpsc::Receiver<Event>,
    key_frame: &mut HashMap<KeyCode, u64>,
    frame: u64,
) -> bool {
    let mut quit = false;
    while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
        match kind {
            // Press: record key + handle one-shot actions
            KeyEventKind::Press => {
                key_frame.insert(code, frame);
                match code {
                    KeyCode::Esc => quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        quit = true;
                    }
                    _ => {}
                }
            }
            // Repeat: refresh timestamp so key stays "held"
            KeyEventKind::Repeat => {
                key_frame.insert(code, frame);
            }
            // Release: remove key immediately (keyboard-enhancement path)
            KeyEventKind::Release => {
                key_frame.remove(&code);
            }
        }
    }
    quit
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we check which arrows are still "fresh"
/// (within `HOLD_WINDOW` frames) and apply all of them simultaneously — four
/// directions with no interference, matching held-key movement.
///
/// The input channel is drained twice per frame, at the top of the loop and
/// again after the frame wait; quit can land at either point.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    visuals: &Visuals,
    audio: &Audio,
) -> std::io::Result<()> {
    let mut rng = thread_rng();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        if drain_input(rx, &mut key_frame, frame) {
            return Ok(());
        }

        // ── Steer from held arrows, then advance the simulation ─────────────
        let input = InputState {
            left: is_held(&key_frame, &KeyCode::Left, frame),
            right: is_held(&key_frame, &KeyCode::Right, frame),
            up: is_held(&key_frame, &KeyCode::Up, frame),
            down: is_held(&key_frame, &KeyCode::Down, frame),
        };
        *state = steer(state, input);

        let (next, events) = tick(state, &mut rng);
        *state = next;

        for ev in &events {
            match ev {
                FrameEvent::ReachedTop | FrameEvent::Collected => audio.play_point(),
                FrameEvent::HazardStruck => audio.play_crash(),
            }
        }

        display::render(out, state, visuals)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }

        if drain_input(rx, &mut key_frame, frame) {
            return Ok(());
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();

    // Load assets before touching the terminal so any degradation warnings
    // land on a normal screen.
    let visuals = assets::load_visuals();
    let audio = Audio::load();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(terminal::SetTitle("Space Adventure"))?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let mut state = init_state(&mut thread_rng());
    let result = game_loop(&mut out, &mut state, &rx, &visuals, &audio);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
