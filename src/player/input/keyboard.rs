//! Keyboard input handling for the playback session.
//!
//! Maps key events to playback transitions: pause/resume, seeking, and
//! quitting. Every seek goes through both the clock and the synchronizer's
//! `seek_to`, so the displayed slide is re-derived from the new position in
//! the same event.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::clock::PlaybackClock;
use crate::player::state::{InputResult, PlayerState};
use crate::player::sync::{SlideDisplay, Synchronizer};

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that processes all key events
/// and updates state or returns control flow signals.
pub fn handle_key_event(
    key: KeyEvent,
    state: &mut PlayerState,
    sync: &mut Synchronizer,
    clock: &mut dyn PlaybackClock,
    display: &mut dyn SlideDisplay,
) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Pause / resume ===
        KeyCode::Char(' ') => {
            if clock.is_paused() {
                clock.resume();
            } else {
                clock.pause();
            }
            state.needs_render = true;
            InputResult::Continue
        }

        // === Seeking ===
        KeyCode::Left => {
            seek_by(-state.seek_step, state, sync, clock, display);
            InputResult::Continue
        }
        KeyCode::Right => {
            seek_by(state.seek_step, state, sync, clock, display);
            InputResult::Continue
        }
        KeyCode::Home => {
            seek_to(0.0, state, sync, clock, display);
            InputResult::Continue
        }
        KeyCode::End => {
            seek_to(clock.duration(), state, sync, clock, display);
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

fn seek_by(
    delta: f64,
    state: &mut PlayerState,
    sync: &mut Synchronizer,
    clock: &mut dyn PlaybackClock,
    display: &mut dyn SlideDisplay,
) {
    let target = (clock.current_time() + delta).clamp(0.0, clock.duration());
    seek_to(target, state, sync, clock, display);
}

fn seek_to(
    target: f64,
    state: &mut PlayerState,
    sync: &mut Synchronizer,
    clock: &mut dyn PlaybackClock,
    display: &mut dyn SlideDisplay,
) {
    clock.seek(target);
    sync.seek_to(clock.current_time(), display);
    state.needs_render = true;
}
