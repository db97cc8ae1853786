//! Player loop state.
//!
//! Holds the UI-facing state of one playback session. Sync state (the
//! current slide index) lives in the `Synchronizer`, and pause/position
//! live in the clock; keeping them out of this struct means no field here
//! can drift out of agreement with the engine.

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// UI state for the session loop.
#[derive(Debug)]
pub struct PlayerState {
    /// Seconds jumped by a single arrow-key seek
    pub seek_step: f64,
    /// True when the status area needs to be redrawn
    pub needs_render: bool,
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
}

impl PlayerState {
    pub fn new(term_cols: u16, term_rows: u16, seek_step: f64) -> Self {
        Self {
            seek_step,
            needs_render: true,
            term_cols,
            term_rows,
        }
    }

    /// Handle a terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }
}
