//! Console rendering for the playback session.
//!
//! The slide panel, progress bar and status bar are drawn with direct ANSI
//! writes. The panel implements `SlideDisplay`, so the synchronizer drives
//! it through the same seam tests use for their recording stubs.

mod progress;
mod slide_panel;
mod status;

pub use progress::{build_progress_bar_chars, format_duration, render_progress_bar};
pub use slide_panel::ConsoleDisplay;
pub use status::{render_separator_line, render_status_bar};
