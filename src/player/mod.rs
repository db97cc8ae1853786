//! Playback player module
//!
//! Maps a live playback clock onto a finalized timeline and drives the
//! slide display from it.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `sync`: the synchronizer state machine (reset, advance, seek, track end)
//! - `clock`: the playback clock seam and the wall-clock implementation
//! - `state`: loop state and shared types (PlayerState, InputResult)
//! - `input/`: keyboard input handling
//! - `render/`: console rendering (slide panel, progress bar, status bar)
//! - `session`: the event loop tying the pieces together

pub mod clock;
pub(crate) mod input;
pub mod render;
pub mod session;
pub mod state;
pub mod sync;

pub use clock::{PlaybackClock, PlaybackStartError, WallClock};
pub use session::{Session, SessionOptions, SyncStrategy};
pub use state::{InputResult, PlayerState};
pub use sync::{SlideDisplay, Synchronizer};
