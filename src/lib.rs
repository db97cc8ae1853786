//! lyricvis - lyric slideshow visualizer
//!
//! Synchronizes a sequence of image slides to an audio track's timing.
//! The core is the timed-slide synchronization engine: a `Timeline` maps
//! playback time to slides, and a `Synchronizer` keeps the displayed slide
//! consistent under play, pause, seek and end-of-track.
//!
//! # Architecture
//!
//! - `slides`: slide discovery and the opaque `SlideRef` handle
//! - `timeline`: timeline construction (explicit timestamps or uniform spacing)
//! - `cues`: cue sheets carrying explicit per-slide timestamps
//! - `player`: the synchronizer, playback clock, and session loop
//! - `config`: application configuration
//!
//! # Usage
//!
//! ```no_run
//! use lyricvis::{Session, SessionOptions, Timeline};
//! use lyricvis::slides::collect_slides;
//! use std::path::Path;
//!
//! let slides = collect_slides(Path::new("slides/")).unwrap();
//! let timeline = Timeline::from_uniform(slides, 180.0).unwrap();
//! let mut session = Session::with_wall_clock(timeline, 180.0, SessionOptions::default());
//! session.run().unwrap();
//! ```

pub mod config;
pub mod cues;
pub mod player;
pub mod slides;
pub mod timeline;

pub use config::Config;
pub use cues::CueSheet;
pub use player::{
    PlaybackClock, PlaybackStartError, Session, SessionOptions, SlideDisplay, SyncStrategy,
    Synchronizer, WallClock,
};
pub use slides::SlideRef;
pub use timeline::{TimedSlide, Timeline, TimelineError};
