//! `play` subcommand handler.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use lyricvis::cues::CueSheet;
use lyricvis::player::session::{Session, SessionOptions, SyncStrategy};
use lyricvis::slides::collect_slides;
use lyricvis::timeline::{Timeline, TimelineError};
use lyricvis::Config;

/// Launch a playback session for a slides directory.
///
/// The timeline comes from a cue sheet when one is given (or when the
/// configured default sheet exists next to the slides); otherwise the
/// track duration is divided evenly across all slides. Validation happens
/// before the terminal is touched, so bad input exits with a plain error
/// and the session never launches half-way.
pub fn handle_play(
    slides_dir: &Path,
    duration: f64,
    cues: Option<PathBuf>,
    strategy: Option<SyncStrategy>,
) -> Result<()> {
    let config = Config::load()?;

    // The clock needs a real track length even when the timeline comes
    // from a cue sheet, so the duration is validated either way.
    if !duration.is_finite() || duration <= 0.0 {
        return Err(TimelineError::InvalidDuration { value: duration })
            .context("Cannot launch the slideshow");
    }

    let slides = collect_slides(slides_dir)?;
    let sheet_path = cues.or_else(|| {
        let default = slides_dir.join(&config.cues.default_sheet);
        default.exists().then_some(default)
    });

    let timeline = match &sheet_path {
        Some(path) => {
            let sheet = CueSheet::load(path)?;
            info!(sheet = %path.display(), "using explicit cue sheet");
            Timeline::from_explicit(sheet.timestamps_for(&slides))
                .context("Cannot launch the slideshow")?
        }
        None => Timeline::from_uniform(slides, duration).context("Cannot launch the slideshow")?,
    };

    let options = SessionOptions {
        strategy: strategy.unwrap_or(config.player.strategy),
        poll_interval: Duration::from_millis(config.player.poll_interval_ms.max(1)),
        seek_step: config.player.seek_step_secs,
    };

    let mut session = Session::with_wall_clock(timeline, duration, options);
    session.run()
}
