//! Playback clock abstraction.
//!
//! The synchronizer only ever reads time; it never owns it. `PlaybackClock`
//! is the seam between the sync engine and whatever transport supplies
//! playback time. `WallClock` is the built-in implementation: a pausable,
//! seekable wall-clock timer that stands in for an audio transport.

use std::time::Instant;

/// The playback transport refused to start.
///
/// The session surfaces this to the user and stays in its pre-launch
/// state; nothing has been mutated when it is returned.
#[derive(Debug, thiserror::Error)]
#[error("Playback failed to start: {reason}")]
pub struct PlaybackStartError {
    pub reason: String,
}

/// A play/pause/seek-capable source of playback time.
///
/// `current_time` is monotonic while playing and resettable on seek, which
/// is all the synchronizer assumes about it.
pub trait PlaybackClock {
    /// Begin playback from the current position.
    fn start(&mut self) -> Result<(), PlaybackStartError>;

    fn pause(&mut self);

    fn resume(&mut self);

    /// Jump to `time` seconds, clamped to `[0, duration]`.
    fn seek(&mut self, time: f64);

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Total track duration in seconds.
    fn duration(&self) -> f64;

    fn is_paused(&self) -> bool;
}

/// Wall-clock playback timer.
///
/// Position is `time_offset + elapsed-since-epoch`; pause folds the elapsed
/// time into `time_offset`, and resume/seek restart the epoch. Time is
/// capped at the track duration.
#[derive(Debug)]
pub struct WallClock {
    duration: f64,
    started: bool,
    paused: bool,
    /// Wall time at the most recent start/resume/seek.
    epoch: Instant,
    /// Playback position accumulated before the current epoch.
    time_offset: f64,
}

impl WallClock {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            started: false,
            paused: false,
            epoch: Instant::now(),
            time_offset: 0.0,
        }
    }
}

impl PlaybackClock for WallClock {
    fn start(&mut self) -> Result<(), PlaybackStartError> {
        self.epoch = Instant::now();
        self.started = true;
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        if !self.paused {
            self.time_offset = self.current_time();
            self.paused = true;
        }
    }

    fn resume(&mut self) {
        if self.paused {
            self.epoch = Instant::now();
            self.paused = false;
        }
    }

    fn seek(&mut self, time: f64) {
        self.time_offset = time.clamp(0.0, self.duration);
        self.epoch = Instant::now();
    }

    fn current_time(&self) -> f64 {
        if self.paused || !self.started {
            self.time_offset
        } else {
            (self.time_offset + self.epoch.elapsed().as_secs_f64()).min(self.duration)
        }
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
