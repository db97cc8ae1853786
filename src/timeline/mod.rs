//! Timeline construction.
//!
//! A `Timeline` is the finalized ascending sequence of (timestamp, slide)
//! pairs consumed by the playback synchronizer. Two builders cover the two
//! timing strategies: explicit per-slide timestamps and uniform spacing
//! across a known total duration. Both feed the same synchronizer, so the
//! downstream state machine exists exactly once.

use crate::slides::SlideRef;

/// Errors that can occur while building a timeline.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("No slides to build a timeline from")]
    EmptyInput,

    #[error("Invalid total duration {value}: must be positive and finite")]
    InvalidDuration { value: f64 },
}

/// One slide and the playback time (seconds) at which it becomes current.
#[derive(Debug, Clone)]
pub struct TimedSlide {
    pub timestamp: f64,
    pub slide: SlideRef,
}

/// Finalized, time-ordered sequence of slides for one playback session.
///
/// Invariants established at build time and never re-checked downstream:
/// at least one entry, timestamps monotonically non-decreasing, ties in
/// input order. Rebuilding a session builds a fresh `Timeline`; an existing
/// one is never mutated.
#[derive(Debug, Clone)]
pub struct Timeline {
    entries: Vec<TimedSlide>,
}

impl Timeline {
    /// Build from explicit per-slide timestamps.
    ///
    /// Sorts ascending by timestamp; the sort is stable, so slides sharing
    /// a timestamp keep their input order.
    pub fn from_explicit(slides: Vec<(SlideRef, f64)>) -> Result<Self, TimelineError> {
        if slides.is_empty() {
            return Err(TimelineError::EmptyInput);
        }

        let mut entries: Vec<TimedSlide> = slides
            .into_iter()
            .map(|(slide, timestamp)| TimedSlide { timestamp, slide })
            .collect();
        entries.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

        Ok(Self { entries })
    }

    /// Build by dividing `total_duration` evenly across all slides.
    ///
    /// Slide `i` gets timestamp `i * (total_duration / n)`, so the result
    /// is ascending by construction and no sort is needed. If the spacing
    /// formula ever changes, that assumption has to be revisited.
    pub fn from_uniform(slides: Vec<SlideRef>, total_duration: f64) -> Result<Self, TimelineError> {
        if slides.is_empty() {
            return Err(TimelineError::EmptyInput);
        }
        if !total_duration.is_finite() || total_duration <= 0.0 {
            return Err(TimelineError::InvalidDuration {
                value: total_duration,
            });
        }

        let step = total_duration / slides.len() as f64;
        let entries = slides
            .into_iter()
            .enumerate()
            .map(|(i, slide)| TimedSlide {
                timestamp: i as f64 * step,
                slide,
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimedSlide> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[TimedSlide] {
        &self.entries
    }

    /// Timestamp of the last slide boundary.
    pub fn last_timestamp(&self) -> f64 {
        self.entries.last().map(|e| e.timestamp).unwrap_or(0.0)
    }

    /// Greatest index whose timestamp is `<= time`, or 0 when `time`
    /// precedes the first entry.
    ///
    /// With duplicate timestamps the *last* qualifying slide wins, which is
    /// what the seek transition requires.
    pub fn index_at(&self, time: f64) -> usize {
        self.entries
            .partition_point(|e| e.timestamp <= time)
            .saturating_sub(1)
    }
}
