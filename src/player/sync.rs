//! The playback synchronizer: maps live playback time to the active slide.
//!
//! State is just the current slide index plus the immutable timeline;
//! transitions are `reset`, `advance_if_due`, `seek_to` and
//! `on_track_ended`. Every transition that changes the index triggers the
//! abstract "display slide" call synchronously, so the display can never
//! disagree with the index for longer than one transition.

use crate::slides::SlideRef;
use crate::timeline::Timeline;

/// Receiver for "display slide N" calls.
///
/// The console renderer implements this for real playback; tests substitute
/// a recording stub. Transition visuals are entirely the implementor's
/// business.
pub trait SlideDisplay {
    fn show(&mut self, index: usize, slide: &SlideRef);
}

/// Maps playback time to the currently-displayed slide.
///
/// The timeline is guaranteed non-empty at build time; the synchronizer
/// does not re-validate. There is no terminal state: after end-of-track
/// the same synchronizer serves the next playback of the session.
#[derive(Debug)]
pub struct Synchronizer {
    timeline: Timeline,
    current_index: usize,
}

impl Synchronizer {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            current_index: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The slide currently mapped to the playback position.
    pub fn current_slide(&self) -> Option<&SlideRef> {
        self.timeline.get(self.current_index).map(|e| &e.slide)
    }

    /// Return to slide 0 and display it.
    ///
    /// Called at session start and whenever playback reaches end-of-track.
    pub fn reset(&mut self, display: &mut dyn SlideDisplay) {
        self.current_index = 0;
        self.show_current(display);
    }

    /// Advance past every slide boundary at or before `current_time`.
    ///
    /// A loop rather than a single-step check: one coarse clock tick or a
    /// large forward seek can cross several boundaries at once, and a
    /// single-step check would leave the display behind the audio
    /// position. Each crossed boundary displays its slide.
    pub fn advance_if_due(&mut self, current_time: f64, display: &mut dyn SlideDisplay) {
        loop {
            let due = self
                .timeline
                .get(self.current_index + 1)
                .map_or(false, |next| current_time >= next.timestamp);
            if !due {
                break;
            }
            self.current_index += 1;
            self.show_current(display);
        }
    }

    /// Jump to the slide active at `current_time`.
    ///
    /// Selects the greatest index whose timestamp is `<= current_time`
    /// (slide 0 when the position precedes the first timestamp). With
    /// duplicate timestamps the last qualifying slide wins.
    pub fn seek_to(&mut self, current_time: f64, display: &mut dyn SlideDisplay) {
        self.current_index = self.timeline.index_at(current_time);
        self.show_current(display);
    }

    /// Natural end-of-track: back to the first slide, ready for replay.
    pub fn on_track_ended(&mut self, display: &mut dyn SlideDisplay) {
        self.reset(display);
    }

    fn show_current(&self, display: &mut dyn SlideDisplay) {
        if let Some(entry) = self.timeline.get(self.current_index) {
            display.show(self.current_index, &entry.slide);
        }
    }
}
