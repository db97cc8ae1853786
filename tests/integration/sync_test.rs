//! End-to-end tests for the synchronization engine: discovery through
//! timeline construction through synchronizer transitions.

use super::helpers::three_slides;

use lyricvis::slides::{collect_slides, SlideRef};
use lyricvis::{SlideDisplay, Synchronizer, Timeline};

/// Display stub recording every show call.
struct RecordingDisplay {
    shown: Vec<(usize, String)>,
}

impl RecordingDisplay {
    fn new() -> Self {
        Self { shown: Vec::new() }
    }
}

impl SlideDisplay for RecordingDisplay {
    fn show(&mut self, index: usize, slide: &SlideRef) {
        self.shown.push((index, slide.name().to_string()));
    }
}

#[test]
fn discovered_slides_play_through_a_uniform_timeline() {
    let (_tmp, dir) = three_slides();
    let slides = collect_slides(&dir).unwrap();
    let timeline = Timeline::from_uniform(slides, 9.0).unwrap();

    let mut sync = Synchronizer::new(timeline);
    let mut display = RecordingDisplay::new();

    sync.reset(&mut display);
    assert_eq!(display.shown.last().unwrap(), &(0, "a.png".to_string()));

    sync.advance_if_due(3.5, &mut display);
    assert_eq!(display.shown.last().unwrap(), &(1, "b.png".to_string()));

    sync.advance_if_due(8.9, &mut display);
    assert_eq!(display.shown.last().unwrap(), &(2, "c.png".to_string()));

    sync.on_track_ended(&mut display);
    assert_eq!(display.shown.last().unwrap(), &(0, "a.png".to_string()));
}

#[test]
fn a_large_seek_crosses_every_skipped_boundary() {
    let (_tmp, dir) = three_slides();
    let slides = collect_slides(&dir).unwrap();
    let timeline = Timeline::from_uniform(slides, 9.0).unwrap();

    let mut sync = Synchronizer::new(timeline);
    let mut display = RecordingDisplay::new();

    sync.reset(&mut display);
    sync.advance_if_due(8.0, &mut display);

    let indices: Vec<usize> = display.shown.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn seek_then_advance_is_stable_across_the_whole_track() {
    let (_tmp, dir) = three_slides();
    let slides = collect_slides(&dir).unwrap();
    let timeline = Timeline::from_uniform(slides, 9.0).unwrap();

    let mut sync = Synchronizer::new(timeline);
    let mut display = RecordingDisplay::new();

    for t in [0.0, 1.0, 3.0, 4.5, 6.0, 8.99] {
        sync.seek_to(t, &mut display);
        let index = sync.current_index();
        sync.advance_if_due(t, &mut display);
        assert_eq!(sync.current_index(), index, "at t={}", t);
    }
}

#[test]
fn replay_after_track_end_reaches_the_same_slides() {
    let (_tmp, dir) = three_slides();
    let slides = collect_slides(&dir).unwrap();
    let timeline = Timeline::from_uniform(slides, 9.0).unwrap();

    let mut sync = Synchronizer::new(timeline);
    let mut display = RecordingDisplay::new();

    sync.reset(&mut display);
    sync.advance_if_due(9.0, &mut display);
    assert_eq!(sync.current_index(), 2);

    sync.on_track_ended(&mut display);
    sync.advance_if_due(4.0, &mut display);
    assert_eq!(sync.current_index(), 1);
}
