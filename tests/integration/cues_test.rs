//! Integration tests for cue sheets feeding explicit timelines.

use super::helpers::three_slides;

use lyricvis::cues::CueSheet;
use lyricvis::slides::collect_slides;
use lyricvis::Timeline;

#[test]
fn generated_sheet_round_trips_into_an_explicit_timeline() {
    let (_tmp, dir) = three_slides();
    let slides = collect_slides(&dir).unwrap();

    let sheet = CueSheet::uniform(&slides, 9.0).unwrap();
    let path = dir.join("cues.toml");
    sheet.save(&path).unwrap();

    let loaded = CueSheet::load(&path).unwrap();
    let timeline = Timeline::from_explicit(loaded.timestamps_for(&slides)).unwrap();

    let times: Vec<f64> = timeline.entries().iter().map(|e| e.timestamp).collect();
    assert_eq!(times, vec![0.0, 3.0, 6.0]);
}

#[test]
fn edited_sheet_reorders_the_timeline() {
    let (_tmp, dir) = three_slides();
    let slides = collect_slides(&dir).unwrap();

    let mut sheet = CueSheet::uniform(&slides, 9.0).unwrap();
    // Pull the last slide to the front.
    sheet.set_time("c.png", 0.5);

    let timeline = Timeline::from_explicit(sheet.timestamps_for(&slides)).unwrap();
    let names: Vec<&str> = timeline.entries().iter().map(|e| e.slide.name()).collect();
    assert_eq!(names, vec!["a.png", "c.png", "b.png"]);
}

#[test]
fn sheet_with_tied_timestamps_keeps_slide_order() {
    let (_tmp, dir) = three_slides();
    let slides = collect_slides(&dir).unwrap();

    let sheet = CueSheet {
        generated_at: None,
        cues: vec![],
    };

    // All slides default to 0: the tie resolves in input (name) order.
    let timeline = Timeline::from_explicit(sheet.timestamps_for(&slides)).unwrap();
    let names: Vec<&str> = timeline.entries().iter().map(|e| e.slide.name()).collect();
    assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
}
