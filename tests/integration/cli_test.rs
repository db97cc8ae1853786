//! CLI integration tests.
//!
//! Only non-interactive paths run here; `play` with valid input takes over
//! the terminal, so it is exercised through its validation errors instead.

use super::helpers::{slides_dir, three_slides};

use assert_cmd::Command;
use predicates::prelude::*;

use lyricvis::cues::CueSheet;

fn lyricvis() -> Command {
    Command::cargo_bin("lyricvis").expect("binary builds")
}

#[test]
fn cues_generates_a_uniform_sheet() {
    let (_tmp, dir) = three_slides();

    lyricvis()
        .args(["cues", dir.to_str().unwrap(), "--duration", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 cues"));

    let sheet = CueSheet::load(&dir.join("cues.toml")).unwrap();
    assert_eq!(sheet.time_for("a.png"), Some(0.0));
    assert_eq!(sheet.time_for("b.png"), Some(3.0));
    assert_eq!(sheet.time_for("c.png"), Some(6.0));
}

#[test]
fn cues_refuses_to_overwrite_without_force() {
    let (_tmp, dir) = three_slides();

    lyricvis()
        .args(["cues", dir.to_str().unwrap(), "--duration", "9"])
        .assert()
        .success();

    lyricvis()
        .args(["cues", dir.to_str().unwrap(), "--duration", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    lyricvis()
        .args(["cues", dir.to_str().unwrap(), "--duration", "9", "--force"])
        .assert()
        .success();
}

#[test]
fn cues_applies_valid_set_overrides() {
    let (_tmp, dir) = three_slides();

    lyricvis()
        .args([
            "cues",
            dir.to_str().unwrap(),
            "--duration",
            "9",
            "--set",
            "b.png=4.5",
        ])
        .assert()
        .success();

    let sheet = CueSheet::load(&dir.join("cues.toml")).unwrap();
    assert_eq!(sheet.time_for("b.png"), Some(4.5));
}

#[test]
fn cues_ignores_unparseable_set_overrides() {
    let (_tmp, dir) = three_slides();

    lyricvis()
        .args([
            "cues",
            dir.to_str().unwrap(),
            "--duration",
            "9",
            "--set",
            "b.png=soon",
        ])
        .assert()
        .success();

    // The uniform value survives the bad override.
    let sheet = CueSheet::load(&dir.join("cues.toml")).unwrap();
    assert_eq!(sheet.time_for("b.png"), Some(3.0));
}

#[test]
fn cues_rejects_a_zero_duration() {
    let (_tmp, dir) = three_slides();

    lyricvis()
        .args(["cues", dir.to_str().unwrap(), "--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid total duration"));
}

#[test]
fn play_rejects_an_empty_slides_directory() {
    let (_tmp, dir) = slides_dir(&[]);

    lyricvis()
        .args(["play", dir.to_str().unwrap(), "--duration", "60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No slides"));
}

#[test]
fn play_rejects_an_invalid_duration() {
    let (_tmp, dir) = three_slides();

    lyricvis()
        .args(["play", dir.to_str().unwrap(), "--duration=-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid total duration"));
}

#[test]
fn play_rejects_a_missing_directory() {
    lyricvis()
        .args(["play", "/nonexistent/slides", "--duration", "60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("slides directory"));
}

#[test]
fn config_path_points_at_the_config_file() {
    lyricvis()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_generate_for_bash() {
    lyricvis()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lyricvis"));
}
