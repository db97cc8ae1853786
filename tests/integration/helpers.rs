//! Shared fixtures for integration tests.

use std::fs::File;
use std::path::PathBuf;

use tempfile::TempDir;

/// Create a temporary slides directory containing `names` as empty files.
///
/// The files carry no image data; slide discovery only looks at names and
/// extensions, and nothing in these tests decodes pixels.
pub fn slides_dir(names: &[&str]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        File::create(tmp.path().join(name)).expect("Failed to create fixture file");
    }
    let path = tmp.path().to_path_buf();
    (tmp, path)
}

/// Standard three-slide fixture in sorted order.
pub fn three_slides() -> (TempDir, PathBuf) {
    slides_dir(&["a.png", "b.png", "c.png"])
}
