//! Slide discovery and ordering.
//!
//! Scans a directory for image files, sorts them by file name, and assigns
//! stable slide handles. The rest of the crate only ever sees `SlideRef`s;
//! how an image is decoded or drawn is up to the display layer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File extensions recognized as slide images.
const IMAGE_EXTENSIONS: &[&str] = &["bmp", "gif", "jpeg", "jpg", "png", "webp"];

/// Opaque handle for one slide image.
///
/// The index is assigned once at collection time and stays stable for the
/// lifetime of the session. `name` is the file name, used for cue sheet
/// lookups and on-screen display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRef {
    index: usize,
    name: String,
    path: PathBuf,
}

impl SlideRef {
    pub fn new(index: usize, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            index,
            name: name.into(),
            path: path.into(),
        }
    }

    /// Position in the original (name-sorted) input order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// File name of the slide image.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path to the slide image.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Collect slide images from a directory, sorted by file name.
///
/// Non-image files and subdirectories are skipped. An empty result is not
/// an error here; the timeline builder rejects empty input when the
/// slideshow is actually launched.
pub fn collect_slides(dir: &Path) -> Result<Vec<SlideRef>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read slides directory {:?}", dir))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {:?}", dir))?;
        let path = entry.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }

    // Upload order in the original tool is file-name order; keep that
    // contract so cue sheets and timelines line up across runs.
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            SlideRef::new(index, name, path)
        })
        .collect())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
