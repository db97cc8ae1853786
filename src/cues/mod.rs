//! Cue sheets: explicit per-slide timestamps.
//!
//! A cue sheet is a TOML file mapping slide file names to the playback
//! time (seconds) at which each becomes current. Slides the sheet does not
//! name default to 0. Sheets are hand-editable; the `cues` subcommand
//! generates a uniform-spacing starting point.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::slides::SlideRef;
use crate::timeline::{Timeline, TimelineError};

/// One cue: a slide name and its timestamp in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cue {
    pub slide: String,
    pub time: f64,
}

/// A full cue sheet for one slide directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CueSheet {
    /// RFC 3339 timestamp of generation; absent on hand-written sheets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub cues: Vec<Cue>,
}

impl CueSheet {
    /// Build a sheet by spacing all slides evenly across `total_duration`.
    pub fn uniform(slides: &[SlideRef], total_duration: f64) -> Result<Self, TimelineError> {
        let timeline = Timeline::from_uniform(slides.to_vec(), total_duration)?;
        Ok(Self {
            generated_at: Some(Utc::now().to_rfc3339()),
            cues: timeline
                .entries()
                .iter()
                .map(|e| Cue {
                    slide: e.slide.name().to_string(),
                    time: e.timestamp,
                })
                .collect(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cue sheet {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse cue sheet {:?}", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize cue sheet")?;
        fs::write(path, content).with_context(|| format!("Failed to write cue sheet {:?}", path))
    }

    /// Timestamp recorded for `name`, if any.
    pub fn time_for(&self, name: &str) -> Option<f64> {
        self.cues.iter().find(|c| c.slide == name).map(|c| c.time)
    }

    /// Set the timestamp for `name`, appending a cue if it is new.
    pub fn set_time(&mut self, name: &str, time: f64) {
        match self.cues.iter_mut().find(|c| c.slide == name) {
            Some(cue) => cue.time = time,
            None => self.cues.push(Cue {
                slide: name.to_string(),
                time,
            }),
        }
    }

    /// Per-slide timestamps in slide order.
    ///
    /// Slides absent from the sheet default to 0; recorded times that are
    /// negative or non-finite are treated as absent rather than rejected.
    pub fn timestamps_for(&self, slides: &[SlideRef]) -> Vec<(SlideRef, f64)> {
        slides
            .iter()
            .map(|slide| {
                let time = self
                    .time_for(slide.name())
                    .filter(|t| t.is_finite() && *t >= 0.0)
                    .unwrap_or(0.0);
                (slide.clone(), time)
            })
            .collect()
    }
}

/// Parse a user-supplied timestamp override.
///
/// Entries that do not parse as a non-negative finite number are ignored
/// and the prior value is kept, so one typo cannot wipe out a timestamp.
pub fn apply_override(prev: f64, raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => prev,
    }
}
