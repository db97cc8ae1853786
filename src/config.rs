//! Application configuration.
//!
//! Stored as TOML under the platform config directory
//! (`~/.config/lyricvis/config.toml` on Linux). Missing files and missing
//! fields fall back to defaults, so a fresh install works without any
//! config at all.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::player::session::SyncStrategy;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub cues: CuesConfig,
}

/// Playback tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Sync strategy: "event" (recommended) or "tick"
    pub strategy: SyncStrategy,
    /// Clock poll interval for the event strategy, in milliseconds
    pub poll_interval_ms: u64,
    /// Seconds jumped by a single arrow-key seek
    pub seek_step_secs: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            strategy: SyncStrategy::Event,
            poll_interval_ms: 33,
            seek_step_secs: 5.0,
        }
    }
}

/// Cue sheet defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CuesConfig {
    /// File name looked up inside the slides directory
    pub default_sheet: String,
}

impl Default for CuesConfig {
    fn default() -> Self {
        Self {
            default_sheet: "cues.toml".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("lyricvis").join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read config {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config {:?}", path))
    }

    /// Write the config, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content).with_context(|| format!("Failed to write config {:?}", path))
    }
}
