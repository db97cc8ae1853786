//! Subcommand handlers for the CLI.

pub mod config;
pub mod cues;
pub mod play;
