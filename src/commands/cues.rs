//! `cues` subcommand: generate a cue sheet with uniform spacing.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use lyricvis::cues::{apply_override, CueSheet};
use lyricvis::slides::collect_slides;
use lyricvis::Config;

/// Generate a uniform-spacing cue sheet for a slides directory.
///
/// `--set SLIDE=SECONDS` overrides individual entries on top of the
/// uniform spacing; entries that do not parse as a non-negative number are
/// ignored and the uniform value is kept. An existing sheet is never
/// overwritten without `--force`, since it may carry hand-tuned
/// timestamps.
pub fn handle_generate(
    slides_dir: &Path,
    duration: f64,
    output: Option<PathBuf>,
    overrides: &[String],
    force: bool,
) -> Result<()> {
    let config = Config::load()?;
    let out_path = output.unwrap_or_else(|| slides_dir.join(&config.cues.default_sheet));

    if out_path.exists() && !force {
        bail!(
            "Cue sheet {:?} already exists; pass --force to overwrite it (manual edits would be lost)",
            out_path
        );
    }

    let slides = collect_slides(slides_dir)?;
    let mut sheet = CueSheet::uniform(&slides, duration).context("Cannot generate cue sheet")?;

    for entry in overrides {
        let (name, raw) = entry
            .split_once('=')
            .with_context(|| format!("Invalid --set entry '{}' (expected SLIDE=SECONDS)", entry))?;
        let prev = sheet.time_for(name).unwrap_or(0.0);
        sheet.set_time(name, apply_override(prev, raw));
    }

    sheet.save(&out_path)?;
    println!(
        "Wrote {} cues to {}",
        sheet.cues.len(),
        out_path.display()
    );
    Ok(())
}
