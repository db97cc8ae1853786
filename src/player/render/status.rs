//! Status bar rendering for the playback session.
//!
//! Displays playback state, the active slide, and keyboard shortcuts.

use std::io::{self, Write};

use anyhow::Result;

/// Render a separator line.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
pub fn render_separator_line(stdout: &mut io::Stdout, width: u16, row: u16) -> Result<()> {
    let mut output = String::with_capacity(width as usize + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1)); // Move + dark gray
    for _ in 0..width {
        output.push('─');
    }
    output.push_str("\x1b[0m"); // Reset
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render the status/controls bar.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `paused` - Whether playback is paused
/// * `slide_index` - Zero-based index of the active slide
/// * `slide_count` - Total number of slides
/// * `slide_name` - File name of the active slide
pub fn render_status_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    paused: bool,
    slide_index: usize,
    slide_count: usize,
    slide_name: &str,
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const DARK_GREY: &str = "\x1b[90m";
    const RESET: &str = "\x1b[0m";

    let state_label = if paused { "⏸ PAUSED" } else { "▶ PLAYING" };
    let state_color = if paused { YELLOW } else { GREEN };

    let left = format!(
        "{}{}{} {}slide {}/{}{} {}{}{}",
        state_color,
        state_label,
        RESET,
        WHITE,
        slide_index + 1,
        slide_count,
        RESET,
        DARK_GREY,
        slide_name,
        RESET
    );
    let left_visible = state_label.chars().count()
        + format!(" slide {}/{} ", slide_index + 1, slide_count).chars().count()
        + slide_name.chars().count();

    let shortcuts = "space pause  ←/→ seek  home/end jump  q quit";
    let mut output = String::with_capacity(256);
    output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1)); // Move + clear line
    output.push_str(&left);

    // Right-align the shortcut hints when they fit.
    let shortcuts_visible = shortcuts.chars().count();
    if left_visible + shortcuts_visible + 2 <= width as usize {
        let padding = width as usize - left_visible - shortcuts_visible;
        for _ in 0..padding {
            output.push(' ');
        }
        output.push_str(DARK_GREY);
        output.push_str(shortcuts);
        output.push_str(RESET);
    }

    write!(stdout, "{}", output)?;
    Ok(())
}
