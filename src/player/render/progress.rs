//! Progress bar rendering for the playback session.
//!
//! Displays playback progress with slide boundary indicators.

use std::io::{self, Write};

use anyhow::Result;

/// Format a duration in seconds to MM:SS format.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the progress bar character array.
///
/// Creates a visual representation of the progress bar including the
/// playhead position and a diamond at every slide boundary.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `current_time` - Current playback time
/// * `total_duration` - Total duration of the track
/// * `boundaries` - Slide boundary timestamps
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    boundaries: &[f64],
) -> (Vec<char>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    for &boundary in boundaries {
        let pos = if total_duration > 0.0 {
            ((boundary / total_duration) * bar_width as f64) as usize
        } else {
            0
        };
        if pos < bar_width && bar[pos] != '⏺' {
            bar[pos] = '◆';
        }
    }

    (bar, filled)
}

/// Render the progress bar with slide boundaries.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `current_time` - Current playback time
/// * `total_duration` - Total duration of the track
/// * `boundaries` - Slide boundary timestamps
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    current_time: f64,
    total_duration: f64,
    boundaries: &[f64],
) -> Result<()> {
    const CYAN: &str = "\x1b[36m";
    const DARK_GREY: &str = "\x1b[90m";
    const RESET: &str = "\x1b[0m";

    let elapsed = format_duration(current_time);
    let total = format_duration(total_duration);

    // "MM:SS " + bar + " MM:SS"
    let labels_width = elapsed.len() + total.len() + 2;
    let bar_width = (width as usize).saturating_sub(labels_width).max(1);

    let (bar, filled) = build_progress_bar_chars(bar_width, current_time, total_duration, boundaries);

    let mut output = String::with_capacity(bar_width + 64);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str(&elapsed);
    output.push(' ');
    for (i, c) in bar.iter().enumerate() {
        if i <= filled {
            output.push_str(CYAN);
        } else {
            output.push_str(DARK_GREY);
        }
        output.push(*c);
    }
    output.push_str(RESET);
    output.push(' ');
    output.push_str(&total);

    write!(stdout, "{}", output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_zero() {
        assert_eq!(format_duration(0.0), "00:00");
    }

    #[test]
    fn format_duration_minutes_and_seconds() {
        assert_eq!(format_duration(61.5), "01:01");
        assert_eq!(format_duration(600.0), "10:00");
    }

    #[test]
    fn format_duration_clamps_negative_to_zero() {
        assert_eq!(format_duration(-3.0), "00:00");
    }

    #[test]
    fn bar_is_empty_at_start() {
        let (bar, filled) = build_progress_bar_chars(10, 0.0, 100.0, &[]);
        assert_eq!(bar.len(), 10);
        assert_eq!(filled, 0);
        assert_eq!(bar[0], '⏺');
    }

    #[test]
    fn bar_is_full_at_end() {
        let (_, filled) = build_progress_bar_chars(10, 100.0, 100.0, &[]);
        assert_eq!(filled, 10);
    }

    #[test]
    fn boundaries_render_as_diamonds() {
        let (bar, _) = build_progress_bar_chars(10, 0.0, 100.0, &[50.0]);
        assert_eq!(bar[5], '◆');
    }

    #[test]
    fn playhead_wins_over_boundary() {
        let (bar, filled) = build_progress_bar_chars(10, 50.0, 100.0, &[50.0]);
        assert_eq!(bar[filled], '⏺');
    }

    #[test]
    fn zero_duration_is_fully_filled() {
        let (_, filled) = build_progress_bar_chars(10, 0.0, 0.0, &[]);
        assert_eq!(filled, 10);
    }
}
