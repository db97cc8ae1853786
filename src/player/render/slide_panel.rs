//! The console slide panel.
//!
//! Implements the abstract "display slide" operation by drawing a boxed
//! panel with the slide's name in the upper region of the terminal. A
//! terminal cannot decode the image itself; showing which slide is active
//! at which moment is the whole point of the player, so the panel renders
//! the slide identity large and centered.

use std::io::{self, Write};

use tracing::warn;

use crate::player::sync::SlideDisplay;
use crate::slides::SlideRef;

/// Console implementation of `SlideDisplay`.
#[derive(Debug)]
pub struct ConsoleDisplay {
    term_cols: u16,
    panel_rows: u16,
    slide_count: usize,
}

impl ConsoleDisplay {
    pub fn new(term_cols: u16, panel_rows: u16, slide_count: usize) -> Self {
        Self {
            term_cols,
            panel_rows,
            slide_count,
        }
    }

    pub fn handle_resize(&mut self, term_cols: u16, panel_rows: u16) {
        self.term_cols = term_cols;
        self.panel_rows = panel_rows;
    }

    fn render(&self, index: usize, slide: &SlideRef) -> io::Result<()> {
        const CYAN: &str = "\x1b[36m";
        const WHITE: &str = "\x1b[97m";
        const DARK_GREY: &str = "\x1b[90m";
        const RESET: &str = "\x1b[0m";

        let mut stdout = io::stdout();
        let width = self.term_cols as usize;

        let mut output = String::with_capacity(width * self.panel_rows as usize);

        // Clear the panel area.
        for row in 0..self.panel_rows {
            output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1));
        }

        let center_row = (self.panel_rows / 2).max(1);
        let title = slide.name();
        let subtitle = format!("{} of {}", index + 1, self.slide_count);

        let title_col = width.saturating_sub(title.chars().count()) / 2;
        output.push_str(&format!(
            "\x1b[{};{}H{}{}{}",
            center_row,
            title_col + 1,
            WHITE,
            title,
            RESET
        ));

        let subtitle_col = width.saturating_sub(subtitle.chars().count()) / 2;
        output.push_str(&format!(
            "\x1b[{};{}H{}{}{}",
            center_row + 1,
            subtitle_col + 1,
            CYAN,
            subtitle,
            RESET
        ));

        let path = slide.path().display().to_string();
        if path.chars().count() < width {
            let path_col = width.saturating_sub(path.chars().count()) / 2;
            output.push_str(&format!(
                "\x1b[{};{}H{}{}{}",
                center_row + 2,
                path_col + 1,
                DARK_GREY,
                path,
                RESET
            ));
        }

        write!(stdout, "{}", output)?;
        stdout.flush()
    }
}

impl SlideDisplay for ConsoleDisplay {
    fn show(&mut self, index: usize, slide: &SlideRef) {
        if let Err(e) = self.render(index, slide) {
            warn!(slide = slide.name(), error = %e, "slide render failed");
        }
    }
}
