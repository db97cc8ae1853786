//! Playback session: wires the clock, synchronizer, input and rendering
//! into a single-threaded event loop.
//!
//! All synchronizer transitions run from this loop, so no locking is ever
//! needed. The only cross-thread signal is the Ctrl-C flag, and every
//! transition entry point checks it so a callback queued at exit time never
//! acts on discarded state.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event};
use crossterm::{cursor, execute, terminal};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::player::clock::{PlaybackClock, WallClock};
use crate::player::input::handle_key_event;
use crate::player::render::{
    render_progress_bar, render_separator_line, render_status_bar, ConsoleDisplay,
};
use crate::player::state::{InputResult, PlayerState};
use crate::player::sync::{SlideDisplay, Synchronizer};
use crate::timeline::Timeline;

/// Chrome rows below the slide panel (separator + progress + status bar).
const STATUS_LINES: u16 = 3;

/// Longest a tick-strategy sleep may last, so the progress bar keeps
/// updating between distant slide boundaries.
const MAX_TICK_WAIT: Duration = Duration::from_millis(250);

/// How the session drives the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStrategy {
    /// Re-check the clock on every poll. Self-correcting; cannot drift.
    #[default]
    Event,
    /// Sleep until the next slide boundary, re-derived on every tick.
    Tick,
}

impl std::fmt::Display for SyncStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStrategy::Event => write!(f, "event"),
            SyncStrategy::Tick => write!(f, "tick"),
        }
    }
}

impl std::str::FromStr for SyncStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "event" => Ok(SyncStrategy::Event),
            "tick" => Ok(SyncStrategy::Tick),
            other => bail!("Unknown sync strategy '{}' (expected 'event' or 'tick')", other),
        }
    }
}

/// Tuning knobs for a playback session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub strategy: SyncStrategy,
    /// Clock poll interval for the event strategy.
    pub poll_interval: Duration,
    /// Seconds jumped by a single arrow-key seek.
    pub seek_step: f64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            strategy: SyncStrategy::Event,
            poll_interval: Duration::from_millis(33),
            seek_step: 5.0,
        }
    }
}

/// One playback session: a timeline, a clock, and the loop driving them.
///
/// Reusable across repeated playback of the same timeline (end-of-track
/// resets rather than terminates); discarded at exit.
pub struct Session<C: PlaybackClock> {
    sync: Synchronizer,
    clock: C,
    options: SessionOptions,
    /// Cleared when exit is requested; transitions stop once unset.
    active: Arc<AtomicBool>,
}

impl Session<WallClock> {
    /// Session backed by the wall-clock stand-in for the audio transport.
    pub fn with_wall_clock(timeline: Timeline, duration: f64, options: SessionOptions) -> Self {
        Self::new(timeline, WallClock::new(duration), options)
    }
}

impl<C: PlaybackClock> Session<C> {
    pub fn new(timeline: Timeline, clock: C, options: SessionOptions) -> Self {
        Self {
            sync: Synchronizer::new(timeline),
            clock,
            options,
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Handle for requesting exit from outside the loop.
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.active)
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Run the session until quit or cancellation.
    ///
    /// Takes over the terminal (raw mode + alternate screen) only after
    /// the transport has agreed to start; a `PlaybackStartError` leaves the
    /// session in its pre-launch state.
    pub fn run(&mut self) -> Result<()> {
        let flag = self.cancel_flag();
        ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))
            .context("Failed to install Ctrl-C handler")?;

        self.clock
            .start()
            .context("The playback transport refused to start")?;

        let (cols, rows) = terminal::size().context("Failed to query terminal size")?;
        let mut state = PlayerState::new(cols, rows, self.options.seek_step);
        let mut display = ConsoleDisplay::new(
            cols,
            rows.saturating_sub(STATUS_LINES),
            self.sync.timeline().len(),
        );

        let _guard = TerminalGuard::enter()?;

        info!(
            slides = self.sync.timeline().len(),
            duration = self.clock.duration(),
            strategy = %self.options.strategy,
            "session launched"
        );

        self.sync.reset(&mut display);

        let boundaries: Vec<f64> = self
            .sync
            .timeline()
            .entries()
            .iter()
            .map(|e| e.timestamp)
            .collect();

        loop {
            if !self.is_active() {
                debug!("session cancelled");
                break;
            }

            let timeout = self.wait_for_next();
            if event::poll(timeout).context("Failed to poll input")? {
                // Re-check after a potentially long sleep: input queued
                // while exit was requested must not mutate state.
                if !self.is_active() {
                    break;
                }
                match event::read().context("Failed to read input")? {
                    Event::Key(key) => {
                        let result = handle_key_event(
                            key,
                            &mut state,
                            &mut self.sync,
                            &mut self.clock,
                            &mut display,
                        );
                        if result == InputResult::Quit {
                            break;
                        }
                    }
                    Event::Resize(new_cols, new_rows) => {
                        state.handle_resize(new_cols, new_rows);
                        display.handle_resize(new_cols, new_rows.saturating_sub(STATUS_LINES));
                        if let Some(slide) = self.sync.current_slide() {
                            display.show(self.sync.current_index(), slide);
                        }
                    }
                    _ => {}
                }
            }

            if !self.is_active() {
                break;
            }

            let now = self.clock.current_time();
            if !self.clock.is_paused() && now >= self.clock.duration() {
                debug!("track ended; resetting to slide 0");
                self.sync.on_track_ended(&mut display);
                self.clock.pause();
                self.clock.seek(0.0);
                state.needs_render = true;
            } else {
                self.sync.advance_if_due(now, &mut display);
            }

            self.render_chrome(&mut state, &boundaries)?;
        }

        Ok(())
    }

    /// Poll timeout for the next loop turn.
    ///
    /// The event strategy polls at a fixed short interval and re-derives
    /// the index from the live clock each time. The tick strategy sleeps
    /// until the next slide boundary, recomputing the remaining wait from
    /// the live clock on every turn; a fixed per-slide interval would
    /// accumulate drift across pause/resume cycles.
    fn wait_for_next(&self) -> Duration {
        match self.options.strategy {
            SyncStrategy::Event => self.options.poll_interval,
            SyncStrategy::Tick => {
                if self.clock.is_paused() {
                    return self.options.poll_interval;
                }
                let now = self.clock.current_time();
                let next_boundary = self
                    .sync
                    .timeline()
                    .get(self.sync.current_index() + 1)
                    .map(|e| e.timestamp)
                    .unwrap_or_else(|| self.clock.duration());
                let wait = (next_boundary - now).max(0.0);
                Duration::from_secs_f64(wait).min(MAX_TICK_WAIT)
            }
        }
    }

    fn render_chrome(&mut self, state: &mut PlayerState, boundaries: &[f64]) -> Result<()> {
        let mut stdout = io::stdout();
        let sep_row = state.term_rows.saturating_sub(3);
        let progress_row = state.term_rows.saturating_sub(2);
        let status_row = state.term_rows.saturating_sub(1);

        if state.needs_render {
            render_separator_line(&mut stdout, state.term_cols, sep_row)?;
        }

        render_progress_bar(
            &mut stdout,
            state.term_cols,
            progress_row,
            self.clock.current_time(),
            self.clock.duration(),
            boundaries,
        )?;

        let slide_name = self
            .sync
            .current_slide()
            .map(|s| s.name().to_string())
            .unwrap_or_default();
        render_status_bar(
            &mut stdout,
            state.term_cols,
            status_row,
            self.clock.is_paused(),
            self.sync.current_index(),
            self.sync.timeline().len(),
            &slide_name,
        )?;

        stdout.flush()?;
        state.needs_render = false;
        Ok(())
    }
}

/// RAII guard for raw mode and the alternate screen.
///
/// Restores the terminal on drop so early returns and errors cannot leave
/// the user's shell in raw mode.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
