//! lyricvis CLI entry point.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use lyricvis::SyncStrategy;

#[derive(Parser)]
#[command(
    name = "lyricvis",
    version,
    about = "Lyric slideshow visualizer - synchronizes timed image slides to an audio track"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a slideshow synchronized to the track's timing
    Play {
        /// Directory containing the slide images
        slides_dir: PathBuf,
        /// Track duration in seconds
        #[arg(long)]
        duration: f64,
        /// Cue sheet with explicit per-slide timestamps
        #[arg(long)]
        cues: Option<PathBuf>,
        /// Override the configured sync strategy
        #[arg(long)]
        strategy: Option<StrategyArg>,
    },
    /// Generate a cue sheet by spacing slides evenly across the track
    Cues {
        /// Directory containing the slide images
        slides_dir: PathBuf,
        /// Track duration in seconds
        #[arg(long)]
        duration: f64,
        /// Output path (default: <slides_dir>/cues.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override one entry, e.g. --set chorus.png=42.5
        #[arg(long = "set", value_name = "SLIDE=SECONDS")]
        set: Vec<String>,
        /// Overwrite an existing cue sheet
        #[arg(long)]
        force: bool,
    },
    /// Show or locate configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Re-derive the slide from the clock on every poll (recommended)
    Event,
    /// Sleep until the next slide boundary, recomputed each tick
    Tick,
}

impl From<StrategyArg> for SyncStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Event => SyncStrategy::Event,
            StrategyArg::Tick => SyncStrategy::Tick,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            slides_dir,
            duration,
            cues,
            strategy,
        } => commands::play::handle_play(&slides_dir, duration, cues, strategy.map(Into::into)),
        Command::Cues {
            slides_dir,
            duration,
            output,
            set,
            force,
        } => commands::cues::handle_generate(&slides_dir, duration, output, &set, force),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
