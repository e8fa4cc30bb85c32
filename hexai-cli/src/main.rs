//! HEXAI CLI - Command-line interface
//!
//! Commands:
//! - play: Human vs AI
//! - watch: AI vs AI with the board shown after every move
//! - match: Many AI vs AI games with aggregated results

mod human;
mod match_cmd;
mod play_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexai")]
#[command(about = "Hex against search-based AI opponents")]
struct Cli {
    /// Random seed for reproducible AI noise
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(play_cmd::PlayArgs),
    /// Watch two AIs play one game
    Watch(play_cmd::WatchArgs),
    /// Play a series of AI vs AI games
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run_play(args, cli.seed),
        Commands::Watch(args) => play_cmd::run_watch(args, cli.seed),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
    }
}
