//! tictactoe4 CLI - 4x4 tic-tac-toe against a heuristic teacher
//!
//! This CLI provides:
//! - Interactive games against the teacher or a random agent
//! - Batch teaching runs of an agent against the teacher
//! - Teacher vs teacher duels

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tictactoe4::{
    cli::commands::{duel, play, teach},
    config::AppConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe4")]
#[command(version, about = "4x4 tic-tac-toe with a heuristic teacher", long_about = None)]
struct Cli {
    /// Log decisions and moves at debug level
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the teacher at the terminal
    Play(play::PlayArgs),

    /// Run an agent against the teacher for many games
    Teach(teach::TeachArgs),

    /// Play two teachers against each other
    Duel(duel::DuelArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Play(args) => play::execute(args, &config),
        Commands::Teach(args) => teach::execute(args, &config),
        Commands::Duel(args) => duel::execute(args, &config),
    }
}
