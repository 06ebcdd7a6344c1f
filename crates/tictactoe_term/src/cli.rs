//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Mark;

/// Tic-tac-toe in the terminal, with move history review
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe and step back through past moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML engine config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Mark that moves first (overrides the config)
    #[arg(short, long)]
    pub start: Option<Mark>,

    /// Disable history review
    #[arg(long)]
    pub no_history: bool,

    /// Print each state as JSON instead of a board
    #[arg(long)]
    pub json: bool,
}
