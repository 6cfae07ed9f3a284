//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::{Mark, StrategyKind};

/// Tic-tac-toe against random, human or perfect-play opponents
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one or more games
    Play(PlayArgs),

    /// Print the engine's move for a position
    BestMove {
        /// Nine cells, row-major: X, O, or . for empty (e.g. "XX.O.....")
        #[arg(short, long)]
        board: String,

        /// Mark to move
        #[arg(short, long)]
        mark: Mark,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Options for the `play` command.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Strategy for X: human, random or optimal
    #[arg(long = "x")]
    pub x: Option<StrategyKind>,

    /// Strategy for O: human, random or optimal
    #[arg(long = "o")]
    pub o: Option<StrategyKind>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the random number generators
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of games to play
    #[arg(short, long)]
    pub games: Option<u32>,

    /// Do not print the board after each move
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the final tally as JSON
    #[arg(long)]
    pub json: bool,
}
