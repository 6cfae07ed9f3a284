//! Console front end for the tic-tac-toe core.
//!
//! Turns command-line flags and an optional TOML file into two seated
//! strategies, prints the game as it is played and reads human moves from
//! standard input.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod series;

// Crate-level exports - Command line
pub use cli::{Cli, Command, PlayArgs};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PlaySettings, Seat, SeatConfig};

// Crate-level exports - Console collaborators
pub use console::{ConsoleObserver, StdinInput};

// Crate-level exports - Series play
pub use series::{Tally, build_strategy, play_series, run_series};
