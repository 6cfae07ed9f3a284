//! Player configuration loaded from TOML and command-line flags.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Mark, StrategyKind};
use tracing::{debug, info, instrument};

/// One seat as written in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeatConfig {
    /// Strategy kind for this seat.
    kind: Option<StrategyKind>,

    /// Display name for this seat.
    name: Option<String>,
}

/// Contents of a configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Seed for the random number generators.
    seed: Option<u64>,

    /// Number of games to play.
    games: Option<u32>,

    /// Seat X.
    x: SeatConfig,

    /// Seat O.
    o: SeatConfig,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = ?config.x.kind, o = ?config.o.kind, "Config loaded successfully");
        Ok(config)
    }

    /// Layers command-line flags over this file and fills in defaults.
    ///
    /// Defaults: X is human, O is optimal, one game.
    #[instrument(skip(self, args))]
    pub fn resolve(self, args: &PlayArgs) -> Result<PlaySettings, ConfigError> {
        let x_kind = args.x.or(self.x.kind).unwrap_or(StrategyKind::Human);
        let o_kind = args.o.or(self.o.kind).unwrap_or(StrategyKind::Optimal);
        let games = args.games.or(self.games).unwrap_or(1);

        if games == 0 {
            return Err(ConfigError::new("Number of games must be at least 1".to_string()));
        }
        if games > 1 && (x_kind.is_interactive() || o_kind.is_interactive()) {
            return Err(ConfigError::new(format!(
                "A human player cannot play a series of {} games",
                games
            )));
        }

        let settings = PlaySettings {
            x: Seat::new(Mark::X, x_kind, self.x.name),
            o: Seat::new(Mark::O, o_kind, self.o.name),
            seed: args.seed.or(self.seed),
            games,
        };
        debug!(?settings, "Resolved play settings");
        Ok(settings)
    }
}

/// A fully resolved seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Seat {
    /// Mark played from this seat.
    mark: Mark,
    /// Strategy kind.
    kind: StrategyKind,
    /// Display name.
    name: String,
}

impl Seat {
    fn new(mark: Mark, kind: StrategyKind, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| {
            match kind {
                StrategyKind::Human => "Human",
                StrategyKind::Random => "Random",
                StrategyKind::Optimal => "Optimal",
            }
            .to_string()
        });
        Self { mark, kind, name }
    }
}

/// Settings for a run of the `play` command.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlaySettings {
    /// Seat X.
    x: Seat,
    /// Seat O.
    o: Seat,
    /// Seed, if runs should be reproducible.
    seed: Option<u64>,
    /// Number of games.
    games: u32,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
