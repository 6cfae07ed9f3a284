//! Tic-tac-toe game core.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move application/undo and win detection
//! - **Strategies**: random, interactive and perfect-play move selection
//! - **Search**: exhaustive minimax used by the perfect player
//! - **Orchestrator**: alternates two strategies until a win or draw
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tictactoe_core::{GameStatus, Mark, OptimalStrategy, Orchestrator, Silent};
//!
//! let x = OptimalStrategy::new("X", Mark::X, StdRng::seed_from_u64(1));
//! let o = OptimalStrategy::new("O", Mark::O, StdRng::seed_from_u64(2));
//! let mut game = Orchestrator::new(Box::new(x), Box::new(o))?;
//! assert_eq!(game.run(&mut Silent)?, GameStatus::Draw);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod orchestrator;
mod position;
mod rules;
mod search;
mod strategy;
mod types;

// Crate-level exports - Board and domain types
pub use position::Position;
pub use rules::{LINES, check_winner};
pub use types::{Board, GameStatus, Mark, Square};

// Crate-level exports - Errors
pub use error::{BoardParseError, GameError, StrategyError};

// Crate-level exports - Search
pub use search::{Minimax, SearchResult};

// Crate-level exports - Strategies
pub use strategy::{
    INVALID_SQUARE, InteractiveStrategy, MoveInput, OptimalStrategy, RandomStrategy, Strategy,
    StrategyKind,
};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, GameObserver, Orchestrator, Silent};
