//! Strategy trait and implementations.

mod interactive;
mod optimal;
mod random;

pub use interactive::{INVALID_SQUARE, InteractiveStrategy, MoveInput};
pub use optimal::OptimalStrategy;
pub use random::RandomStrategy;

use crate::error::StrategyError;
use crate::position::Position;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Something that can pick a move for one side of the game.
///
/// The board is lent mutably for the duration of one decision so that
/// search-based strategies can explore it in place. Implementations must
/// hand it back unchanged.
pub trait Strategy {
    /// Picks the next move for [`Strategy::mark`].
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, StrategyError>;

    /// The mark this strategy plays.
    fn mark(&self) -> Mark;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// The available kinds of strategy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Moves typed in by a person.
    Human,
    /// Uniformly random legal moves.
    Random,
    /// Perfect play through minimax search.
    Optimal,
}

impl StrategyKind {
    /// Whether this kind waits on a person.
    pub fn is_interactive(self) -> bool {
        matches!(self, StrategyKind::Human)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!("optimal".parse::<StrategyKind>(), Ok(StrategyKind::Optimal));
        assert_eq!("Human".parse::<StrategyKind>(), Ok(StrategyKind::Human));
        assert!("genius".parse::<StrategyKind>().is_err());
        assert_eq!(StrategyKind::Random.to_string(), "random");
    }
}
