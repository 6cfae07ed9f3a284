//! Error types for the game core.

use super::position::Position;
use super::types::Mark;

/// Error produced while a strategy picks its move.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StrategyError {
    /// Asked for a move on a full board.
    #[display("No available moves: the board is full")]
    NoAvailableMoves,

    /// The input source reached end of stream.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Reading from the input source failed.
    #[display("Failed to read move: {}", _0)]
    #[from]
    Input(std::io::Error),
}

/// Fatal error that ends a game.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A strategy proposed an occupied square.
    #[display("{} proposed occupied square {}", mark, position)]
    IllegalMove {
        /// Mark that proposed the move.
        mark: Mark,
        /// The occupied square.
        position: Position,
    },

    /// A strategy was seated on the wrong side.
    #[display("Seat {} was given a strategy playing {}", expected, found)]
    WrongMark {
        /// Mark of the seat.
        expected: Mark,
        /// Mark the strategy plays.
        found: Mark,
    },

    /// A move was requested after the game ended.
    #[display("Game is already over")]
    GameOver,

    /// The active strategy could not produce a move.
    #[display("Strategy failed: {}", _0)]
    #[from]
    Strategy(StrategyError),
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// Input does not have exactly nine cells.
    #[display("Board needs 9 cells, got {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// Input contains a character that is neither a mark nor empty.
    #[display("Invalid cell symbol {:?}", _0)]
    InvalidSymbol(#[error(not(source))] char),

    /// The board already has a completed line.
    #[display("Board is already won by {}", _0)]
    AlreadyWon(#[error(not(source))] Mark),
}
