//! Core domain types for tic-tac-toe.

use super::error::BoardParseError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's mark.
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
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Besides the squares, the board remembers whether the most recent
/// [`Board::apply_move`] completed a line. [`Board::undo_move`] forgets it
/// again, which is what lets the search engine backtrack in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Mark whose last move completed a line.
    last_winner: Option<Mark>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            last_winner: None,
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Mark that completed a line with the most recent move, if any.
    pub fn last_winner(&self) -> Option<Mark> {
        self.last_winner
    }

    /// Empty positions in ascending order. Empty on a full board.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Whether any square is still empty.
    pub fn has_empty_square(&self) -> bool {
        self.squares.contains(&Square::Empty)
    }

    /// Number of empty squares.
    pub fn empty_square_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Places `mark` at `pos`.
    ///
    /// Returns `false` without touching the board when the square is taken.
    /// A move that completes a line records `mark` as the last winner.
    pub fn apply_move(&mut self, pos: Position, mark: Mark) -> bool {
        if !self.is_empty(pos) {
            return false;
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        if self.check_win(pos, mark) {
            self.last_winner = Some(mark);
        }
        true
    }

    /// Whether `mark` owns a full line through `pos`.
    pub fn check_win(&self, pos: Position, mark: Mark) -> bool {
        rules::completes_line(self, pos, mark)
    }

    /// Clears `pos` and forgets the last winner.
    ///
    /// Must be paired with the `apply_move` that filled `pos`.
    pub fn undo_move(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
        self.last_winner = None;
    }

    /// Formats the board as rows of `| X | O |   |`.
    pub fn display(&self) -> String {
        self.squares
            .chunks(3)
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
                format!("| {} |", cells.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Formats the index guide, `| 0 | 1 | 2 |` and so on.
    pub fn display_numbers() -> String {
        (0..3)
            .map(|row| {
                let cells: Vec<String> = (row * 3..row * 3 + 3).map(|i| i.to_string()).collect();
                format!("| {} |", cells.join(" | "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X` and `O` (any case) are marks; `.`, `_`, `-` and space are empty.
    /// A board that already holds a completed line is rejected, since there
    /// is no move left to play on it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != 9 {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut board = Board::new();
        for (pos, symbol) in Position::ALL.iter().zip(symbols) {
            board.squares[pos.to_index()] = match symbol {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' | '-' | ' ' => Square::Empty,
                other => return Err(BoardParseError::InvalidSymbol(other)),
            };
        }

        if let Some(winner) = rules::check_winner(&board) {
            return Err(BoardParseError::AlreadyWon(winner));
        }
        Ok(board)
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning mark, if the game was won.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves().len(), 9);
        assert_eq!(board.empty_square_count(), 9);
        assert!(board.has_empty_square());
        assert_eq!(board.last_winner(), None);
    }

    #[test]
    fn test_apply_move_fills_square() {
        let mut board = Board::new();
        assert!(board.apply_move(Position::Center, Mark::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(board.empty_square_count(), 8);
        assert!(!board.available_moves().contains(&Position::Center));
    }

    #[test]
    fn test_available_moves_ascending() {
        let mut board = Board::new();
        board.apply_move(Position::TopLeft, Mark::X);
        board.apply_move(Position::Center, Mark::O);
        let indices: Vec<usize> = board.available_moves().iter().map(|p| p.to_index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.apply_move(Position::TopLeft, Mark::X);
        board.apply_move(Position::Center, Mark::O);
        assert_eq!(board.display(), "| X |   |   |\n|   | O |   |\n|   |   |   |");
        assert_eq!(Board::display_numbers(), "| 0 | 1 | 2 |\n| 3 | 4 | 5 |\n| 6 | 7 | 8 |");
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XO._ -x..".parse().expect("valid board");
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Mark::O));
        assert_eq!(board.get(Position::BottomLeft), Square::Occupied(Mark::X));
        assert_eq!(board.empty_square_count(), 6);
        assert_eq!(board.last_winner(), None);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!("XO?......".parse::<Board>(), Err(BoardParseError::InvalidSymbol('?')));
        assert_eq!("OOO.XX.X.".parse::<Board>(), Err(BoardParseError::AlreadyWon(Mark::O)));
    }

    #[test]
    fn test_mark_parsing() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::X));
        assert_eq!("O".parse::<Mark>(), Ok(Mark::O));
        assert!("z".parse::<Mark>().is_err());
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.to_string(), "O");
    }
}
