//! Win detection for tic-tac-toe.
//!
//! Pure functions over a [`Board`], kept apart from board storage.

use super::position::Position;
use super::types::{Board, Mark, Square};

/// The eight winning lines.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn owns_line(board: &Board, line: &[Position; 3], mark: Mark) -> bool {
    line.iter().all(|pos| board.get(*pos) == Square::Occupied(mark))
}

/// Whether `mark` owns the row, column or a diagonal through `pos`.
///
/// Diagonals are only examined for even-indexed cells; odd cells lie on none.
pub fn completes_line(board: &Board, pos: Position, mark: Mark) -> bool {
    let row = &LINES[pos.row()];
    if owns_line(board, row, mark) {
        return true;
    }

    let col = &LINES[3 + pos.col()];
    if owns_line(board, col, mark) {
        return true;
    }

    pos.on_diagonal() && LINES[6..].iter().any(|diag| owns_line(board, diag, mark))
}

/// Scans every line for three equal marks.
///
/// Returns `Some(mark)` for the first completed line, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}
