//! Exhaustive minimax search.
//!
//! The engine walks the whole remaining game tree on a single board,
//! applying each candidate move and undoing it before trying the next.
//! Terminal positions are scored from the engine's point of view:
//! a win is worth `empty squares + 1`, a loss the negative of that and a
//! draw zero, so faster wins and slower losses score higher.
//!
//! There is no pruning. Among moves with the same score the lowest index
//! is kept, which makes the result reproducible.

use super::position::Position;
use super::types::{Board, Mark};
use derive_new::new;
use tracing::{debug, instrument};

/// Best move found by a search and its score.
///
/// `position` is `None` when the searched board was already terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SearchResult {
    position: Option<Position>,
    score: i32,
}

impl SearchResult {
    /// The chosen move.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Score from the engine's perspective.
    pub fn score(&self) -> i32 {
        self.score
    }
}

/// Minimax engine playing for one mark.
#[derive(Debug, Clone)]
pub struct Minimax {
    engine_mark: Mark,
    nodes: u64,
}

impl Minimax {
    /// Creates an engine that maximizes for `engine_mark`.
    pub fn new(engine_mark: Mark) -> Self {
        Self {
            engine_mark,
            nodes: 0,
        }
    }

    /// Mark the engine plays for.
    pub fn engine_mark(&self) -> Mark {
        self.engine_mark
    }

    /// Positions evaluated by the most recent [`Minimax::search`].
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches for the best move for `to_move` on `board`.
    ///
    /// The board is left exactly as it was passed in.
    #[instrument(skip(self, board), fields(engine = %self.engine_mark, empty = board.empty_square_count()))]
    pub fn search(&mut self, board: &mut Board, to_move: Mark) -> SearchResult {
        self.nodes = 0;
        let result = self.minimax(board, to_move);
        debug!(
            position = ?result.position,
            score = result.score,
            nodes = self.nodes,
            "Search complete"
        );
        result
    }

    fn minimax(&mut self, board: &mut Board, mark: Mark) -> SearchResult {
        self.nodes += 1;
        let previous = mark.opponent();

        // The move that led here was made by the opponent of `mark`.
        if board.last_winner() == Some(previous) {
            let magnitude = board.empty_square_count() as i32 + 1;
            let score = if previous == self.engine_mark {
                magnitude
            } else {
                -magnitude
            };
            return SearchResult::new(None, score);
        }

        if !board.has_empty_square() {
            return SearchResult::new(None, 0);
        }

        let maximizing = mark == self.engine_mark;
        let mut best = SearchResult::new(None, if maximizing { i32::MIN } else { i32::MAX });

        for candidate in board.available_moves() {
            board.apply_move(candidate, mark);
            let mut child = self.minimax(board, previous);
            board.undo_move(candidate);

            child.position = Some(candidate);

            let better = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if better {
                best = child;
            }
        }

        best
    }
}
