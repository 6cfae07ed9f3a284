//! Perfect-play strategy backed by minimax search.

use super::Strategy;
use super::random::pick_random;
use crate::error::StrategyError;
use crate::position::Position;
use crate::search::Minimax;
use crate::types::{Board, Mark};
use rand::Rng;
use tracing::{debug, instrument};

/// Player that never loses.
///
/// On an empty board every opening is equally good, so the first move is
/// drawn at random instead of searched.
pub struct OptimalStrategy<R> {
    name: String,
    rng: R,
    engine: Minimax,
    searches: u64,
}

impl<R: Rng> OptimalStrategy<R> {
    /// Creates a perfect player; `rng` is only used for the opening move.
    pub fn new(name: impl Into<String>, mark: Mark, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
            engine: Minimax::new(mark),
            searches: 0,
        }
    }

    /// Number of searches run so far.
    pub fn searches(&self) -> u64 {
        self.searches
    }

    /// Positions evaluated by the most recent search.
    pub fn last_search_nodes(&self) -> u64 {
        self.engine.nodes()
    }
}

impl<R: Rng> Strategy for OptimalStrategy<R> {
    #[instrument(skip(self, board), fields(player = %self.name, mark = %self.engine.engine_mark()))]
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, StrategyError> {
        if board.empty_square_count() == 9 {
            let position = pick_random(board, &mut self.rng)?;
            debug!(position = %position, "Opening move drawn at random");
            return Ok(position);
        }

        self.searches += 1;
        let mark = self.engine.engine_mark();
        let result = self.engine.search(board, mark);
        debug!(
            position = ?result.position(),
            score = result.score(),
            nodes = self.engine.nodes(),
            "Search chose move"
        );
        result.position().ok_or(StrategyError::NoAvailableMoves)
    }

    fn mark(&self) -> Mark {
        self.engine.engine_mark()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
