//! Strategy that picks uniformly among the empty squares.

use super::Strategy;
use crate::error::StrategyError;
use crate::position::Position;
use crate::types::{Board, Mark};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Uniformly samples one of the board's available moves.
pub(crate) fn pick_random<R: Rng>(board: &Board, rng: &mut R) -> Result<Position, StrategyError> {
    board
        .available_moves()
        .choose(rng)
        .copied()
        .ok_or(StrategyError::NoAvailableMoves)
}

/// Random player.
pub struct RandomStrategy<R> {
    name: String,
    mark: Mark,
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a random player drawing from `rng`.
    pub fn new(name: impl Into<String>, mark: Mark, rng: R) -> Self {
        Self {
            name: name.into(),
            mark,
            rng,
        }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    #[instrument(skip(self, board), fields(player = %self.name, mark = %self.mark))]
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, StrategyError> {
        let position = pick_random(board, &mut self.rng)?;
        debug!(position = %position, "Random pick");
        Ok(position)
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}
