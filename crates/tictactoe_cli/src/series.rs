//! Building players from settings and running a series of games.

use crate::config::{PlaySettings, Seat};
use crate::console::StdinInput;
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tictactoe_core::{
    GameError, GameObserver, GameStatus, InteractiveStrategy, Mark, OptimalStrategy, Orchestrator,
    RandomStrategy, Strategy, StrategyKind,
};
use tracing::{info, instrument};

/// Results over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Number of games counted.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

fn rng_for(seed: Option<u64>, mark: Mark) -> StdRng {
    match seed {
        Some(seed) => {
            let offset = match mark {
                Mark::X => 0,
                Mark::O => 1,
            };
            StdRng::seed_from_u64(seed.wrapping_add(offset))
        }
        None => StdRng::from_os_rng(),
    }
}

/// Builds the strategy for one seat.
#[instrument(skip(seed), fields(mark = %seat.mark(), kind = %seat.kind()))]
pub fn build_strategy(seat: &Seat, seed: Option<u64>) -> Box<dyn Strategy> {
    let mark = *seat.mark();
    let name = seat.name().clone();
    match seat.kind() {
        StrategyKind::Human => Box::new(InteractiveStrategy::new(name, mark, StdinInput)),
        StrategyKind::Random => Box::new(RandomStrategy::new(name, mark, rng_for(seed, mark))),
        StrategyKind::Optimal => Box::new(OptimalStrategy::new(name, mark, rng_for(seed, mark))),
    }
}

/// Plays `settings.games()` games with the same two players.
#[instrument(skip_all, fields(games = settings.games()))]
pub fn play_series(
    settings: &PlaySettings,
    observer: &mut dyn GameObserver,
) -> Result<Tally, GameError> {
    let player_x = build_strategy(settings.x(), *settings.seed());
    let player_o = build_strategy(settings.o(), *settings.seed());
    run_series(player_x, player_o, *settings.games(), observer)
}

/// Plays `games` games between two already-built players.
pub fn run_series(
    player_x: Box<dyn Strategy>,
    player_o: Box<dyn Strategy>,
    games: u32,
    observer: &mut dyn GameObserver,
) -> Result<Tally, GameError> {
    let mut game = Orchestrator::new(player_x, player_o)?;
    let mut tally = Tally::default();

    for round in 1..=games {
        if round > 1 {
            game.restart();
        }
        let status = game.run(observer)?;
        tally.record(status);
        info!(round, ?status, "Game finished");
    }

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_outcomes() {
        let mut tally = Tally::default();
        tally.record(GameStatus::Won(Mark::X));
        tally.record(GameStatus::Draw);
        tally.record(GameStatus::Draw);
        tally.record(GameStatus::InProgress);
        assert_eq!(tally.games(), 3);
        assert_eq!(tally.to_string(), "X wins: 1, O wins: 0, draws: 2");
    }

    #[test]
    fn test_seeded_rngs_differ_per_seat() {
        use rand::Rng;
        let mut x = rng_for(Some(3), Mark::X);
        let mut o = rng_for(Some(3), Mark::O);
        let mut x_again = rng_for(Some(3), Mark::X);
        let first: u64 = x.random();
        assert_eq!(first, x_again.random::<u64>());
        assert_ne!(first, o.random::<u64>());
    }
}
