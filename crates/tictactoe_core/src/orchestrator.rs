//! Game orchestration between two strategies.

use crate::error::GameError;
use crate::position::Position;
use crate::strategy::Strategy;
use crate::types::{Board, GameStatus, Mark};
use tracing::{debug, info, instrument};

/// Notifications sent from the orchestrator to whoever presents the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game is about to begin.
    Started,
    /// A move was applied.
    MoveMade {
        /// Mark that moved.
        mark: Mark,
        /// Square it moved to.
        position: Position,
        /// Board after the move.
        board: Board,
    },
    /// The game ended.
    GameOver {
        /// Winning mark, `None` for a draw.
        winner: Option<Mark>,
    },
}

/// Receives game events. Purely observational.
pub trait GameObserver {
    /// Called once per event, in order.
    fn on_event(&mut self, event: &GameEvent);
}

/// Collects events, mostly useful in tests.
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl GameObserver for Silent {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Runs a game between two strategies on a board it owns.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Strategy>,
    player_o: Box<dyn Strategy>,
    to_move: Mark,
    status: GameStatus,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh game. X moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::WrongMark`] if a strategy plays the other seat's mark.
    pub fn new(player_x: Box<dyn Strategy>, player_o: Box<dyn Strategy>) -> Result<Self, GameError> {
        for (expected, player) in [(Mark::X, &player_x), (Mark::O, &player_o)] {
            if player.mark() != expected {
                return Err(GameError::WrongMark {
                    expected,
                    found: player.mark(),
                });
            }
        }

        Ok(Self {
            board: Board::new(),
            player_x,
            player_o,
            to_move: Mark::X,
            status: GameStatus::InProgress,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the strategy seated for `mark`.
    pub fn player(&self, mark: Mark) -> &dyn Strategy {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }

    /// Plays one turn: asks the active strategy for a move and applies it.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, the strategy cannot move, or the strategy
    /// proposes an occupied square. All of these end the game.
    #[instrument(skip(self, observer), fields(mark = %self.to_move))]
    pub fn step(&mut self, observer: &mut dyn GameObserver) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let mark = self.to_move;
        let player = match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        };

        debug!(player = %player.name(), "Waiting for move");
        #[cfg(debug_assertions)]
        let before = self.board.clone();
        let position = player.choose_move(&mut self.board)?;
        #[cfg(debug_assertions)]
        assert_eq!(before, self.board, "strategy left the board modified");

        if !self.board.apply_move(position, mark) {
            return Err(GameError::IllegalMove { mark, position });
        }
        info!(position = %position, "Move made");

        observer.on_event(&GameEvent::MoveMade {
            mark,
            position,
            board: self.board.clone(),
        });

        self.status = if self.board.last_winner() == Some(mark) {
            GameStatus::Won(mark)
        } else if !self.board.has_empty_square() {
            GameStatus::Draw
        } else {
            self.to_move = mark.opponent();
            GameStatus::InProgress
        };

        Ok(self.status)
    }

    /// Runs the game loop until a win or draw.
    #[instrument(skip(self, observer), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, observer: &mut dyn GameObserver) -> Result<GameStatus, GameError> {
        info!("Starting game");
        if self.board.empty_square_count() == 9 {
            observer.on_event(&GameEvent::Started);
        }

        while !self.status.is_over() {
            self.step(observer)?;
        }

        let winner = self.status.winner();
        info!(winner = ?winner, "Game over");
        observer.on_event(&GameEvent::GameOver { winner });
        Ok(self.status)
    }

    /// Clears the board for a new game with the same players.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.to_move = Mark::X;
        self.status = GameStatus::InProgress;
    }
}
