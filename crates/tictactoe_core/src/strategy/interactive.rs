//! Strategy that asks a person for each move.

use super::Strategy;
use crate::error::StrategyError;
use crate::position::Position;
use crate::types::{Board, Mark};
use tracing::{debug, info, instrument};

/// Message shown when typed input is not an open square.
pub const INVALID_SQUARE: &str = "Invalid square. Try again.";

/// Source of typed moves.
pub trait MoveInput {
    /// Shows `prompt` and returns one line of raw text.
    ///
    /// `Ok(None)` means the source is exhausted.
    fn read_move(&mut self, prompt: &str) -> std::io::Result<Option<String>>;

    /// Tells the person their last answer was not accepted.
    fn reject(&mut self, message: &str);
}

/// Human player reading moves from a [`MoveInput`].
pub struct InteractiveStrategy<I> {
    name: String,
    mark: Mark,
    input: I,
}

impl<I: MoveInput> InteractiveStrategy<I> {
    /// Creates a human player.
    pub fn new(name: impl Into<String>, mark: Mark, input: I) -> Self {
        Self {
            name: name.into(),
            mark,
            input,
        }
    }

    /// Returns the input source.
    pub fn input(&self) -> &I {
        &self.input
    }
}

impl<I: MoveInput> Strategy for InteractiveStrategy<I> {
    /// Prompts until the answer is the index of an empty square.
    ///
    /// Rejected answers are reported through [`MoveInput::reject`] and never
    /// surface as errors.
    #[instrument(skip(self, board), fields(player = %self.name, mark = %self.mark))]
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, StrategyError> {
        let available = board.available_moves();
        if available.is_empty() {
            return Err(StrategyError::NoAvailableMoves);
        }

        let prompt = format!("{}'s turn. Input move (0-8): ", self.mark);
        loop {
            let Some(answer) = self.input.read_move(&prompt)? else {
                info!("Input closed while waiting for a move");
                return Err(StrategyError::InputClosed);
            };

            let chosen = answer
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(Position::from_index)
                .filter(|pos| available.contains(pos));

            match chosen {
                Some(position) => {
                    debug!(position = %position, "Accepted move");
                    return Ok(position);
                }
                None => {
                    debug!(answer = %answer.trim(), "Rejected move");
                    self.input.reject(INVALID_SQUARE);
                }
            }
        }
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct Scripted {
        answers: VecDeque<String>,
        prompts: Vec<String>,
        rejections: usize,
    }

    impl Scripted {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl MoveInput for Scripted {
        fn read_move(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.answers.pop_front())
        }

        fn reject(&mut self, message: &str) {
            assert_eq!(message, INVALID_SQUARE);
            self.rejections += 1;
        }
    }

    #[test]
    fn test_accepts_valid_index() {
        let mut board = Board::new();
        let mut human = InteractiveStrategy::new("You", Mark::X, Scripted::new(&["4\n"]));
        assert_eq!(human.choose_move(&mut board).ok(), Some(Position::Center));
        assert_eq!(human.input().prompts, vec!["X's turn. Input move (0-8): "]);
        assert_eq!(human.input().rejections, 0);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut board = Board::new();
        board.apply_move(Position::Center, Mark::X);
        let answers = ["abc", "", "9", "-1", "4", " 2 "];
        let mut human = InteractiveStrategy::new("You", Mark::O, Scripted::new(&answers));
        assert_eq!(human.choose_move(&mut board).ok(), Some(Position::TopRight));
        assert_eq!(human.input().rejections, 5);
        assert_eq!(human.input().prompts.len(), 6);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut board = Board::new();
        let mut human = InteractiveStrategy::new("You", Mark::X, Scripted::new(&["x"]));
        assert!(matches!(
            human.choose_move(&mut board),
            Err(StrategyError::InputClosed)
        ));
        assert_eq!(human.input().rejections, 1);
    }
}
