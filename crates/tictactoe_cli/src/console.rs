//! Console presentation and keyboard input.

use std::io::{self, BufRead, Write};
use tictactoe_core::{Board, GameEvent, GameObserver, MoveInput};
use tracing::warn;

/// Prints the game to a writer as it unfolds.
pub struct ConsoleObserver<W> {
    out: W,
}

impl ConsoleObserver<io::Stdout> {
    /// Observer printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    /// Creates an observer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::Started => writeln!(self.out, "{}\n", Board::display_numbers())?,
            GameEvent::MoveMade {
                mark,
                position,
                board,
            } => {
                writeln!(self.out, "{} makes a move to square {}", mark, position)?;
                writeln!(self.out, "{}\n", board.display())?;
            }
            GameEvent::GameOver { winner: Some(mark) } => writeln!(self.out, "{} wins!", mark)?,
            GameEvent::GameOver { winner: None } => writeln!(self.out, "It's a tie!")?,
        }
        self.out.flush()
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_event(&mut self, event: &GameEvent) {
        if let Err(e) = self.render(event) {
            warn!(error = %e, "Failed to print game event");
        }
    }
}

/// Reads moves typed on standard input.
///
/// Locks stdin only for the duration of one read, so both seats can be
/// human.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInput;

impl MoveInput for StdinInput {
    fn read_move(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        drop(stdout);

        read_line(&mut io::stdin().lock())
    }

    fn reject(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Reads one line; `None` at end of input.
fn read_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
