//! tictactoe - console entry point

use anyhow::Result;
use clap::Parser;
use tictactoe_cli::{Cli, Command, ConsoleObserver, GameConfig, PlayArgs, play_series};
use tictactoe_core::{Board, GameObserver, Mark, Minimax, Silent};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::BestMove { board, mark, json } => run_best_move(&board, mark, json),
    }
}

/// Play one or more games
#[instrument(skip(args))]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let settings = config.resolve(&args)?;
    info!(
        x = %settings.x().kind(),
        o = %settings.o().kind(),
        games = settings.games(),
        "Starting play"
    );

    let mut console = ConsoleObserver::stdout();
    let mut silent = Silent;
    let observer: &mut dyn GameObserver = if args.quiet { &mut silent } else { &mut console };
    let tally = play_series(&settings, observer)?;

    if args.json {
        println!("{}", serde_json::to_string(&tally)?);
    } else if tally.games() > 1 || args.quiet {
        println!("{}", tally);
    }
    Ok(())
}

/// Print the engine's move for a position
#[instrument]
fn run_best_move(board: &str, mark: Mark, json: bool) -> Result<()> {
    let mut board: Board = board.parse()?;
    let mut engine = Minimax::new(mark);
    let result = engine.search(&mut board, mark);

    if json {
        let value = serde_json::json!({
            "position": result.position().map(|p| p.to_index()),
            "score": result.score(),
            "nodes": engine.nodes(),
        });
        println!("{}", value);
        return Ok(());
    }

    match result.position() {
        Some(position) => println!(
            "Best move for {}: {} ({}), score {}",
            mark,
            position,
            position.label(),
            result.score()
        ),
        None => println!("No move for {}: the board is full", mark),
    }
    Ok(())
}
