//! Tests for minimax search and the perfect-play strategy.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_core::{
    Board, GameStatus, Mark, Minimax, OptimalStrategy, Orchestrator, Position, RandomStrategy,
    Silent, Strategy,
};

#[test]
fn test_optimal_self_play_always_draws() {
    for seed in 0..12 {
        let x = OptimalStrategy::new("X", Mark::X, StdRng::seed_from_u64(seed));
        let o = OptimalStrategy::new("O", Mark::O, StdRng::seed_from_u64(seed + 100));
        let mut game = Orchestrator::new(Box::new(x), Box::new(o)).expect("seats match");
        let status = game.run(&mut Silent).expect("game completes");
        assert_eq!(status, GameStatus::Draw, "seed {} ended\n{}", seed, game.board().display());
    }
}

#[test]
fn test_optimal_never_loses_to_random() {
    for seed in 0..20 {
        let x = OptimalStrategy::new("Optimal", Mark::X, StdRng::seed_from_u64(seed));
        let o = RandomStrategy::new("Random", Mark::O, StdRng::seed_from_u64(seed + 1000));
        let mut game = Orchestrator::new(Box::new(x), Box::new(o)).expect("seats match");
        let status = game.run(&mut Silent).expect("game completes");
        assert_ne!(status, GameStatus::Won(Mark::O));

        let x = RandomStrategy::new("Random", Mark::X, StdRng::seed_from_u64(seed + 2000));
        let o = OptimalStrategy::new("Optimal", Mark::O, StdRng::seed_from_u64(seed));
        let mut game = Orchestrator::new(Box::new(x), Box::new(o)).expect("seats match");
        let status = game.run(&mut Silent).expect("game completes");
        assert_ne!(status, GameStatus::Won(Mark::X));
    }
}

#[test]
fn test_blocks_immediate_threat() {
    let mut board = Board::new();
    board.apply_move(Position::TopLeft, Mark::X);
    board.apply_move(Position::TopCenter, Mark::X);
    let before = board.clone();

    let mut engine = Minimax::new(Mark::O);
    let result = engine.search(&mut board, Mark::O);
    assert_eq!(result.position(), Some(Position::TopRight));
    assert_eq!(board, before);
}

#[test]
fn test_corner_opening_must_be_answered_in_center() {
    let mut board = Board::new();
    board.apply_move(Position::TopLeft, Mark::X);

    let mut engine = Minimax::new(Mark::O);
    let result = engine.search(&mut board, Mark::O);
    assert_eq!(result.position(), Some(Position::Center));
    assert_eq!(result.score(), 0);
}

#[test]
fn test_prefers_faster_win() {
    // X to move: 2 wins at once; other lines would win later.
    let mut board: Board = "XX.OO.X..".parse().expect("valid board");
    let mut engine = Minimax::new(Mark::X);
    let result = engine.search(&mut board, Mark::X);
    assert_eq!(result.position(), Some(Position::TopRight));
    assert_eq!(result.score(), board.empty_square_count() as i32);
}

#[test]
fn test_ties_resolve_to_lowest_index() {
    let mut board = Board::new();
    board.apply_move(Position::Center, Mark::X);

    // Every corner draws against a center opening; edges lose.
    let mut engine = Minimax::new(Mark::O);
    let first = engine.search(&mut board, Mark::O);
    assert_eq!(first.position(), Some(Position::TopLeft));
    assert_eq!(first.score(), 0);

    for _ in 0..3 {
        assert_eq!(engine.search(&mut board, Mark::O), first);
    }
}

#[test]
fn test_result_is_first_best_candidate() {
    let positions = ["X........", "....X....", ".X.......", "X...O...X", "XO..X....", ".O.X....."];
    for text in positions {
        let mut board: Board = text.parse().expect("valid board");
        let to_move = if board.empty_square_count() % 2 == 1 { Mark::X } else { Mark::O };

        let mut scores = Vec::new();
        for candidate in board.available_moves() {
            board.apply_move(candidate, to_move);
            let child = Minimax::new(to_move).search(&mut board, to_move.opponent());
            board.undo_move(candidate);
            scores.push((candidate, child.score()));
        }
        let best = scores.iter().map(|(_, s)| *s).max().expect("moves available");
        let expected = scores.iter().find(|(_, s)| *s == best).map(|(p, _)| *p);

        let result = Minimax::new(to_move).search(&mut board, to_move);
        assert_eq!(result.position(), expected, "board {}", text);
        assert_eq!(result.score(), best, "board {}", text);
    }
}

#[test]
fn test_opening_move_is_random_and_unsearched() {
    let mut counts = [0usize; 9];
    let mut player = OptimalStrategy::new("Optimal", Mark::X, StdRng::seed_from_u64(42));
    for _ in 0..900 {
        let mut board = Board::new();
        let pos = player.choose_move(&mut board).expect("moves available");
        counts[pos.to_index()] += 1;
    }

    assert_eq!(player.searches(), 0);
    for (index, count) in counts.iter().enumerate() {
        assert!((40..=160).contains(count), "square {} picked {} times", index, count);
    }
}

#[test]
fn test_later_moves_are_searched_deterministically() {
    let mut board = Board::new();
    board.apply_move(Position::Center, Mark::X);

    let mut a = OptimalStrategy::new("A", Mark::O, StdRng::seed_from_u64(1));
    let mut b = OptimalStrategy::new("B", Mark::O, StdRng::seed_from_u64(2));
    let first = a.choose_move(&mut board).expect("moves available");
    assert_eq!(first, b.choose_move(&mut board).expect("moves available"));
    assert_eq!(first, Position::TopLeft);
    assert_eq!(a.searches(), 1);
    assert!(a.last_search_nodes() > 1);
}
