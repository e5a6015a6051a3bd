//! Properties of the evaluator and strategies over every reachable board.

use std::collections::HashSet;

use noughts_core::strategy::minimax;
use noughts_core::{
    Board, Cell, Evaluation, HeuristicStrategy, LINES, OpponentStrategy, OptimalStrategy, Side,
    evaluate,
};

/// Every board reachable by alternating play from `starter`, with the side to move.
fn reachable_boards(starter: Side) -> Vec<(Board, Side)> {
    fn walk(board: Board, to_move: Side, seen: &mut HashSet<Board>, out: &mut Vec<(Board, Side)>) {
        if !seen.insert(board) {
            return;
        }
        out.push((board, to_move));
        if evaluate(&board).is_terminal() {
            return;
        }
        for pos in board.empty_cells() {
            walk(board.with_placed(pos, to_move), to_move.other(), seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(Board::new(), starter, &mut seen, &mut out);
    out
}

fn completed_lines(board: &Board, side: Side) -> usize {
    LINES
        .iter()
        .filter(|line| line.iter().all(|p| board.get(*p) == Cell::Occupied(side)))
        .count()
}

#[test]
fn test_at_most_one_side_has_a_line() {
    for starter in [Side::Player, Side::Opponent] {
        for (board, _) in reachable_boards(starter) {
            let player = completed_lines(&board, Side::Player) > 0;
            let opponent = completed_lines(&board, Side::Opponent) > 0;
            assert!(!(player && opponent), "{}", board.display());
        }
    }
}

#[test]
fn test_evaluate_winner_matches_lines() {
    for (board, _) in reachable_boards(Side::Player) {
        match evaluate(&board) {
            Evaluation::Winner(side) => assert!(completed_lines(&board, side) > 0),
            Evaluation::Draw => {
                assert!(board.empty_cells().is_empty());
                assert_eq!(completed_lines(&board, Side::Player), 0);
                assert_eq!(completed_lines(&board, Side::Opponent), 0);
            }
            Evaluation::InProgress => assert!(!board.empty_cells().is_empty()),
        }
    }
}

#[test]
fn test_heuristic_wins_then_blocks() {
    let mut strategy = HeuristicStrategy::seeded(99);

    for (board, to_move) in reachable_boards(Side::Player) {
        if to_move != Side::Opponent || evaluate(&board).is_terminal() {
            continue;
        }
        let choice = strategy
            .select_move(&board, Side::Opponent, Side::Player)
            .expect("non-terminal board");
        assert!(board.is_empty(choice));

        let winning: Vec<_> = board
            .empty_cells()
            .into_iter()
            .filter(|p| evaluate(&board.with_placed(*p, Side::Opponent)) == Evaluation::Winner(Side::Opponent))
            .collect();
        let blocking: Vec<_> = board
            .empty_cells()
            .into_iter()
            .filter(|p| evaluate(&board.with_placed(*p, Side::Player)) == Evaluation::Winner(Side::Player))
            .collect();

        if let Some(first) = winning.first() {
            assert_eq!(choice, *first, "{}", board.display());
        } else if let Some(first) = blocking.first() {
            assert_eq!(choice, *first, "{}", board.display());
        }
    }
}

#[test]
fn test_optimal_choice_is_never_worse_than_alternatives() {
    // Positions after the first two moves keep the search short.
    for (board, to_move) in reachable_boards(Side::Player) {
        if to_move != Side::Opponent
            || board.occupied_count() < 3
            || evaluate(&board).is_terminal()
        {
            continue;
        }
        let mut strategy = OptimalStrategy::new();
        let choice = strategy
            .select_move(&board, Side::Opponent, Side::Player)
            .expect("non-terminal board");

        let value = |p| minimax(&board.with_placed(p, Side::Opponent), 0, false, Side::Opponent, Side::Player);
        let chosen = value(choice);
        for alternative in board.empty_cells() {
            assert!(chosen >= value(alternative), "{}", board.display());
        }
        // Ties resolve to the lowest index.
        let first_best = board
            .empty_cells()
            .into_iter()
            .find(|p| value(*p) == chosen)
            .expect("choice is among empty cells");
        assert_eq!(choice, first_best);
    }
}

#[test]
fn test_optimal_never_loses_from_any_reachable_start() {
    // Every board the opponent can face after the player's opening move.
    for (board, to_move) in reachable_boards(Side::Player) {
        if to_move != Side::Opponent || board.occupied_count() != 1 {
            continue;
        }
        let scores = OptimalStrategy::score_moves(&board, Side::Opponent, Side::Player);
        let best = scores.iter().map(|(_, s)| *s).max().expect("eight replies");
        assert!(best >= 0, "{}", board.display());
    }
}
