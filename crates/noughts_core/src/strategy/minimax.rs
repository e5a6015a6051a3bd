//! Hard tier: exhaustive minimax search.
//!
//! Scores are seen from the opponent: a win is `10 - depth`, a loss
//! `depth - 10`, a draw `0`, so faster wins and slower losses rank higher.
//! Every child is evaluated on its own board copy.

use super::{Difficulty, OpponentStrategy};
use crate::rules::{Evaluation, evaluate};
use crate::{Board, Position, Side};
use tracing::{debug, instrument};

const WIN_SCORE: i32 = 10;

/// Minimax value of `board` for `opponent`.
///
/// `maximizing` is true when `opponent` is to move in the simulated line.
pub fn minimax(board: &Board, depth: i32, maximizing: bool, opponent: Side, player: Side) -> i32 {
    match evaluate(board) {
        Evaluation::Winner(side) if side == opponent => return WIN_SCORE - depth,
        Evaluation::Winner(_) => return depth - WIN_SCORE,
        Evaluation::Draw => return 0,
        Evaluation::InProgress => {}
    }

    let children = board.empty_cells().into_iter();
    if maximizing {
        children
            .map(|pos| minimax(&board.with_placed(pos, opponent), depth + 1, false, opponent, player))
            .max()
            .unwrap_or(0)
    } else {
        children
            .map(|pos| minimax(&board.with_placed(pos, player), depth + 1, true, opponent, player))
            .min()
            .unwrap_or(0)
    }
}

/// Plays the move with the best minimax value; never loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalStrategy;

impl OptimalStrategy {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }

    /// Scores every empty cell, ascending, as the opponent's next move.
    #[instrument(skip(board))]
    pub fn score_moves(board: &Board, opponent: Side, player: Side) -> Vec<(Position, i32)> {
        board
            .empty_cells()
            .into_iter()
            .map(|pos| {
                let score = minimax(&board.with_placed(pos, opponent), 0, false, opponent, player);
                (pos, score)
            })
            .collect()
    }

    /// Lowest cell among those with the strictly greatest score.
    pub fn best_move(board: &Board, opponent: Side, player: Side) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in Self::score_moves(board, opponent, player) {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((pos, score)),
            }
        }
        best.map(|(pos, _)| pos)
    }
}

impl OpponentStrategy for OptimalStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, opponent: Side, player: Side) -> Option<Position> {
        let choice = Self::best_move(board, opponent, player);
        debug!(?choice, "Minimax choice");
        choice
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }
}
