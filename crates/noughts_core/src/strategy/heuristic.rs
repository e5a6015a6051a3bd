//! Normal tier: one-ply win/block heuristic.

use super::{Difficulty, OpponentStrategy, random_empty_cell, seeded_rng};
use crate::rules::win::wins_with;
use crate::{Board, Position, Side};
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Wins when it can, blocks when it must, otherwise plays randomly.
///
/// Both scans run in ascending cell order, so the lowest winning cell is
/// taken before any block, and the lowest blocking cell before random play.
#[derive(Debug)]
pub struct HeuristicStrategy {
    rng: StdRng,
}

impl HeuristicStrategy {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(seeded_rng(None))
    }

    /// Creates a strategy with a fixed seed for the random fallback.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(seeded_rng(Some(seed)))
    }

    pub(super) fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// First empty cell, ascending, where `side` completes a line.
fn first_winning_cell(board: &Board, side: Side) -> Option<Position> {
    board
        .empty_cells()
        .into_iter()
        .find(|pos| wins_with(board, *pos, side))
}

impl OpponentStrategy for HeuristicStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, opponent: Side, player: Side) -> Option<Position> {
        if let Some(pos) = first_winning_cell(board, opponent) {
            debug!(%pos, "Taking the win");
            return Some(pos);
        }

        if let Some(pos) = first_winning_cell(board, player) {
            debug!(%pos, "Blocking");
            return Some(pos);
        }

        let choice = random_empty_cell(board, &mut self.rng);
        debug!(?choice, "No threat, random choice");
        choice
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Normal
    }
}
