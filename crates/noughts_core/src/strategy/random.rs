//! Easy tier: uniformly random moves.

use super::{Difficulty, OpponentStrategy, random_empty_cell, seeded_rng};
use crate::{Board, Position, Side};
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Picks any empty cell with equal probability. No lookahead.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(seeded_rng(None))
    }

    /// Creates a strategy with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(seeded_rng(Some(seed)))
    }

    pub(super) fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentStrategy for RandomStrategy {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, _opponent: Side, _player: Side) -> Option<Position> {
        let choice = random_empty_cell(board, &mut self.rng);
        debug!(?choice, "Random choice");
        choice
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_only_empty_cells() {
        let mut board = Board::new();
        for cell in [0, 1, 2, 3, 5, 6, 7] {
            board.place(cell, Side::Player).unwrap();
        }
        let mut strategy = RandomStrategy::seeded(3);
        for _ in 0..20 {
            let pos = strategy
                .select_move(&board, Side::Opponent, Side::Player)
                .expect("two empty cells");
            assert!(matches!(pos, Position::Center | Position::BottomRight));
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);
        for _ in 0..10 {
            assert_eq!(
                a.select_move(&board, Side::Opponent, Side::Player),
                b.select_move(&board, Side::Opponent, Side::Player)
            );
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let board = Board::from_cells([crate::Cell::Occupied(Side::Player); 9]);
        let mut strategy = RandomStrategy::seeded(1);
        assert_eq!(strategy.select_move(&board, Side::Opponent, Side::Player), None);
    }
}
