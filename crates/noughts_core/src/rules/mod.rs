//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the controller and the search share one definition.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// A side has completed a line.
    Winner(Side),
    /// No winner and no empty cell left.
    Draw,
    /// The round continues.
    InProgress,
}

impl Evaluation {
    /// Returns true when no further move can be made.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Evaluation::InProgress)
    }
}

/// Evaluates a board: winner first, then draw on a full board.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some(winner) = check_winner(board) {
        return Evaluation::Winner(winner);
    }
    if is_full(board) {
        return Evaluation::Draw;
    }
    Evaluation::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    const X: Cell = Cell::Occupied(Side::Player);
    const O: Cell = Cell::Occupied(Side::Opponent);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Evaluation::InProgress);
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert_eq!(evaluate(&board), Evaluation::Winner(Side::Player));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        // X O X / X O O / O X X
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), Evaluation::Draw);
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, E]);
        assert_eq!(evaluate(&board), Evaluation::InProgress);
        assert!(!evaluate(&board).is_terminal());
    }
}
