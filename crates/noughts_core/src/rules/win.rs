//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Position, Side};
use tracing::instrument;

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the side owning the first completed line in [`LINES`] order,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Side> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if let Cell::Occupied(side) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some(side);
        }
    }

    None
}

/// Returns true if `side` completes a line by marking `pos`.
pub fn wins_with(board: &Board, pos: Position, side: Side) -> bool {
    board.is_empty(pos) && check_winner(&board.with_placed(pos, side)) == Some(side)
}
