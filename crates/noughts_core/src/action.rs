//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They are validated against
//! the round before being applied and kept in the round history.

use super::{Position, Side};
use serde::{Deserialize, Serialize};

/// A move: one side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The position where the side places its mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position.label())
    }
}

/// Rejected move. Never fatal: the round is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside `0..9`.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// It is not this side's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Side),

    /// The round has already finished.
    #[display("Round is already over")]
    RoundOver,

    /// The opponent strategy produced no move.
    #[display("No move available")]
    NoMoveAvailable,

    /// A round invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
