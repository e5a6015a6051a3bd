//! Contract-based validation for round moves.
//!
//! Contracts formalize Hoare-style reasoning, {P} action {Q}: the
//! precondition must hold before a move is applied, the postcondition is
//! checked on the resulting round in debug builds.

use super::action::MoveError;
use super::invariants::{InvariantSet, RoundInvariants};
use super::round::RoundState;
use super::{Position, Side};
use tracing::instrument;

/// A move request as it arrives from a driver: a side and a raw cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Side asking to move.
    pub side: Side,
    /// Raw cell index, not yet range-checked.
    pub cell: usize,
}

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What the precondition yields once the action is validated.
    type Validated;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Validated, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), MoveError>;
}

/// Precondition: the round must still be in progress.
pub struct RoundActive;

impl RoundActive {
    /// Checks the precondition.
    pub fn check(round: &RoundState) -> Result<(), MoveError> {
        if round.is_over() {
            Err(MoveError::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the requesting side's turn.
pub struct SidesTurn;

impl SidesTurn {
    /// Checks the precondition.
    pub fn check(side: Side, round: &RoundState) -> Result<(), MoveError> {
        if side != round.turn_owner() {
            Err(MoveError::WrongTurn(side))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell index must name a board position.
pub struct InRange;

impl InRange {
    /// Checks the precondition, yielding the position.
    pub fn check(cell: usize) -> Result<Position, MoveError> {
        Position::from_index(cell).ok_or(MoveError::OutOfRange(cell))
    }
}

/// Precondition: the targeted cell must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    pub fn check(pos: Position, round: &RoundState) -> Result<(), MoveError> {
        if round.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: round active, side's turn, cell in range and empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in that order.
    #[instrument(skip(round))]
    pub fn check(request: &MoveRequest, round: &RoundState) -> Result<Position, MoveError> {
        RoundActive::check(round)?;
        SidesTurn::check(request.side, round)?;
        let pos = InRange::check(request.cell)?;
        SquareIsEmpty::check(pos, round)?;
        Ok(pos)
    }
}

/// Contract for move actions: [`LegalMove`] before, [`RoundInvariants`] after.
pub struct MoveContract;

impl Contract<RoundState, MoveRequest> for MoveContract {
    type Validated = Position;

    fn pre(round: &RoundState, action: &MoveRequest) -> Result<Position, MoveError> {
        LegalMove::check(action, round)
    }

    fn post(after: &RoundState) -> Result<(), MoveError> {
        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
