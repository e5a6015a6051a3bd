//! First-class invariants for a round.
//!
//! Invariants are logical properties that must hold after every applied
//! move. The controller checks them in debug builds.

use super::round::RoundState;
use super::Cell;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: exactly the cells named in the history are marked, each by
/// the side that played it.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundState> for HistoryConsistentInvariant {
    fn holds(round: &RoundState) -> bool {
        let history = round.history();
        if round.board().occupied_count() != history.len() {
            return false;
        }
        history
            .iter()
            .all(|mv| round.board().get(mv.position) == Cell::Occupied(mv.side))
    }

    fn description() -> &'static str {
        "Board marks must match the move history"
    }
}

/// Invariant: the starter moves first and sides strictly alternate.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundState> for AlternatingTurnInvariant {
    fn holds(round: &RoundState) -> bool {
        let history = round.history();

        match history.first() {
            None => true,
            Some(first) if first.side != round.starter() => false,
            Some(_) => history.windows(2).all(|w| w[0].side != w[1].side),
        }
    }

    fn description() -> &'static str {
        "Sides must alternate, starting with the round's starter"
    }
}

/// All round invariants as a composable set.
pub type RoundInvariants = (HistoryConsistentInvariant, AlternatingTurnInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position, Side};

    #[test]
    fn test_invariant_set_holds_for_fresh_round() {
        let round = RoundState::new(Side::Opponent);
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut round = RoundState::new(Side::Opponent);
        for (side, pos) in [
            (Side::Opponent, Position::Center),
            (Side::Player, Position::TopLeft),
            (Side::Opponent, Position::BottomRight),
        ] {
            round.apply_move(Move::new(side, pos)).unwrap();
        }
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_history_invariant_detects_stray_mark() {
        let mut round = RoundState::new(Side::Player);
        round
            .apply_move(Move::new(Side::Player, Position::Center))
            .unwrap();
        round.board_mut().place(8, Side::Opponent).unwrap();

        assert!(!HistoryConsistentInvariant::holds(&round));
        let violations = RoundInvariants::check_all(&round).unwrap_err();
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_alternation_invariant_detects_wrong_starter() {
        let mut round = RoundState::new(Side::Player);
        // Bypasses the contract: the opponent moves first in a player round.
        round
            .apply_move(Move::new(Side::Opponent, Position::Center))
            .unwrap();
        assert!(!AlternatingTurnInvariant::holds(&round));
    }
}
