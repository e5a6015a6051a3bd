//! Round phases and outcomes.

use super::Side;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side won the round.
    Winner(Side),
    /// Round ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{} wins", side),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the round state machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the human player to pick a cell.
    AwaitingPlayerMove,
    /// Waiting for the driver to trigger the opponent's move.
    AwaitingOpponentMove,
    /// The round has finished; only a new round can leave this phase.
    RoundOver(Outcome),
}

impl RoundPhase {
    /// Returns the phase in which `side` is expected to move.
    pub fn awaiting(side: Side) -> Self {
        match side {
            Side::Player => RoundPhase::AwaitingPlayerMove,
            Side::Opponent => RoundPhase::AwaitingOpponentMove,
        }
    }

    /// Returns the outcome once the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            RoundPhase::RoundOver(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Side::Player).to_string(), "Player wins");
        assert_eq!(Outcome::Winner(Side::Opponent).to_string(), "Opponent wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_outcome_winner_and_draw() {
        assert_eq!(Outcome::Winner(Side::Opponent).winner(), Some(Side::Opponent));
        assert!(!Outcome::Winner(Side::Player).is_draw());
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(Outcome::Draw.is_draw());
    }

    #[test]
    fn test_phase_outcome() {
        assert_eq!(RoundPhase::AwaitingPlayerMove.outcome(), None);
        assert_eq!(
            RoundPhase::RoundOver(Outcome::Draw).outcome(),
            Some(Outcome::Draw)
        );
    }
}
