//! Opponent decision algorithms, one per difficulty tier.
//!
//! Every tier implements [`OpponentStrategy`]; the round controller holds
//! one as a boxed trait object and never knows which tier it is driving.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::HeuristicStrategy;
pub use minimax::{OptimalStrategy, minimax};
pub use random::RandomStrategy;

use crate::{Board, Position, Side};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Decision algorithm choosing the opponent's next cell.
pub trait OpponentStrategy: Send + std::fmt::Debug {
    /// Picks an empty cell for `opponent` to mark.
    ///
    /// Returns `None` only when the board has no empty cell; the controller
    /// never asks on a finished board.
    fn select_move(&mut self, board: &Board, opponent: Side, player: Side) -> Option<Position>;

    /// The tier this strategy implements.
    fn difficulty(&self) -> Difficulty;
}

/// Difficulty tier of a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Win if possible, else block, else random.
    #[default]
    Normal,
    /// Full minimax search; never loses.
    Hard,
}

impl Difficulty {
    /// Builds the strategy for this tier.
    ///
    /// `seed` makes the random choices of the easy and normal tiers
    /// reproducible; the hard tier is deterministic either way.
    #[instrument]
    pub fn strategy(self, seed: Option<u64>) -> Box<dyn OpponentStrategy> {
        let rng = seeded_rng(seed);
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::with_rng(rng)),
            Difficulty::Normal => Box::new(HeuristicStrategy::with_rng(rng)),
            Difficulty::Hard => Box::new(OptimalStrategy::new()),
        }
    }

    /// Display label for menus and the scoreboard.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Unbeatable",
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Uniform choice among the empty cells of `board`.
fn random_empty_cell(board: &Board, rng: &mut StdRng) -> Option<Position> {
    board.empty_cells().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::from_str("easy"), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("HARD"), Ok(Difficulty::Hard));
        assert!(Difficulty::from_str("impossible").is_err());
        assert_eq!(Difficulty::Normal.to_string(), "normal");
    }

    #[test]
    fn test_strategy_reports_tier() {
        for tier in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(tier.strategy(Some(7)).difficulty(), tier);
        }
    }
}
