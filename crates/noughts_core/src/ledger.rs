//! Cross-session score counters and the store they are persisted through.

use super::{Outcome, Side};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{debug, instrument};

/// Wins, losses and draws from the human player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScoreLedger {
    player_wins: u32,
    opponent_wins: u32,
    draws: u32,
}

impl ScoreLedger {
    /// Creates a ledger from stored counters.
    pub fn new(player_wins: u32, opponent_wins: u32, draws: u32) -> Self {
        Self {
            player_wins,
            opponent_wins,
            draws,
        }
    }

    /// Rounds won by the player.
    pub fn player_wins(&self) -> u32 {
        self.player_wins
    }

    /// Rounds won by the opponent.
    pub fn opponent_wins(&self) -> u32 {
        self.opponent_wins
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total finished rounds, capped at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.player_wins
            .saturating_add(self.opponent_wins)
            .saturating_add(self.draws)
    }

    /// Counts one finished round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Side::Player) => self.player_wins = self.player_wins.saturating_add(1),
            Outcome::Winner(Side::Opponent) => {
                self.opponent_wins = self.opponent_wins.saturating_add(1)
            }
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
        }
        debug!(ledger = %self, "Score recorded");
    }

    /// Zeroes all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for ScoreLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player {} · Opponent {} · Draws {}",
            self.player_wins, self.opponent_wins, self.draws
        )
    }
}

/// Failure reported by a [`ScoreStore`].
#[derive(Debug, Clone, Display, Error)]
#[display("Score store error: {}", message)]
pub struct StoreError {
    /// Error message.
    pub message: String,
}

impl StoreError {
    /// Creates a new store error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Durable home of the score counters.
///
/// Loading never fails on bad data: missing or unparseable counters read as
/// zero. Errors are reserved for an unreachable backend.
pub trait ScoreStore: Send + std::fmt::Debug {
    /// Loads the three counters.
    fn load_scores(&self) -> Result<ScoreLedger, StoreError>;

    /// Replaces the three counters together.
    fn save_scores(&mut self, ledger: &ScoreLedger) -> Result<(), StoreError>;
}

/// In-process store; clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    inner: Arc<Mutex<ScoreLedger>>,
}

impl MemoryScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `ledger`.
    pub fn with_ledger(ledger: ScoreLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Returns the stored counters.
    pub fn snapshot(&self) -> ScoreLedger {
        match self.inner.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_scores(&self) -> Result<ScoreLedger, StoreError> {
        Ok(self.snapshot())
    }

    fn save_scores(&mut self, ledger: &ScoreLedger) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| StoreError::new(format!("Lock poisoned: {}", e)))?;
        *guard = *ledger;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_each_outcome() {
        let mut ledger = ScoreLedger::default();
        ledger.record(Outcome::Winner(Side::Player));
        ledger.record(Outcome::Winner(Side::Player));
        ledger.record(Outcome::Winner(Side::Opponent));
        ledger.record(Outcome::Draw);
        assert_eq!(ledger, ScoreLedger::new(2, 1, 1));
        assert_eq!(ledger.total(), 4);
    }

    #[test]
    fn test_counters_saturate_at_max() {
        assert_eq!(ScoreLedger::new(u32::MAX, 1, 0).total(), u32::MAX);
        assert_eq!(ScoreLedger::new(u32::MAX, u32::MAX, u32::MAX).total(), u32::MAX);

        let mut ledger = ScoreLedger::new(u32::MAX, 0, 0);
        ledger.record(Outcome::Winner(Side::Player));
        assert_eq!(ledger.player_wins(), u32::MAX);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut ledger = ScoreLedger::new(3, 2, 1);
        ledger.reset();
        let once = ledger;
        ledger.reset();
        assert_eq!(ledger, once);
        assert_eq!(ledger, ScoreLedger::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ScoreLedger::new(3, 1, 2).to_string(),
            "Player 3 · Opponent 1 · Draws 2"
        );
    }

    #[test]
    fn test_memory_store_clones_share_counters() {
        let store = MemoryScoreStore::new();
        let mut writer = store.clone();
        writer.save_scores(&ScoreLedger::new(1, 0, 4)).unwrap();
        assert_eq!(store.load_scores().unwrap(), ScoreLedger::new(1, 0, 4));
    }
}
