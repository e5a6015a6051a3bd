//! Rows of the `scores` table and the keys they are stored under.

use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use strum::{EnumIter, IntoEnumIterator};
use tracing::{instrument, warn};

use crate::db::schema;

/// One stored counter.
#[derive(Debug, Clone, Queryable, Selectable, Getters)]
#[diesel(table_name = schema::scores)]
pub struct ScoreEntry {
    key: String,
    value: String,
}

impl ScoreEntry {
    /// Parses the stored value; anything that is not a counter reads as 0.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn count(&self) -> u32 {
        match self.value.trim().parse::<u32>() {
            Ok(n) => n,
            Err(e) => {
                warn!(value = %self.value, error = %e, "Unparseable score, treating as 0");
                0
            }
        }
    }
}

/// Insertable counter row.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::scores)]
pub struct NewScoreEntry {
    key: String,
    value: String,
}

/// Keys the three counters are stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString, EnumIter)]
pub enum ScoreKey {
    /// Rounds won by the player.
    #[strum(serialize = "playerScore")]
    Player,
    /// Rounds won by the computer opponent.
    #[strum(serialize = "computerScore")]
    Computer,
    /// Drawn rounds.
    #[strum(serialize = "drawScore")]
    Draw,
}

impl ScoreKey {
    /// All keys, in storage order.
    pub fn all() -> impl Iterator<Item = ScoreKey> {
        Self::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_key_names() {
        let names: Vec<String> = ScoreKey::all().map(|k| k.to_string()).collect();
        assert_eq!(names, ["playerScore", "computerScore", "drawScore"]);
        assert_eq!(ScoreKey::from_str("drawScore"), Ok(ScoreKey::Draw));
    }

    #[test]
    fn test_count_parses_or_zeroes() {
        let entry = |value: &str| ScoreEntry {
            key: "playerScore".to_string(),
            value: value.to_string(),
        };
        assert_eq!(entry("12").count(), 12);
        assert_eq!(entry(" 3 ").count(), 3);
        assert_eq!(entry("twelve").count(), 0);
        assert_eq!(entry("-1").count(), 0);
        assert_eq!(entry("").count(), 0);
    }
}
