//! SQLite-backed score store.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use noughts_core::{ScoreLedger, ScoreStore, StoreError};
use tracing::{debug, info, instrument};

use crate::db::{DbError, NewScoreEntry, ScoreEntry, ScoreKey, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Persists the score ledger as three key/value rows.
///
/// Each operation opens its own connection, so the path must name a file;
/// `":memory:"` would start empty on every call.
#[derive(Debug, Clone)]
pub struct ScoreRepository {
    db_path: String,
}

impl ScoreRepository {
    /// Opens the database at `db_path`, creating it and its table if needed.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the file cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, DbError> {
        let repo = Self {
            db_path: db_path.as_ref().to_string(),
        };
        let mut conn = repo.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Failed to run migrations: {}", e)))?;
        info!(path = %repo.db_path, migrations = applied.len(), "Score database ready");
        Ok(repo)
    }

    /// Path of the database file.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Reads the three counters. Missing rows and unparseable values read as 0.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn load(&self) -> Result<ScoreLedger, DbError> {
        let mut conn = self.connection()?;
        let entries = schema::scores::table
            .select(ScoreEntry::as_select())
            .load::<ScoreEntry>(&mut conn)?;

        let count = |key: ScoreKey| {
            let name = key.to_string();
            entries
                .iter()
                .find(|e| *e.key() == name)
                .map(ScoreEntry::count)
                .unwrap_or(0)
        };
        let ledger = ScoreLedger::new(
            count(ScoreKey::Player),
            count(ScoreKey::Computer),
            count(ScoreKey::Draw),
        );

        info!(%ledger, rows = entries.len(), "Scores loaded");
        Ok(ledger)
    }

    /// Replaces all three counters in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs; nothing is written then.
    #[instrument(skip(self), fields(ledger = %ledger))]
    pub fn save(&self, ledger: &ScoreLedger) -> Result<(), DbError> {
        let mut conn = self.connection()?;
        let rows: Vec<NewScoreEntry> = ScoreKey::all()
            .map(|key| {
                let value = match key {
                    ScoreKey::Player => ledger.player_wins(),
                    ScoreKey::Computer => ledger.opponent_wins(),
                    ScoreKey::Draw => ledger.draws(),
                };
                NewScoreEntry::new(key.to_string(), value.to_string())
            })
            .collect();

        conn.transaction::<_, DbError, _>(|conn| {
            for row in &rows {
                diesel::replace_into(schema::scores::table)
                    .values(row)
                    .execute(conn)?;
            }
            Ok(())
        })?;

        info!("Scores saved");
        Ok(())
    }
}

impl ScoreStore for ScoreRepository {
    fn load_scores(&self) -> Result<ScoreLedger, StoreError> {
        Ok(self.load()?)
    }

    fn save_scores(&mut self, ledger: &ScoreLedger) -> Result<(), StoreError> {
        Ok(self.save(ledger)?)
    }
}
