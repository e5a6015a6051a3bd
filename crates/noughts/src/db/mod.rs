//! Score persistence in a local SQLite file.

mod error;
mod models;
mod repository;
mod schema;

pub use error::DbError;
pub use models::{NewScoreEntry, ScoreEntry, ScoreKey};
pub use repository::ScoreRepository;
