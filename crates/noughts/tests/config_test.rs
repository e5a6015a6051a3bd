//! Tests for loading the session config.

use std::io::Write;

use noughts::GameConfig;
use noughts_core::Difficulty;
use tempfile::NamedTempFile;

#[test]
fn test_empty_file_uses_defaults() {
    let config = GameConfig::from_toml("").expect("Parse failed");
    assert_eq!(config, GameConfig::default());
    assert_eq!(*config.difficulty(), Difficulty::Normal);
    assert_eq!(config.db_path(), "noughts.db");
    assert_eq!(*config.thinking_delay_ms(), 500);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_all_fields() {
    let config = GameConfig::from_toml(
        r#"
        difficulty = "hard"
        db_path = "/tmp/scores.db"
        thinking_delay_ms = 0
        seed = 42
        "#,
    )
    .expect("Parse failed");

    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(config.db_path(), "/tmp/scores.db");
    assert_eq!(*config.thinking_delay_ms(), 0);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_unknown_tier_is_an_error() {
    let err = GameConfig::from_toml(r#"difficulty = "impossible""#).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "difficulty = \"easy\"").expect("Write failed");

    let config = GameConfig::from_file(file.path()).expect("Load failed");
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(config.db_path(), "noughts.db");
}

#[test]
fn test_missing_file_is_an_error() {
    let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_setters_override() {
    let config = GameConfig::default()
        .with_difficulty(Difficulty::Hard)
        .with_db_path("other.db")
        .with_seed(Some(3));
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(config.db_path(), "other.db");
    assert_eq!(*config.seed(), Some(3));
}
