//! Noughts - terminal tic-tac-toe with tiered opponents and persistent scores.
//!
//! The round logic lives in [`noughts_core`]; this crate adds the
//! configuration file, the SQLite score store, the command line and the
//! terminal UI.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod db;
mod tui;

// Crate-level exports
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use db::{DbError, NewScoreEntry, ScoreEntry, ScoreKey, ScoreRepository};
pub use tui::{App, Control, run_tui};
