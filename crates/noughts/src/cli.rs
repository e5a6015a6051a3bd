//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::Difficulty;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a random, heuristic or unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with tiered opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rounds in the terminal UI
    Play {
        /// Opponent tier: easy, normal or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Path to the score database (created if it doesn't exist)
        #[arg(long)]
        db_path: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the opponent's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the opponent moves, in milliseconds
        #[arg(long)]
        thinking_delay_ms: Option<u64>,
    },

    /// Print the scoreboard
    Scores {
        /// Path to the score database
        #[arg(long)]
        db_path: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Zero all score counters
    ResetScores {
        /// Path to the score database
        #[arg(long)]
        db_path: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
