//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, GameConfig, ScoreRepository, run_tui};
use noughts_core::{MemoryScoreStore, RoundController, ScoreStore};
use std::path::PathBuf;
use tokio::time::Duration;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "noughts.log";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            difficulty,
            db_path,
            config,
            seed,
            thinking_delay_ms,
        } => {
            init_file_tracing()?;
            let mut config = load_config(config, db_path)?;
            if let Some(difficulty) = difficulty {
                config = config.with_difficulty(difficulty);
            }
            if seed.is_some() {
                config = config.with_seed(seed);
            }
            if let Some(ms) = thinking_delay_ms {
                config = config.with_thinking_delay_ms(ms);
            }
            play(config).await
        }
        Command::Scores { db_path, config } => {
            init_stderr_tracing();
            show_scores(&load_config(config, db_path)?)
        }
        Command::ResetScores { db_path, config } => {
            init_stderr_tracing();
            reset_scores(&load_config(config, db_path)?)
        }
    }
}

/// Logs to a file so the terminal UI keeps the screen.
fn init_file_tracing() -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)
        .with_context(|| format!("Failed to create log file '{}'", LOG_FILE))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<PathBuf>, db_path: Option<String>) -> Result<GameConfig> {
    let config = GameConfig::resolve(path.as_deref())?;
    Ok(match db_path {
        Some(db_path) => config.with_db_path(db_path),
        None => config,
    })
}

#[instrument(skip(config), fields(difficulty = %config.difficulty(), db_path = %config.db_path()))]
async fn play(config: GameConfig) -> Result<()> {
    let store: Box<dyn ScoreStore> = match ScoreRepository::open(config.db_path()) {
        Ok(repo) => Box::new(repo),
        Err(e) => {
            warn!(error = %e, "Score database unavailable, scores will not be kept");
            Box::new(MemoryScoreStore::new())
        }
    };

    let controller = RoundController::new(config.difficulty().strategy(*config.seed()), store);
    info!("Session starting");
    run_tui(controller, Duration::from_millis(*config.thinking_delay_ms())).await
}

fn show_scores(config: &GameConfig) -> Result<()> {
    let repo = ScoreRepository::open(config.db_path())?;
    let ledger = repo.load()?;

    println!("Scoreboard ({})", repo.db_path());
    println!("  You       {:>5}", ledger.player_wins());
    println!("  Opponent  {:>5}", ledger.opponent_wins());
    println!("  Draws     {:>5}", ledger.draws());
    println!("  Total     {:>5}", ledger.total());
    Ok(())
}

fn reset_scores(config: &GameConfig) -> Result<()> {
    let repo = ScoreRepository::open(config.db_path())?;
    repo.save(&Default::default())?;
    info!(db_path = %repo.db_path(), "Scores reset");
    println!("Scores reset.");
    Ok(())
}
