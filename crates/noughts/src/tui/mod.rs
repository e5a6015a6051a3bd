//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

pub use app::{App, Control};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::RoundController;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs rounds in the terminal until the user quits.
///
/// `thinking_delay` is the pause shown before each opponent move.
#[instrument(skip(controller), fields(difficulty = %controller.difficulty()))]
pub async fn run_tui(controller: RoundController, thinking_delay: Duration) -> Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(controller);
    let res = run_app(&mut terminal, &mut app, thinking_delay).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(ledger = %app.controller().ledger(), "Leaving TUI");
    res
}

async fn run_app(terminal: &mut Term, app: &mut App, thinking_delay: Duration) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if app.opponent_to_move() {
            sleep(thinking_delay).await;
            app.opponent_turn();
            continue;
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}
