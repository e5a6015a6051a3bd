//! Application state and key handling.

use crossterm::event::KeyCode;
use noughts_core::{MoveError, Position, RoundController, RoundPhase};
use tracing::{debug, info, instrument, warn};

use super::input::{digit_cell, move_cursor};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: RoundController,
    cursor: Position,
    notice: Option<String>,
    opponent_stalled: bool,
}

impl App {
    /// Wraps a controller; the cursor starts on the center cell.
    pub fn new(controller: RoundController) -> Self {
        Self {
            controller,
            cursor: Position::Center,
            notice: None,
            opponent_stalled: false,
        }
    }

    /// The round controller.
    pub fn controller(&self) -> &RoundController {
        &self.controller
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line for the current phase.
    pub fn status(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        match self.controller.phase() {
            RoundPhase::AwaitingPlayerMove => {
                "Your move (X): arrows + Enter, or 1-9".to_string()
            }
            RoundPhase::AwaitingOpponentMove => "Opponent is thinking...".to_string(),
            RoundPhase::RoundOver(outcome) => format!("{outcome}! Press n for the next round"),
        }
    }

    /// True while the opponent owes a move it has not failed to make.
    pub fn opponent_to_move(&self) -> bool {
        !self.opponent_stalled && self.controller.phase() == RoundPhase::AwaitingOpponentMove
    }

    /// Lets the opponent play its move.
    ///
    /// A failed move is not retried until the round is restarted or the
    /// scores are reset, so the loop keeps reading keys.
    #[instrument(skip(self))]
    pub fn opponent_turn(&mut self) {
        match self.controller.trigger_opponent_move() {
            Ok(phase) => debug!(?phase, "Opponent moved"),
            Err(e) => {
                self.opponent_stalled = true;
                self.reject(e);
            }
        }
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        let round_over = matches!(self.controller.phase(), RoundPhase::RoundOver(_));

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Char('n') | KeyCode::Enter if round_over => self.next_round(),
            KeyCode::Char('r') => {
                info!("Restarting round");
                self.next_round();
            }
            KeyCode::Char('s') => {
                self.notice = None;
                self.opponent_stalled = false;
                self.controller.reset_scores();
                info!("Scores reset from the UI");
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            KeyCode::Char(c) => {
                if let Some(cell) = digit_cell(c) {
                    self.play(cell);
                }
            }
            _ => {}
        }
        Control::Continue
    }

    fn next_round(&mut self) {
        self.notice = None;
        self.opponent_stalled = false;
        self.controller.start_next_round();
    }

    fn play(&mut self, cell: usize) {
        match self.controller.submit_player_move(cell) {
            Ok(phase) => {
                self.notice = None;
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                debug!(?phase, cell, "Player moved");
            }
            Err(e) => self.reject(e),
        }
    }

    fn reject(&mut self, e: MoveError) {
        warn!(error = %e, "Move rejected");
        self.notice = Some(e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Board, Cell, Difficulty, MemoryScoreStore, OpponentStrategy, Side};

    fn app(tier: Difficulty) -> App {
        App::new(RoundController::new(
            tier.strategy(Some(1)),
            Box::new(MemoryScoreStore::new()),
        ))
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = app(Difficulty::Easy);
        assert_eq!(app.handle_key(KeyCode::Char('5')), Control::Continue);
        assert_eq!(app.controller().board().get(Position::Center), Cell::Occupied(Side::Player));
        assert!(app.opponent_to_move());
        assert_eq!(app.status(), "Opponent is thinking...");
    }

    #[test]
    fn test_cursor_then_enter_plays() {
        let mut app = app(Difficulty::Easy);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.controller().board().get(Position::TopLeft), Cell::Occupied(Side::Player));
    }

    #[test]
    fn test_input_ignored_while_opponent_pending() {
        let mut app = app(Difficulty::Easy);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('2'));
        assert_eq!(app.controller().board().occupied_count(), 1);
        assert!(app.status().contains("turn"));
    }

    #[test]
    fn test_opponent_turn_hands_back_to_player() {
        let mut app = app(Difficulty::Hard);
        app.handle_key(KeyCode::Char('1'));
        app.opponent_turn();
        assert_eq!(app.controller().board().get(Position::Center), Cell::Occupied(Side::Opponent));
        assert!(!app.opponent_to_move());
    }

    #[test]
    fn test_restart_clears_board() {
        let mut app = app(Difficulty::Easy);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.controller().board().occupied_count(), 0);
        assert_eq!(app.controller().phase(), RoundPhase::AwaitingPlayerMove);
    }

    /// Opponent that never finds a move.
    #[derive(Debug)]
    struct Stuck;

    impl OpponentStrategy for Stuck {
        fn select_move(&mut self, _: &Board, _: Side, _: Side) -> Option<Position> {
            None
        }

        fn difficulty(&self) -> Difficulty {
            Difficulty::Easy
        }
    }

    #[test]
    fn test_failed_opponent_move_returns_control_to_keys() {
        let mut app = App::new(RoundController::new(
            Box::new(Stuck),
            Box::new(MemoryScoreStore::new()),
        ));
        app.handle_key(KeyCode::Char('5'));
        assert!(app.opponent_to_move());

        app.opponent_turn();
        assert!(!app.opponent_to_move());
        assert_eq!(app.status(), MoveError::NoMoveAvailable.to_string());
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.controller().phase(), RoundPhase::AwaitingPlayerMove);
        app.handle_key(KeyCode::Char('1'));
        assert!(app.opponent_to_move());
    }

    #[test]
    fn test_quit() {
        let mut app = app(Difficulty::Normal);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    }

    #[test]
    fn test_full_round_then_next() {
        let mut app = app(Difficulty::Hard);
        while !matches!(app.controller().phase(), RoundPhase::RoundOver(_)) {
            if app.opponent_to_move() {
                app.opponent_turn();
            } else {
                let cell = app.controller().board().empty_cells()[0].to_index();
                app.handle_key(KeyCode::Char(char::from(b'1' + cell as u8)));
            }
        }
        assert_eq!(app.controller().ledger().total(), 1);
        assert!(app.status().contains("next round"));

        app.handle_key(KeyCode::Char('n'));
        assert!(!matches!(app.controller().phase(), RoundPhase::RoundOver(_)));
        assert_eq!(app.controller().board().occupied_count(), 0);
    }
}
