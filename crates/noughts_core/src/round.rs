//! State of a single round.

use super::action::{Move, MoveError};
use super::phases::{Outcome, RoundPhase};
use super::rules::{Evaluation, evaluate};
use super::{Board, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended in a win.
    Won(Side),
    /// Round ended in a draw.
    Draw,
}

/// Complete round state.
///
/// Created at round start, mutated only by applying a move, replaced when
/// the next round begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// The board.
    board: Board,
    /// Side to move.
    turn_owner: Side,
    /// Round status.
    status: RoundStatus,
    /// Moves played this round.
    history: Vec<Move>,
    /// Side that moved first this round.
    starter: Side,
}

impl RoundState {
    /// Creates a fresh round with `starter` to move.
    pub fn new(starter: Side) -> Self {
        Self {
            board: Board::new(),
            turn_owner: starter,
            status: RoundStatus::InProgress,
            history: Vec::new(),
            starter,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn_owner(&self) -> Side {
        self.turn_owner
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the moves played this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the side that moved first.
    pub fn starter(&self) -> Side {
        self.starter
    }

    /// Returns true once the round has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    /// Returns the phase of the state machine this round is in.
    pub fn phase(&self) -> RoundPhase {
        match self.status {
            RoundStatus::InProgress => RoundPhase::awaiting(self.turn_owner),
            RoundStatus::Won(side) => RoundPhase::RoundOver(Outcome::Winner(side)),
            RoundStatus::Draw => RoundPhase::RoundOver(Outcome::Draw),
        }
    }

    /// Applies a validated move and updates status and turn.
    ///
    /// Callers check [`LegalMove`](crate::contracts::LegalMove) first; the
    /// board still refuses an occupied cell.
    #[instrument(skip(self))]
    pub(crate) fn apply_move(&mut self, action: Move) -> Result<Evaluation, MoveError> {
        self.board.place(action.position.to_index(), action.side)?;
        self.history.push(action);

        let evaluation = evaluate(&self.board);
        match evaluation {
            Evaluation::Winner(side) => self.status = RoundStatus::Won(side),
            Evaluation::Draw => self.status = RoundStatus::Draw,
            Evaluation::InProgress => self.turn_owner = action.side.other(),
        }
        Ok(evaluation)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
