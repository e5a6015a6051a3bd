//! Round controller - the state machine driving a game session.
//!
//! One controller serves one session at one difficulty tier. It owns the
//! current [`RoundState`], the in-memory [`ScoreLedger`] and the memory of
//! which side starts the next round. The driver (a UI) submits player
//! moves, calls [`RoundController::trigger_opponent_move`] when it is done
//! showing the opponent "thinking", and starts new rounds.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract, MoveRequest, RoundActive, SidesTurn};
use super::ledger::{ScoreLedger, ScoreStore};
use super::phases::{Outcome, RoundPhase};
use super::round::RoundState;
use super::rules::Evaluation;
use super::strategy::{Difficulty, OpponentStrategy};
use super::{Board, Side};
use tracing::{debug, info, instrument, warn};

/// Drives rounds against one opponent strategy and keeps the score.
#[derive(Debug)]
pub struct RoundController {
    strategy: Box<dyn OpponentStrategy>,
    store: Box<dyn ScoreStore>,
    round: RoundState,
    ledger: ScoreLedger,
    next_starter: Side,
}

impl RoundController {
    /// Creates a controller and starts the first round with the player to move.
    ///
    /// The ledger is loaded from `store`; an unreachable store is logged and
    /// treated as zeroed counters.
    #[instrument(skip(strategy, store), fields(difficulty = %strategy.difficulty()))]
    pub fn new(strategy: Box<dyn OpponentStrategy>, store: Box<dyn ScoreStore>) -> Self {
        let ledger = match store.load_scores() {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!(error = %e, "Failed to load scores, starting from zero");
                ScoreLedger::default()
            }
        };
        info!(%ledger, "Round controller ready");

        Self {
            strategy,
            store,
            round: RoundState::new(Side::Player),
            ledger,
            next_starter: Side::Player,
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    /// Current round.
    pub fn state(&self) -> &RoundState {
        &self.round
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Score counters, including the current session.
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    /// Side that will start the next round.
    pub fn next_starter(&self) -> Side {
        self.next_starter
    }

    /// Tier of the configured opponent.
    pub fn difficulty(&self) -> Difficulty {
        self.strategy.difficulty()
    }

    /// Applies the player's move on `cell` (0-8).
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the round untouched when the round
    /// is over, the opponent is to move, or the cell is invalid or occupied.
    #[instrument(skip(self))]
    pub fn submit_player_move(&mut self, cell: usize) -> Result<RoundPhase, MoveError> {
        self.apply(MoveRequest {
            side: Side::Player,
            cell,
        })
    }

    /// Asks the opponent strategy for a move and applies it.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the round untouched unless the
    /// controller is in [`RoundPhase::AwaitingOpponentMove`].
    #[instrument(skip(self))]
    pub fn trigger_opponent_move(&mut self) -> Result<RoundPhase, MoveError> {
        RoundActive::check(&self.round)?;
        SidesTurn::check(Side::Opponent, &self.round)?;

        let pos = self
            .strategy
            .select_move(self.round.board(), Side::Opponent, Side::Player)
            .ok_or(MoveError::NoMoveAvailable)?;
        debug!(%pos, "Opponent selected move");

        self.apply(MoveRequest {
            side: Side::Opponent,
            cell: pos.to_index(),
        })
    }

    /// Clears the board and starts a new round.
    ///
    /// The starter comes from the previous round's outcome. An unfinished
    /// round is abandoned without touching the score.
    #[instrument(skip(self))]
    pub fn start_next_round(&mut self) -> RoundPhase {
        if !self.round.is_over() && !self.round.history().is_empty() {
            debug!(moves = self.round.history().len(), "Abandoning unfinished round");
        }
        self.round = RoundState::new(self.next_starter);
        info!(starter = %self.next_starter, "New round started");
        self.phase()
    }

    /// Zeroes and persists the score, then starts a new round.
    ///
    /// The side starting the new round is left as it was.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) -> RoundPhase {
        self.ledger.reset();
        self.persist();
        info!("Scores reset");
        self.start_next_round()
    }

    fn apply(&mut self, request: MoveRequest) -> Result<RoundPhase, MoveError> {
        let pos = MoveContract::pre(&self.round, &request)?;
        let evaluation = self.round.apply_move(Move::new(request.side, pos))?;
        debug_assert!(
            MoveContract::post(&self.round).is_ok(),
            "round invariants violated after {:?}",
            request
        );
        debug!(side = %request.side, %pos, ?evaluation, "Move applied");

        match evaluation {
            Evaluation::Winner(side) => self.finish_round(Outcome::Winner(side), request.side),
            Evaluation::Draw => self.finish_round(Outcome::Draw, request.side),
            Evaluation::InProgress => {}
        }
        Ok(self.phase())
    }

    /// Scores a finished round and decides who starts the next one.
    fn finish_round(&mut self, outcome: Outcome, last_mover: Side) {
        self.next_starter = if outcome.is_draw() {
            last_mover.other()
        } else {
            Side::Player
        };
        self.ledger.record(outcome);
        info!(%outcome, next_starter = %self.next_starter, ledger = %self.ledger, "Round over");
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save_scores(&self.ledger) {
            warn!(error = %e, "Failed to save scores");
        }
    }
}
