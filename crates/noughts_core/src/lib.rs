//! Noughts core - tic-tac-toe round logic shared by every difficulty tier.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid and its named positions
//! - **Rules**: pure win/draw evaluation over the 8 fixed lines
//! - **Strategies**: random, heuristic and minimax opponents behind one trait
//! - **Controller**: the round state machine, starting-side handoff and scores
//!
//! # Example
//!
//! ```
//! use noughts_core::{Difficulty, MemoryScoreStore, RoundController, RoundPhase};
//!
//! let store = MemoryScoreStore::new();
//! let mut controller =
//!     RoundController::new(Difficulty::Hard.strategy(None), Box::new(store));
//!
//! assert_eq!(controller.phase(), RoundPhase::AwaitingPlayerMove);
//! controller.submit_player_move(4).expect("center is free");
//! controller.trigger_opponent_move().expect("opponent replies");
//! assert_eq!(controller.phase(), RoundPhase::AwaitingPlayerMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod controller;
mod invariants;
mod ledger;
mod phases;
mod position;
mod round;
mod types;

pub mod rules;
pub mod strategy;

// Crate-level exports - Board and domain types
pub use position::Position;
pub use types::{Board, Cell, Side};

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError};

// Crate-level exports - Round lifecycle
pub use controller::RoundController;
pub use phases::{Outcome, RoundPhase};
pub use round::{RoundState, RoundStatus};

// Crate-level exports - Rules
pub use rules::{Evaluation, LINES, check_winner, evaluate, is_full};

// Crate-level exports - Strategies
pub use strategy::{Difficulty, HeuristicStrategy, OpponentStrategy, OptimalStrategy, RandomStrategy};

// Crate-level exports - Scores
pub use ledger::{MemoryScoreStore, ScoreLedger, ScoreStore, StoreError};
