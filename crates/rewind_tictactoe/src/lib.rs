//! Rewind tic-tac-toe - game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] records every board and the step on display
//! - **Rules**: [`check_winner`] scans the eight fixed lines
//! - **Contracts**: pre/postconditions checked around each transition
//! - **Invariants**: properties of a [`GameState`] that every transition keeps
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Mark, Status};
//!
//! # fn example() -> Result<(), rewind_tictactoe::GameError> {
//! let game = GameState::replay(&[0, 4, 1, 3, 2])?;
//! assert_eq!(game.status(), Status::WinnerDeclared(Mark::X));
//!
//! // Go back to the start and play a different first move.
//! let game = game.jump_to(0)?.apply_move(4)?;
//! assert_eq!(game.history().len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod history;
mod position;
mod state;
mod types;

pub mod invariants;
pub mod rules;

pub use contracts::{
    CellInRange, Contract, JumpContract, LegalMove, MoveContract, NoWinnerYet, SquareIsEmpty,
};
pub use error::GameError;
pub use history::{HistoryEntry, MoveEntry};
pub use invariants::{
    GameInvariants, HistoryChainInvariant, Invariant, InvariantSet, InvariantViolation,
    StepInRangeInvariant, TurnParityInvariant,
};
pub use position::Position;
pub use rules::{check_winner, is_full};
pub use state::{GameState, Status};
pub use types::{Board, Mark, Square};
