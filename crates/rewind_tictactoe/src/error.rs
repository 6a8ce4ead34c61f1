//! Errors raised by game transitions.

use super::{Mark, Position};

/// Reason a transition was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The cell index is not on the board.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The current board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(#[error(not(source))] Mark),

    /// The requested history step was never recorded.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
