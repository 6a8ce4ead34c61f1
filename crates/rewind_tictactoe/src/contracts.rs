//! Contract-based validation for game transitions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style: {P} action {Q}.

use super::error::GameError;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::state::GameState;
use super::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Output of a successful precondition check.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

pub(crate) fn invariants_hold(after: &GameState) -> Result<(), GameError> {
    GameInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v: &InvariantViolation| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Postcondition failed");
        GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The cell index must be on the board.
pub struct CellInRange;

impl CellInRange {
    /// Resolves the index to a position.
    pub fn check(index: usize) -> Result<Position, GameError> {
        Position::from_index(index).ok_or(GameError::CellOutOfRange(index))
    }
}

/// Precondition: The displayed board must not have a winner yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Rejects moves on a decided board.
    pub fn check(game: &GameState) -> Result<(), GameError> {
        match game.winner() {
            Some(mark) => Err(GameError::GameOver(mark)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(pos: Position, game: &GameState) -> Result<(), GameError> {
        if game.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(GameError::CellOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the cell exists, the game is
/// not won, and the square is empty. Checked in that order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &GameState) -> Result<Position, GameError> {
        let pos = CellInRange::check(index)?;
        NoWinnerYet::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Cell is on the board
/// - No winner yet
/// - Square is empty
///
/// Postconditions:
/// - All game invariants hold
/// - Future entries were discarded and exactly one entry was appended
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Checked = Position;

    fn pre(game: &GameState, index: &usize) -> Result<Position, GameError> {
        LegalMove::check(*index, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        invariants_hold(after)?;

        let expected = before.step_number() + 2;
        if after.history().len() != expected {
            return Err(GameError::InvariantViolation(format!(
                "Postcondition failed: history has {} entries, expected {}",
                after.history().len(),
                expected
            )));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for time travel.
///
/// Precondition: the step was recorded.
/// Postconditions: all game invariants hold and history is untouched.
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    type Checked = usize;

    fn pre(game: &GameState, step: &usize) -> Result<usize, GameError> {
        let len = game.history().len();
        if *step < len {
            Ok(*step)
        } else {
            Err(GameError::StepOutOfRange { step: *step, len })
        }
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        invariants_hold(after)?;

        if before.history() != after.history() {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: jump modified history".to_string(),
            ));
        }
        Ok(())
    }
}
