//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and serve as documentation of the
//! guarantees `GameState` makes to the presentation layer.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        collect(violations)
    }
}

pub mod history_chain;
pub mod step_in_range;
pub mod turn_parity;

pub use history_chain::HistoryChainInvariant;
pub use step_in_range::StepInRangeInvariant;
pub use turn_parity::TurnParityInvariant;

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    StepInRangeInvariant,
    HistoryChainInvariant,
    TurnParityInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameState, HistoryEntry, Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_rewind() {
        let game = GameState::replay(&[0, 4, 1, 3])
            .and_then(|g| g.jump_to(1))
            .expect("valid sequence");
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // Entry 1 places O first and skips a turn: breaks chain and parity.
        let forged = GameState::from_parts(
            vec![
                HistoryEntry::new(Board::new()),
                HistoryEntry::new(Board::new().with(Position::Center, Mark::O)),
            ],
            1,
        );

        let violations = GameInvariants::check_all(&forged).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
