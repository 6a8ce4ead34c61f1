//! Step pointer invariant: the displayed step was recorded.

use super::super::GameState;
use super::Invariant;

/// Invariant: `step_number < history.len()` and history is non-empty.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.step_number() < game.history().len()
    }

    fn description() -> &'static str {
        "Step number points at a recorded history entry"
    }
}
