//! Turn parity invariant: the mark counts agree with the step number.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: on the displayed board X has `ceil(step / 2)` marks and O has
/// `floor(step / 2)`, so the derived next mark matches the board.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(game: &GameState) -> bool {
        let step = game.step_number();
        let Some(entry) = game.history().get(step) else {
            return false;
        };
        let board = entry.board();

        board.count(Mark::X) == step.div_ceil(2) && board.count(Mark::O) == step / 2
    }

    fn description() -> &'static str {
        "Mark counts on the displayed board match the step parity"
    }
}
