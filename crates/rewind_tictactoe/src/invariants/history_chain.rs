//! History chain invariant: each snapshot adds exactly one mark to the last.

use super::super::rules::check_winner;
use super::super::{Board, GameState, Mark, Square};
use super::Invariant;

/// Invariant: history starts empty and grows one alternating mark at a time.
///
/// Entry 0 is the empty board. Entry `i` equals entry `i - 1` except for a
/// single square that went from empty to the mark of the player who moves
/// at step `i - 1`. No entry follows a board that already has a winner.
pub struct HistoryChainInvariant;

fn is_successor(before: &Board, after: &Board, mark: Mark) -> bool {
    let mut changed = before
        .squares()
        .iter()
        .zip(after.squares())
        .filter(|(a, b)| a != b);

    match (changed.next(), changed.next()) {
        (Some((&Square::Empty, &Square::Occupied(placed))), None) => placed == mark,
        _ => false,
    }
}

impl Invariant<GameState> for HistoryChainInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        match history.first() {
            Some(first) if *first.board() == Board::new() => {}
            _ => return false,
        }

        history.windows(2).enumerate().all(|(step, pair)| {
            check_winner(pair[0].board()).is_none()
                && is_successor(pair[0].board(), pair[1].board(), Mark::to_move_at(step))
        })
    }

    fn description() -> &'static str {
        "History grows from the empty board one alternating mark at a time and stops at a win"
    }
}
