//! Game state with move history and time travel.
//!
//! `GameState` is a value: every transition borrows the current state and
//! returns the next one.

use super::contracts::{Contract, JumpContract, MoveContract, invariants_hold};
use super::error::GameError;
use super::history::{HistoryEntry, MoveEntry};
use super::rules::{check_winner, is_full};
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What the status line shows for the displayed step.
///
/// A full board with no winner still reports the next player; see
/// [`GameState::is_draw`] for callers that want to show draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The displayed board has a completed line.
    WinnerDeclared(Mark),
    /// Nobody has won; this mark moves next.
    NextPlayer(Mark),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::WinnerDeclared(mark) => write!(f, "Winner: {}", mark),
            Status::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// Complete game state: every recorded board plus the step on display.
///
/// Invariants:
/// - history is never empty and entry 0 is the empty board
/// - `step_number < history.len()`
/// - X moves when `step_number` is even, so the turn is derived, not stored
///
/// Deserialization rejects input that breaks any of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<HistoryEntry>,
    step_number: usize,
}

#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    step_number: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self, GameError> {
        let game = GameState {
            history: raw.history,
            step_number: raw.step_number,
        };
        invariants_hold(&game)?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game holding the single empty-board entry.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::new(Board::new())],
            step_number: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<HistoryEntry>, step_number: usize) -> Self {
        Self {
            history,
            step_number,
        }
    }

    /// Returns every recorded snapshot, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the index of the snapshot on display.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns true when X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// Returns the mark placed by the next move.
    pub fn next_mark(&self) -> Mark {
        Mark::to_move_at(self.step_number)
    }

    /// Returns the board the presentation layer must display.
    pub fn current_board(&self) -> &Board {
        self.history[self.step_number].board()
    }

    /// Returns the winner on the displayed board, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self.current_board())
    }

    /// Returns the status for the displayed board.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::WinnerDeclared(mark),
            None => Status::NextPlayer(self.next_mark()),
        }
    }

    /// Returns true when the displayed board is full and nobody has won.
    ///
    /// [`GameState::status`] never reports this on its own.
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && is_full(self.current_board())
    }

    /// Returns one labelled row per history entry for building a move list.
    pub fn moves(&self) -> impl Iterator<Item = MoveEntry> + '_ {
        (0..self.history.len()).map(|step| MoveEntry::new(step, step == self.step_number))
    }

    /// Returns the empty positions on the displayed board.
    ///
    /// Empty once the board has a winner.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }

    /// Checks whether a move at `index` would be applied.
    ///
    /// Errors are reported in order: out of range, game already won, square
    /// occupied.
    pub fn check_move(&self, index: usize) -> Result<Position, GameError> {
        MoveContract::pre(self, &index)
    }

    /// Returns true when a move at `index` would be applied.
    pub fn is_legal_move(&self, index: usize) -> bool {
        self.check_move(index).is_ok()
    }

    /// Plays the next mark at `index` (0-8, row-major).
    ///
    /// Entries after the displayed step are discarded before the new board
    /// is appended, so a move made after rewinding overwrites the old future.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition from [`GameState::check_move`].
    /// In debug builds a broken postcondition surfaces as
    /// [`GameError::InvariantViolation`].
    #[instrument(skip(self), fields(step = self.step_number, mark = ?self.next_mark()))]
    pub fn apply_move(&self, index: usize) -> Result<GameState, GameError> {
        let pos = MoveContract::pre(self, &index)?;

        let mark = self.next_mark();
        let board = self.current_board().with(pos, mark);

        let mut history = self.history[..=self.step_number].to_vec();
        history.push(HistoryEntry::new(board));
        let next = GameState {
            step_number: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(position = %pos, step = next.step_number, "Move applied");
        Ok(next)
    }

    /// Plays the next mark at a typed position.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::apply_move`], minus the range check.
    pub fn place(&self, pos: Position) -> Result<GameState, GameError> {
        self.apply_move(pos.to_index())
    }

    /// Applies a click on cell `index`, ignoring clicks that are not legal.
    ///
    /// Rejected clicks return the state unchanged.
    #[instrument(skip(self))]
    pub fn handle_click(self, index: usize) -> GameState {
        match self.apply_move(index) {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, "Ignoring click");
                self
            }
        }
    }

    /// Displays a recorded step without touching history.
    ///
    /// Jumping is allowed to any recorded step, decided or not.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] when `step` was never recorded.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, GameError> {
        let step = JumpContract::pre(self, &step)?;

        let next = GameState {
            history: self.history.clone(),
            step_number: step,
        };

        #[cfg(debug_assertions)]
        JumpContract::post(self, &next)?;

        Ok(next)
    }

    /// Plays the given cell indices in order from a new game.
    ///
    /// # Errors
    ///
    /// Returns the error of the first move that is rejected.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<GameState, GameError> {
        indices
            .iter()
            .try_fold(GameState::new(), |game, &index| game.apply_move(index))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
