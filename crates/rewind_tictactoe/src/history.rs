//! History snapshots and their move-list labels.

use super::Board;
use serde::{Deserialize, Serialize};

/// One recorded board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
}

impl HistoryEntry {
    /// Wraps a board snapshot.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Returns the recorded board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// A labelled row of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    step: usize,
    current: bool,
}

impl MoveEntry {
    pub(crate) fn new(step: usize, current: bool) -> Self {
        Self { step, current }
    }

    /// History index this row jumps to.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether this row is the step on display.
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// "Game start" for step 0, "Move #N" otherwise.
    pub fn label(&self) -> String {
        match self.step {
            0 => "Game start".to_string(),
            n => format!("Move #{}", n),
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
