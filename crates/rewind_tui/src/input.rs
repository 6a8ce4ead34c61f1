//! Key bindings.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Start a fresh game.
    Restart,
    /// Switch focus between board and move list.
    ToggleFocus,
    /// Arrow key; meaning depends on focus.
    Arrow(KeyCode),
    /// Play the focused cell or jump to the selected move.
    Activate,
    /// Play a cell directly (0-8).
    PlayCell(usize),
    /// Show the previous step.
    StepBack,
    /// Show the next recorded step.
    StepForward,
    /// Show the empty board.
    JumpStart,
}

impl Action {
    /// Maps a key code to an action.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Restart),
            KeyCode::Tab => Some(Action::ToggleFocus),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Arrow(key)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|digit| Action::PlayCell(digit as usize - 1)),
            KeyCode::Char('[') | KeyCode::PageUp => Some(Action::StepBack),
            KeyCode::Char(']') | KeyCode::PageDown => Some(Action::StepForward),
            KeyCode::Home => Some(Action::JumpStart),
            _ => None,
        }
    }
}

/// Moves the board cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}
