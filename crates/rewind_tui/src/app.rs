//! Application state and logic.

use crate::config::Settings;
use crate::input::{Action, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, Position};
use tracing::{debug, instrument};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

/// Main application state.
///
/// Holds the single `GameState` and replaces it with the result of each
/// transition.
#[derive(Debug)]
pub struct App {
    game: GameState,
    settings: Settings,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(settings: Settings) -> Self {
        Self {
            game: GameState::new(),
            settings,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the highlighted move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line: winner or next player, then any rejection message.
    pub fn status_line(&self) -> String {
        let status = if *self.settings.report_draws() && self.game.is_draw() {
            "Draw".to_string()
        } else {
            self.game.status().to_string()
        };

        match &self.message {
            Some(message) => format!("{} | {}", status, message),
            None => status,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(step = self.game.step_number()))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = Action::from_key(key) else {
            return;
        };
        debug!(?action, "Handling action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Restart => self.restart(),
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
                self.selected = self.game.step_number();
            }
            Action::Arrow(key) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::Moves => self.move_selection(key),
            },
            Action::Activate => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::Moves => self.jump(self.selected),
            },
            Action::PlayCell(index) => self.play(index),
            Action::StepBack => {
                if let Some(step) = self.game.step_number().checked_sub(1) {
                    self.jump(step);
                }
            }
            Action::StepForward => {
                let step = self.game.step_number() + 1;
                if step < self.game.history().len() {
                    self.jump(step);
                }
            }
            Action::JumpStart => self.jump(0),
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }

    /// Plays a cell; illegal clicks leave the game unchanged.
    fn play(&mut self, index: usize) {
        self.message = self
            .game
            .check_move(index)
            .err()
            .map(|e| format!("Invalid move: {}", e));

        self.game = std::mem::take(&mut self.game).handle_click(index);
        self.selected = self.game.step_number();
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(game) => {
                self.game = game;
                self.selected = step;
                self.message = None;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameState::new();
        self.selected = 0;
        self.focus = Focus::Board;
        self.message = None;
    }
}
