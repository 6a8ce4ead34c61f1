//! Stateless UI rendering.

mod board;
mod moves;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "1-9/Enter play  Tab focus  [ ] step  Home start  r restart  q quit";

/// Draws the whole screen for the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(11),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(24)])
        .split(chunks[1]);

    board::draw_board(frame, body[0], app);
    moves::draw_moves(frame, body[1], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_new_game_screen() {
        let screen = render(&App::new(Settings::default()));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Game start"));
        assert!(!screen.contains("Move #1"));
    }

    #[test]
    fn test_moves_listed_after_play() {
        let mut app = App::new(Settings::default());
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('1'));

        let screen = render(&app);
        assert!(screen.contains("Move #1"));
        assert!(screen.contains("Move #2"));
        assert!(screen.contains(" X "));
        assert!(screen.contains(" O "));
    }

    #[test]
    fn test_hints_follow_settings() {
        let screen = render(&App::new(Settings::default()));
        assert!(screen.contains(" 7 "));

        let screen = render(&App::new(Settings::default().with_show_hints(false)));
        assert!(!screen.contains(" 7 "));
    }
}
