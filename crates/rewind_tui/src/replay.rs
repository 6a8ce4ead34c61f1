//! Headless replay: apply moves and print the resulting game.

use crate::config::Settings;
use anyhow::{Context, Result};
use rewind_tictactoe::{GameState, Status};
use serde::Serialize;
use tracing::{info, instrument};

/// JSON shape printed by `rewind replay --json`.
#[derive(Debug, Serialize)]
struct ReplayReport<'a> {
    status: Status,
    draw: bool,
    game: &'a GameState,
}

/// Plays `moves` from a new game, optionally jumps to `step`, and renders
/// the result as text or JSON.
#[instrument(skip(settings))]
pub fn run(settings: &Settings, moves: &[usize], step: Option<usize>, json: bool) -> Result<String> {
    let mut game = GameState::new();
    for (number, &index) in moves.iter().enumerate() {
        game = game
            .apply_move(index)
            .with_context(|| format!("Move {} (cell {}) was rejected", number + 1, index))?;
    }

    if let Some(step) = step {
        game = game.jump_to(step).context("Cannot display requested step")?;
    }
    info!(step = game.step_number(), "Replay finished");

    if json {
        let report = ReplayReport {
            status: game.status(),
            draw: game.is_draw(),
            game: &game,
        };
        return serde_json::to_string_pretty(&report).context("Failed to serialize game");
    }

    Ok(render_text(settings, &game))
}

fn render_text(settings: &Settings, game: &GameState) -> String {
    let status = if *settings.report_draws() && game.is_draw() {
        "Draw".to_string()
    } else {
        game.status().to_string()
    };

    let mut out = format!("{}\n\n{}\n", game.current_board().display(), status);
    for entry in game.moves() {
        let marker = if entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step(), entry.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let out = run(&Settings::default(), &[0, 4, 1, 3, 2], None, false).unwrap();
        assert!(out.starts_with("X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nWinner: X\n"));
        assert!(out.contains("  0. Game start\n"));
        assert!(out.ends_with("> 5. Move #5\n"));
    }

    #[test]
    fn test_step_selects_snapshot() {
        let out = run(&Settings::default(), &[0, 4, 1], Some(1), false).unwrap();
        assert!(out.starts_with("X|2|3"));
        assert!(out.contains("Next player: O"));
        assert!(out.contains("> 1. Move #1\n"));
        assert!(out.contains("  3. Move #3\n"));
    }

    #[test]
    fn test_rejected_move_names_position() {
        let err = run(&Settings::default(), &[4, 4], None, false).unwrap_err();
        assert_eq!(err.to_string(), "Move 2 (cell 4) was rejected");
    }

    #[test]
    fn test_draw_reported_when_enabled() {
        let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        let settings = Settings::default().with_report_draws(true);
        assert!(run(&settings, &moves, None, false).unwrap().contains("\nDraw\n"));
        assert!(
            run(&Settings::default(), &moves, None, false)
                .unwrap()
                .contains("Next player: O")
        );
    }

    #[test]
    fn test_json_output() {
        let out = run(&Settings::default(), &[4], None, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["status"]["NextPlayer"], "O");
        assert_eq!(value["draw"], false);
        assert_eq!(value["game"]["step_number"], 1);
    }
}
