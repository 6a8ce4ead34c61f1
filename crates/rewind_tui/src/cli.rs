//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind_tictactoe::Position;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (defaults to ./rewind.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show "Draw" when the board fills with no winner
    #[arg(long, global = true)]
    pub report_draws: bool,

    /// Hide cell numbers in empty squares
    #[arg(long, global = true)]
    pub no_hints: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Cells to play, comma-separated: indices 0-8 in row-major order or
        /// labels such as `center` and `top-left`
        #[arg(long, value_delimiter = ',', num_args = 0.., value_parser = parse_cell)]
        moves: Vec<usize>,

        /// History step to display after applying the moves
        #[arg(long)]
        step: Option<usize>,

        /// Print the game as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Parses a cell as an index or a position label.
///
/// Indices are passed through unchecked so the game reports out-of-range
/// cells itself.
fn parse_cell(s: &str) -> Result<usize, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("unknown cell '{}': use 0-8 or a label like 'center'", s))
}
