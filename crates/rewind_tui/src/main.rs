//! Rewind - tic-tac-toe with time travel.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod tui;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::Settings;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.report_draws {
        settings = settings.with_report_draws(true);
    }
    if cli.no_hints {
        settings = settings.with_show_hints(false);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_tracing(settings.log_file())?;
            info!(?settings, "Config loaded");
            tui::run(settings)
        }
        Command::Replay { moves, step, json } => {
            init_stderr_tracing();
            info!(?settings, "Config loaded");
            let output = replay::run(&settings, &moves, step, json)?;
            println!("{}", output);
            Ok(())
        }
    }
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr so stdout carries only the replay output.
fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
