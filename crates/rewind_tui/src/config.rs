//! User settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "rewind.toml";

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Show "Draw" when the board fills with no winner.
    #[serde(default)]
    report_draws: bool,

    /// Show cell numbers in empty squares.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// Where the interactive UI writes its logs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_show_hints() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report_draws: false,
            show_hints: default_show_hints(),
            log_file: default_log_file(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_PATH`] if it exists.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => Ok(Self::default()),
        }
    }

    /// Overrides draw reporting.
    pub fn with_report_draws(mut self, report_draws: bool) -> Self {
        self.report_draws = report_draws;
        self
    }

    /// Overrides cell hints.
    pub fn with_show_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config("report_draws = true\n");
        let settings = Settings::from_file(file.path()).unwrap();

        assert!(*settings.report_draws());
        assert!(*settings.show_hints());
        assert_eq!(settings.log_file(), &PathBuf::from("rewind.log"));
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            "report_draws = false\nshow_hints = false\nlog_file = \"/tmp/game.log\"\n",
        );
        let settings = Settings::from_file(file.path()).unwrap();

        assert!(!*settings.show_hints());
        assert_eq!(settings.log_file(), &PathBuf::from("/tmp/game.log"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(result.unwrap_err().message.contains("Failed to read"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let file = write_config("report_draws = \"sometimes\"\n");
        let err = Settings::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse"));
    }
}
