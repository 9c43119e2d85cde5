//! Player configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "minimax-tictactoe.toml";

/// Settings for interactive play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Side the human plays.
    #[serde(default = "default_human")]
    human: Mark,

    /// Show the engine's evaluation before each human move.
    #[serde(default)]
    show_analysis: bool,

    /// Print board notation under each rendered board.
    #[serde(default)]
    notation: bool,
}

fn default_human() -> Mark {
    Mark::X
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            show_analysis: false,
            notation: false,
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the explicit config file, or the default one if it exists, or built-in defaults.
    #[instrument(skip(explicit))]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Returns a copy with command-line overrides applied.
    pub fn with_overrides(mut self, human: Option<Mark>, show_analysis: bool) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        self.show_analysis |= show_analysis;
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_missing() {
        let config = PlayConfig::from_toml("").unwrap();
        assert_eq!(config, PlayConfig::default());
        assert_eq!(*config.human(), Mark::X);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = PlayConfig::from_toml(
            r#"
            human = "O"
            show_analysis = true
            notation = true
            "#,
        )
        .unwrap();
        assert_eq!(*config.human(), Mark::O);
        assert!(*config.show_analysis());
        assert!(*config.notation());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = PlayConfig::from_toml("human = \"Z\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = PlayConfig::load(Some(Path::new("definitely/not/here.toml"))).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let config = PlayConfig::default().with_overrides(Some(Mark::O), true);
        assert_eq!(*config.human(), Mark::O);
        assert!(*config.show_analysis());

        let config = config.with_overrides(None, false);
        assert_eq!(*config.human(), Mark::O);
        assert!(*config.show_analysis());
    }
}
