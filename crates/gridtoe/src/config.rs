//! Board configuration loaded from TOML.

use crate::{Board, Mark};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a new round.
///
/// ```toml
/// side = 3
/// starting_mark = "X"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct BoardConfig {
    /// Cells per row and column.
    #[serde(default = "default_side")]
    side: usize,

    /// Mark that moves first.
    #[serde(default = "default_starting_mark")]
    starting_mark: Mark,
}

fn default_side() -> usize {
    3
}

fn default_starting_mark() -> Mark {
    Mark::X
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            starting_mark: default_starting_mark(),
        }
    }
}

impl BoardConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(side = config.side, starting_mark = %config.starting_mark, "Config loaded");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces the side length.
    pub fn with_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    /// Replaces the starting mark.
    pub fn with_starting_mark(mut self, mark: Mark) -> Self {
        self.starting_mark = mark;
        self
    }

    /// Rejects settings no board can be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side == 0 {
            return Err(ConfigError::new("side must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Builds a fresh board from these settings.
    #[instrument(skip(self), fields(side = self.side, starting_mark = %self.starting_mark))]
    pub fn build(&self) -> Result<Board, ConfigError> {
        self.validate()?;
        Board::new(self.side, self.starting_mark)
            .map_err(|e| ConfigError::new(format!("Failed to build board: {}", e)))
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
    /// Creates a new configuration error at the caller's location.
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

    #[test]
    fn test_defaults() {
        let config = BoardConfig::from_toml("").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(*config.side(), 3);
        assert_eq!(*config.starting_mark(), Mark::X);
    }

    #[test]
    fn test_parse() {
        let config = BoardConfig::from_toml("side = 4\nstarting_mark = \"O\"\n").unwrap();
        assert_eq!(config, BoardConfig::new(4, Mark::O));
    }

    #[test]
    fn test_zero_side_rejected() {
        let err = BoardConfig::from_toml("side = 0").unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_bad_mark_rejected() {
        let err = BoardConfig::from_toml("starting_mark = \"Z\"").unwrap_err();
        assert!(err.message.contains("Failed to parse"));
    }

    #[test]
    fn test_build() {
        let board = BoardConfig::default()
            .with_side(5)
            .with_starting_mark(Mark::O)
            .build()
            .unwrap();
        assert_eq!(board.side(), 5);
        assert_eq!(board.active_mark(), Mark::O);
    }

    #[test]
    fn test_oversized_side_fails_to_build() {
        let err = BoardConfig::new(usize::MAX / 2, Mark::X).build().unwrap_err();
        assert!(err.message.contains("too large"));
    }

    #[test]
    fn test_error_records_location() {
        let err = BoardConfig::default().with_side(0).build().unwrap_err();
        assert!(err.file.ends_with("config.rs"));
        assert!(err.line > 0);
    }
}
