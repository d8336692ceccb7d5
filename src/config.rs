//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{FirstMover, MatchSettings};
use tracing::{debug, info, instrument};

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Round wins needed to take a match.
    #[serde(default = "default_target_wins")]
    target_wins: u32,

    /// Who opens each round.
    #[serde(default)]
    first_mover: FirstMover,

    /// Seed for the computer's random fallback; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Clear the terminal before drawing the board.
    #[serde(default = "default_clear_screen")]
    clear_screen: bool,
}

fn default_target_wins() -> u32 {
    MatchSettings::DEFAULT_TARGET_WINS
}

fn default_clear_screen() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_wins: default_target_wins(),
            first_mover: FirstMover::default(),
            seed: None,
            clear_screen: default_clear_screen(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(target_wins = config.target_wins, first_mover = %config.first_mover, "Config loaded");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        target_wins: Option<u32>,
        first_mover: Option<FirstMover>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(target) = target_wins {
            self.target_wins = target;
        }
        if let Some(mover) = first_mover {
            self.first_mover = mover;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()
    }

    /// Disables screen clearing.
    pub fn without_clear_screen(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    /// Engine-side match rules.
    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings::default()
            .with_target_wins(self.target_wins)
            .with_first_mover(self.first_mover)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.target_wins == 0 {
            return Err(ConfigError::new("target_wins must be at least 1".to_string()));
        }
        Ok(self)
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
    #[instrument(skip(message))]
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
    fn test_empty_document_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.target_wins(), 3);
        assert!(*config.clear_screen());
    }

    #[test]
    fn test_parses_all_fields() {
        let config = GameConfig::from_toml(
            "target_wins = 5\nfirst_mover = \"alternate\"\nseed = 9\nclear_screen = false\n",
        )
        .unwrap();
        assert_eq!(*config.target_wins(), 5);
        assert_eq!(*config.first_mover(), FirstMover::Alternate);
        assert_eq!(*config.seed(), Some(9));
        assert!(!*config.clear_screen());
    }

    #[test]
    fn test_zero_target_rejected() {
        let err = GameConfig::from_toml("target_wins = 0").unwrap_err();
        assert!(err.message.contains("target_wins"));
    }

    #[test]
    fn test_unknown_first_mover_rejected() {
        assert!(GameConfig::from_toml("first_mover = \"whoever\"").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = GameConfig::default()
            .with_overrides(Some(1), Some(FirstMover::Computer), Some(4))
            .unwrap();
        let settings = config.match_settings();
        assert_eq!(settings.target_wins, 1);
        assert_eq!(settings.first_mover, FirstMover::Computer);
        assert_eq!(*config.seed(), Some(4));
    }
}
