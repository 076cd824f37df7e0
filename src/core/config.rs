//! Engine configuration.
//!
//! Loadable from TOML; every field has a default so a partial file works:
//!
//! ```toml
//! difficulty = "hard"
//! seed = 7
//! repeat_dismissal_streak = 5
//! repeat_warning_streak = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Difficulty;
use crate::error::ConfigError;

/// Highest number either side may show.
pub const MAX_GUESS: u8 = 10;

/// Number of distinct values a side may show (`0..=MAX_GUESS`).
pub const GUESS_SPAN: u32 = MAX_GUESS as u32 + 1;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Opponent strength for new games.
    pub difficulty: Difficulty,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Consecutive identical guesses that dismiss a batting human.
    pub repeat_dismissal_streak: u32,

    /// First streak value that raises a repetition warning.
    /// Warnings repeat for every streak value below the dismissal streak.
    pub repeat_warning_streak: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed: None,
            repeat_dismissal_streak: 5,
            repeat_warning_streak: 3,
        }
    }
}

impl EngineConfig {
    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeat_dismissal_streak < 2 {
            return Err(ConfigError::Validation(
                "repeat_dismissal_streak must be >= 2".into(),
            ));
        }
        if self.repeat_warning_streak < 2 {
            return Err(ConfigError::Validation(
                "repeat_warning_streak must be >= 2".into(),
            ));
        }
        if self.repeat_warning_streak >= self.repeat_dismissal_streak {
            return Err(ConfigError::Validation(
                "repeat_warning_streak must be < repeat_dismissal_streak".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.seed, None);
        assert_eq!(config.repeat_dismissal_streak, 5);
        assert_eq!(config.repeat_warning_streak, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_difficulty(Difficulty::Hard)
            .with_seed(123);

        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml("difficulty = \"medium\"\nseed = 9\n").unwrap();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.repeat_dismissal_streak, 5);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_streaks() {
        let err = EngineConfig::from_toml("repeat_dismissal_streak = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = EngineConfig::from_toml(
            "repeat_dismissal_streak = 4\nrepeat_warning_streak = 4",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_toml() {
        let err = EngineConfig::from_toml("difficulty = \"impossible\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/hand-cricket.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
