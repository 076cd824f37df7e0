//! Error types for the engine, configuration and records layers.

use std::path::PathBuf;

use crate::core::Phase;

/// Engine command names, used when reporting a rejected command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    CallToss,
    ChooseRole,
    SubmitGuess,
    SetDifficulty,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::CallToss => "call_toss",
            Command::ChooseRole => "choose_role",
            Command::SubmitGuess => "submit_guess",
            Command::SetDifficulty => "set_difficulty",
        };
        f.write_str(name)
    }
}

/// Errors returned by `GameEngine` commands.
///
/// A command that fails leaves the engine exactly as it was, so the caller
/// can correct the input and issue it again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{command} is not allowed during the {phase} phase")]
    InvalidPhaseTransition { command: Command, phase: Phase },

    #[error("guess must be an integer between 0 and 10, got {input:?}")]
    InvalidGuess { input: String },

    #[error("a role can only be chosen after winning the toss (current phase: {phase})")]
    InvalidRoleChoice { phase: Phase },

    #[error("difficulty cannot change once play has started")]
    DifficultyLocked,

    #[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
    UnknownDifficulty(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by a `ProfileStore`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("no profile for player {0:?}")]
    NotFound(String),

    #[error("profile for player {0:?} already exists")]
    AlreadyExists(String),

    #[error("game is not finished (phase: {0})")]
    GameNotFinished(Phase),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::InvalidPhaseTransition {
            command: Command::SubmitGuess,
            phase: Phase::Toss,
        };
        assert_eq!(
            err.to_string(),
            "submit_guess is not allowed during the toss phase"
        );

        let err = EngineError::InvalidGuess { input: "11".into() };
        assert_eq!(
            err.to_string(),
            "guess must be an integer between 0 and 10, got \"11\""
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("repeat_dismissal_streak must be >= 2".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: repeat_dismissal_streak must be >= 2"
        );
    }

    #[test]
    fn test_record_error_display() {
        let err = RecordError::NotFound("ana".into());
        assert_eq!(err.to_string(), "no profile for player \"ana\"");
    }
}
