//! # hand-cricket
//!
//! A deterministic engine for two-innings hand cricket against an automated
//! opponent.
//!
//! Each ball both sides show a number from 0 to 10. Matching numbers dismiss
//! the batting side; otherwise the batting side scores. The first innings
//! sets a target, the second innings chases it.
//!
//! ## Design Principles
//!
//! 1. **One engine, one game**: `GameEngine` owns its state outright. Run
//!    several games by creating several engines.
//!
//! 2. **Injected randomness**: every draw goes through a `RandomSource`, so a
//!    seed or a scripted source replays a game exactly.
//!
//! 3. **No presentation**: commands return a snapshot plus the events they
//!    caused. Rendering, pacing and sound belong to the caller.
//!
//! ## Modules
//!
//! - `core`: sides, phases, configuration, RNG, state, events
//! - `opponent`: difficulty-based move strategies
//! - `rules`: win/lose/tie resolution
//! - `engine`: the game state machine
//! - `records`: player profiles and leaderboard storage interface
//! - `error`: error types

pub mod core;
pub mod error;
pub mod opponent;
pub mod rules;
pub mod engine;
pub mod records;

// Re-export commonly used types
pub use crate::core::{
    Coin, Role, Side,
    Difficulty, Innings, Phase,
    GameRng, RandomSource, ScriptedSource,
    EngineConfig, GUESS_SPAN, MAX_GUESS,
    GameState, Guess, GuessHistory, Snapshot,
    DismissalCause, EventBatch, GameEvent,
};

pub use crate::error::{Command, ConfigError, EngineError, RecordError};

pub use crate::opponent::{
    opponent_move, strategy_for, EasyStrategy, HardStrategy, MediumStrategy, MoveStrategy,
};

pub use crate::rules::{ChaseEnd, ChaseSummary, GameResult, OutcomeResolver};

pub use crate::engine::{GameEngine, Update};

pub use crate::records::{record_game, MemoryProfileStore, PlayerProfile, ProfileStore};
