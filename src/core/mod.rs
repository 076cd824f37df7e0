//! Core engine types: sides, phases, configuration, RNG, state, events.
//!
//! Everything here is plain data. The state machine lives in `engine`.

pub mod side;
pub mod phase;
pub mod rng;
pub mod config;
pub mod state;
pub mod event;

pub use side::{Coin, Role, Side};
pub use phase::{Difficulty, Innings, Phase};
pub use rng::{GameRng, RandomSource, ScriptedSource};
pub use config::{EngineConfig, GUESS_SPAN, MAX_GUESS};
pub use state::{GameState, Guess, GuessHistory, Snapshot};
pub use event::{DismissalCause, EventBatch, GameEvent};
