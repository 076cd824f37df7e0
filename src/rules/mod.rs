//! Outcome rules.
//!
//! The win/lose/tie decision for a finished chase lives in one place,
//! `OutcomeResolver`, so the engine's two game-ending paths (target reached
//! during scoring, and second-innings dismissal) share a single comparison.

pub mod outcome;

pub use outcome::{ChaseEnd, ChaseSummary, GameResult, OutcomeResolver};
