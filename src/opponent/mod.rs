//! Opponent move generation.
//!
//! Strategies are trait-based so the engine can swap opponents by
//! difficulty:
//! - `EasyStrategy`: uniform random
//! - `MediumStrategy`: occasionally replays the human's last guess
//! - `HardStrategy`: plays around the human's most frequent guess
//!
//! All strategies are pure functions of (history, random source).

pub mod strategy;

pub use strategy::{
    opponent_move, strategy_for, EasyStrategy, HardStrategy, MediumStrategy, MoveStrategy,
};
