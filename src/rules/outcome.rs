//! Terminal outcome computation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Result of a completed game, from the human's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Lose,
    Tie,
}

impl GameResult {
    /// The result for a side that won.
    #[must_use]
    pub const fn for_winner(winner: Side) -> Self {
        match winner {
            Side::Human => GameResult::Win,
            Side::Opponent => GameResult::Lose,
        }
    }

    /// The winning side, or `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::Win => Some(Side::Human),
            GameResult::Lose => Some(Side::Opponent),
            GameResult::Tie => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Win => f.write_str("You win!"),
            GameResult::Lose => f.write_str("You lose!"),
            GameResult::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// How the second innings ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChaseEnd {
    /// The chasing side reached or passed the target while scoring.
    TargetReached,
    /// The chasing side was dismissed.
    Dismissed,
}

/// Final figures of a game, as seen at the end of the chase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaseSummary {
    pub player_runs: u32,
    pub opponent_runs: u32,
    pub target: u32,
    /// The side batting in the second innings.
    pub chaser: Side,
    pub end: ChaseEnd,
}

impl ChaseSummary {
    /// The chasing side's total.
    #[must_use]
    pub fn chase_total(&self) -> u32 {
        match self.chaser {
            Side::Human => self.player_runs,
            Side::Opponent => self.opponent_runs,
        }
    }
}

/// Decides win, lose or tie at the end of the second innings.
///
/// - Reaching or passing the target while scoring wins for the chaser.
/// - A dismissed chaser level with the target ties.
/// - A dismissed chaser short of the target loses.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutcomeResolver;

impl OutcomeResolver {
    /// Resolve the final result.
    #[must_use]
    pub fn resolve(summary: &ChaseSummary) -> GameResult {
        let total = summary.chase_total();
        match summary.end {
            ChaseEnd::TargetReached => {
                debug_assert!(total >= summary.target, "target not reached");
                GameResult::for_winner(summary.chaser)
            }
            ChaseEnd::Dismissed => match total.cmp(&summary.target) {
                Ordering::Equal => GameResult::Tie,
                Ordering::Less => GameResult::for_winner(summary.chaser.other()),
                // Unreachable through the engine: passing the target ends
                // the game before any dismissal.
                Ordering::Greater => GameResult::for_winner(summary.chaser),
            },
        }
    }
}
