//! Game state and the read-only snapshot handed to presentation layers.
//!
//! ## GameState
//!
//! The single mutable record of one game, owned by `GameEngine`. Fields are
//! public for reading; only the engine mutates them.
//!
//! ## Snapshot
//!
//! A serializable projection of `GameState` with everything needed to
//! render the game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::MAX_GUESS;
use super::{Difficulty, Innings, Phase, Role, Side};
use crate::error::EngineError;
use crate::rules::GameResult;

/// Ordered human guesses for the whole game.
///
/// `im::Vector` keeps snapshot clones O(1).
pub type GuessHistory = Vector<u8>;

/// A validated guess in `0..=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Guess(u8);

impl Guess {
    /// Validate a raw integer.
    pub fn new(value: i64) -> Result<Self, EngineError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_GUESS)
            .map(Guess)
            .ok_or_else(|| EngineError::InvalidGuess {
                input: value.to_string(),
            })
    }

    /// The guessed number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Guess {
    type Error = EngineError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Guess::new(value)
    }
}

impl std::str::FromStr for Guess {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<i64>()
            .map_err(|_| EngineError::InvalidGuess {
                input: trimmed.to_string(),
            })
            .and_then(Guess::new)
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Top-level phase.
    pub phase: Phase,

    /// The human's role. `None` until the toss/role choice settles it.
    pub role: Option<Role>,

    /// Current innings.
    pub innings: Innings,

    /// Human runs across both innings.
    pub player_runs: u32,

    /// Opponent runs across both innings.
    pub opponent_runs: u32,

    /// First-innings total, fixed when the first innings ends.
    pub target: Option<u32>,

    /// Every human guess that reached the opponent, across both innings.
    pub guess_history: GuessHistory,

    /// Most recent human guess in this innings (repetition tracking).
    pub last_guess: Option<u8>,

    /// Consecutive identical human guesses in this innings.
    pub repeat_streak: u32,

    /// Opponent's most recent move, if one was generated.
    pub last_opponent_move: Option<u8>,

    /// Balls played in the current innings.
    pub balls: u32,

    /// Opponent strength. Fixed once play starts.
    pub difficulty: Difficulty,

    /// Final result, set only when `phase == Finished`.
    pub result: Option<GameResult>,
}

impl GameState {
    /// A fresh game awaiting the toss.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            phase: Phase::Toss,
            role: None,
            innings: Innings::First,
            player_runs: 0,
            opponent_runs: 0,
            target: None,
            guess_history: Vector::new(),
            last_guess: None,
            repeat_streak: 0,
            last_opponent_move: None,
            balls: 0,
            difficulty,
            result: None,
        }
    }

    /// The side currently batting, once roles are set.
    #[must_use]
    pub fn batting_side(&self) -> Option<Side> {
        self.role.map(Role::batting_side)
    }

    /// Runs scored by a side.
    #[must_use]
    pub fn runs(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.player_runs,
            Side::Opponent => self.opponent_runs,
        }
    }

    pub(crate) fn runs_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Human => &mut self.player_runs,
            Side::Opponent => &mut self.opponent_runs,
        }
    }

    /// Is the game over?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Project the state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            difficulty: self.difficulty,
            role: self.role,
            innings: self.innings,
            player_runs: self.player_runs,
            opponent_runs: self.opponent_runs,
            target: self.target,
            last_guess: self.last_guess,
            last_opponent_move: self.last_opponent_move,
            repeat_streak: self.repeat_streak,
            balls: self.balls,
            result: self.result,
        }
    }
}

/// Read-only view of a game for presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub difficulty: Difficulty,
    pub role: Option<Role>,
    pub innings: Innings,
    pub player_runs: u32,
    pub opponent_runs: u32,
    pub target: Option<u32>,
    pub last_guess: Option<u8>,
    pub last_opponent_move: Option<u8>,
    pub repeat_streak: u32,
    pub balls: u32,
    pub result: Option<GameResult>,
}

impl Snapshot {
    /// One-line status, e.g. "You are batting (2nd Innings)".
    #[must_use]
    pub fn status_line(&self) -> String {
        match (self.phase, self.role) {
            (Phase::Toss, _) => "Choose HEAD or TAILS to start the toss.".to_string(),
            (Phase::RoleChoice, _) => "You won the toss! Choose to bat or bowl.".to_string(),
            (Phase::Finished, _) => match self.result {
                Some(result) => format!("Game over. {result}"),
                None => "Game over.".to_string(),
            },
            (Phase::Playing, Some(role)) => match self.innings {
                Innings::First => format!("You are {role}"),
                Innings::Second => format!("You are {role} ({})", self.innings),
            },
            (Phase::Playing, None) => "Playing".to_string(),
        }
    }

    /// Runs still needed by the chasing side, in the second innings.
    #[must_use]
    pub fn runs_to_target(&self) -> Option<u32> {
        let target = self.target?;
        let chasing = self.role?.batting_side();
        let total = match chasing {
            Side::Human => self.player_runs,
            Side::Opponent => self.opponent_runs,
        };
        Some(target.saturating_sub(total))
    }
}
