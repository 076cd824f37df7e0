//! Game events.
//!
//! Every successful command yields the events it caused, in order. A
//! presentation layer renders these (messages, sounds, animations) without
//! needing to diff snapshots.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Coin, Innings, Role, Side};
use crate::rules::GameResult;

/// Events produced by one command. Most commands emit one to three.
pub type EventBatch = SmallVec<[GameEvent; 4]>;

/// Why a batting side was dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DismissalCause {
    /// Both sides showed the same number.
    Caught,
    /// The batting human repeated the same number too many times in a row.
    Repetition,
}

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The toss was resolved.
    TossResolved {
        call: Coin,
        opponent_call: Coin,
        winner: Side,
    },

    /// The human's role was fixed, either by choice or by the opponent
    /// winning the toss.
    RoleAssigned { chosen_by: Side, human_role: Role },

    /// A ball was played without a dismissal.
    BallPlayed {
        guess: u8,
        opponent_move: u8,
        batting: Side,
        runs: u32,
    },

    /// The batting human is repeating the same number.
    RepeatWarning {
        value: u8,
        streak: u32,
        /// Further identical guesses allowed before dismissal.
        remaining: u32,
    },

    /// The batting side's innings ended.
    Dismissed {
        batting: Side,
        cause: DismissalCause,
        total: u32,
    },

    /// The first innings ended and the chase begins.
    InningsChanged {
        innings: Innings,
        target: u32,
        human_role: Role,
    },

    /// The game finished.
    GameOver {
        result: GameResult,
        player_runs: u32,
        opponent_runs: u32,
    },

    /// The engine was returned to a fresh game.
    Reset,
}

impl GameEvent {
    /// Is this a terminal event?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEvent::GameOver { .. })
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TossResolved { call, opponent_call, winner } => write!(
                f,
                "You chose {call}, Computer chose {opponent_call}. {} the toss!",
                match winner {
                    Side::Human => "You won",
                    Side::Opponent => "Computer won",
                }
            ),
            GameEvent::RoleAssigned { chosen_by: Side::Human, human_role } => {
                write!(f, "You chose {human_role}.")
            }
            GameEvent::RoleAssigned { chosen_by: Side::Opponent, human_role } => write!(
                f,
                "Computer chose {}. You are {human_role}.",
                human_role.opposite()
            ),
            GameEvent::BallPlayed { guess, opponent_move, batting, runs } => write!(
                f,
                "You: {guess}, Computer: {opponent_move}. {batting} scored {runs}."
            ),
            GameEvent::RepeatWarning { value, remaining, .. } if *remaining <= 1 => write!(
                f,
                "Be careful! Repeating {value} again will get you OUT!"
            ),
            GameEvent::RepeatWarning { value, .. } => {
                write!(f, "Warning: don't repeat {value}!")
            }
            GameEvent::Dismissed { batting, cause: DismissalCause::Caught, total } => {
                write!(f, "OUT! {batting} finished on {total}.")
            }
            GameEvent::Dismissed { cause: DismissalCause::Repetition, total, .. } => write!(
                f,
                "You used the same number too many times! You're out on {total}."
            ),
            GameEvent::InningsChanged { target, human_role, .. } => match human_role {
                Role::Batting => write!(f, "Now batting. Chase {target}!"),
                Role::Bowling => write!(f, "Now bowling. Defend {target}!"),
            },
            GameEvent::GameOver { result, player_runs, opponent_runs } => write!(
                f,
                "Game over! Your score: {player_runs}, Computer score: {opponent_runs}. {result}"
            ),
            GameEvent::Reset => f.write_str("Welcome! Choose HEAD or TAILS to start the toss."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_game_over() {
        let over = GameEvent::GameOver {
            result: GameResult::Tie,
            player_runs: 3,
            opponent_runs: 3,
        };
        assert!(over.is_game_over());
        assert!(!GameEvent::Reset.is_game_over());
    }

    #[test]
    fn test_repeat_warning_messages() {
        let first = GameEvent::RepeatWarning { value: 4, streak: 3, remaining: 2 };
        let last = GameEvent::RepeatWarning { value: 4, streak: 4, remaining: 1 };
        assert_eq!(first.to_string(), "Warning: don't repeat 4!");
        assert_eq!(
            last.to_string(),
            "Be careful! Repeating 4 again will get you OUT!"
        );
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::Dismissed {
            batting: Side::Human,
            cause: DismissalCause::Repetition,
            total: 12,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
