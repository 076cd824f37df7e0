//! Participants, roles and the toss coin.
//!
//! A game always has exactly two sides: the human and the automated
//! opponent. At any moment one of them bats and the other bowls; the engine
//! only stores the human's role and derives the opponent's as its opposite.

use serde::{Deserialize, Serialize};

/// One of the two participants in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    /// Get the other side.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => f.write_str("You"),
            Side::Opponent => f.write_str("Computer"),
        }
    }
}

/// A side's role for the current innings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Batting,
    Bowling,
}

impl Role {
    /// Get the complementary role.
    #[must_use]
    pub const fn opposite(self) -> Role {
        match self {
            Role::Batting => Role::Bowling,
            Role::Bowling => Role::Batting,
        }
    }

    /// The side that bats when the human holds this role.
    #[must_use]
    pub const fn batting_side(self) -> Side {
        match self {
            Role::Batting => Side::Human,
            Role::Bowling => Side::Opponent,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Batting => f.write_str("batting"),
            Role::Bowling => f.write_str("bowling"),
        }
    }
}

/// A toss call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    Head,
    Tails,
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coin::Head => f.write_str("head"),
            Coin::Tails => f.write_str("tails"),
        }
    }
}

impl std::str::FromStr for Coin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "head" | "heads" | "h" => Ok(Coin::Head),
            "tail" | "tails" | "t" => Ok(Coin::Tails),
            other => Err(format!("not a toss call: {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Human.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Human);
    }

    #[test]
    fn test_role_opposite_and_batting_side() {
        assert_eq!(Role::Batting.opposite(), Role::Bowling);
        assert_eq!(Role::Bowling.opposite(), Role::Batting);
        assert_eq!(Role::Batting.batting_side(), Side::Human);
        assert_eq!(Role::Bowling.batting_side(), Side::Opponent);
    }

    #[test]
    fn test_coin_parse() {
        assert_eq!("Head".parse::<Coin>(), Ok(Coin::Head));
        assert_eq!(" tails ".parse::<Coin>(), Ok(Coin::Tails));
        assert!("edge".parse::<Coin>().is_err());
    }
}
