//! Per-player tallies.

use serde::{Deserialize, Serialize};

use crate::rules::GameResult;

/// Lifetime record for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// Highest run total the player has posted in a single game.
    pub best_score: u32,
}

impl PlayerProfile {
    /// A profile with no games.
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            ..Self::default()
        }
    }

    /// Count one finished game.
    pub fn record(&mut self, result: GameResult, score: u32) {
        self.games_played += 1;
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Lose => self.losses += 1,
            GameResult::Tie => self.ties += 1,
        }
        self.best_score = self.best_score.max(score);
    }

    /// Fraction of games won, or 0 with no games.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tallies() {
        let mut profile = PlayerProfile::new("ana");
        profile.record(GameResult::Win, 31);
        profile.record(GameResult::Lose, 12);
        profile.record(GameResult::Tie, 0);

        assert_eq!(profile.games_played, 3);
        assert_eq!((profile.wins, profile.losses, profile.ties), (1, 1, 1));
        assert_eq!(profile.best_score, 31);
        assert!((profile.win_rate() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_win_rate() {
        assert_eq!(PlayerProfile::new("x").win_rate(), 0.0);
    }
}
