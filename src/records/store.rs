//! Profile storage.
//!
//! ## Example
//!
//! ```
//! use hand_cricket::records::{MemoryProfileStore, PlayerProfile, ProfileStore};
//!
//! let mut store = MemoryProfileStore::new();
//! store.insert(PlayerProfile::new("ana")).unwrap();
//!
//! let found = store.get("ana").unwrap();
//! assert_eq!(found.games_played, 0);
//! ```

use rustc_hash::FxHashMap;

use super::PlayerProfile;
use crate::core::{Phase, Snapshot};
use crate::error::RecordError;

/// Record store for player profiles.
pub trait ProfileStore {
    /// Read a profile.
    fn get(&self, player_id: &str) -> Option<PlayerProfile>;

    /// Create a profile. Fails if one already exists for the id.
    fn insert(&mut self, profile: PlayerProfile) -> Result<(), RecordError>;

    /// Replace an existing profile. Fails if none exists for the id.
    fn update(&mut self, profile: PlayerProfile) -> Result<(), RecordError>;

    /// Profiles ordered by wins, then best score, then id.
    fn leaderboard(&self, limit: usize) -> Vec<PlayerProfile>;
}

/// In-memory profile store.
#[derive(Clone, Debug, Default)]
pub struct MemoryProfileStore {
    profiles: FxHashMap<String, PlayerProfile>,
}

impl MemoryProfileStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self, player_id: &str) -> Option<PlayerProfile> {
        self.profiles.get(player_id).cloned()
    }

    fn insert(&mut self, profile: PlayerProfile) -> Result<(), RecordError> {
        if self.profiles.contains_key(&profile.player_id) {
            return Err(RecordError::AlreadyExists(profile.player_id));
        }
        self.profiles.insert(profile.player_id.clone(), profile);
        Ok(())
    }

    fn update(&mut self, profile: PlayerProfile) -> Result<(), RecordError> {
        match self.profiles.get_mut(&profile.player_id) {
            Some(existing) => {
                *existing = profile;
                Ok(())
            }
            None => Err(RecordError::NotFound(profile.player_id)),
        }
    }

    fn leaderboard(&self, limit: usize) -> Vec<PlayerProfile> {
        let mut all: Vec<PlayerProfile> = self.profiles.values().cloned().collect();
        all.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then(b.best_score.cmp(&a.best_score))
                .then(a.player_id.cmp(&b.player_id))
        });
        all.truncate(limit);
        all
    }
}

/// Tally a finished game into a player's profile, creating it if needed.
///
/// Returns the updated profile.
pub fn record_game<S: ProfileStore + ?Sized>(
    store: &mut S,
    player_id: &str,
    snapshot: &Snapshot,
) -> Result<PlayerProfile, RecordError> {
    let result = match (snapshot.phase, snapshot.result) {
        (Phase::Finished, Some(result)) => result,
        (phase, _) => return Err(RecordError::GameNotFinished(phase)),
    };

    let (mut profile, exists) = match store.get(player_id) {
        Some(profile) => (profile, true),
        None => (PlayerProfile::new(player_id), false),
    };
    profile.record(result, snapshot.player_runs);

    if exists {
        store.update(profile.clone())?;
    } else {
        store.insert(profile.clone())?;
    }
    tracing::debug!(player_id, ?result, games = profile.games_played, "game recorded");
    Ok(profile)
}
