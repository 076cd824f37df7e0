//! Player profiles and the leaderboard.
//!
//! The engine never touches storage itself. Finished games are handed to a
//! `ProfileStore`, which only needs plain read, insert and update calls keyed
//! by player id. `MemoryProfileStore` is the in-process implementation.

pub mod profile;
pub mod store;

pub use profile::PlayerProfile;
pub use store::{record_game, MemoryProfileStore, ProfileStore};
