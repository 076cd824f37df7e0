//! Game engine: toss, role choice, ball-by-ball play and innings changes.

pub mod game;

pub use game::{GameEngine, Update};
