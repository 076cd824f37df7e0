//! Opponent move strategies, one per difficulty.

use crate::core::{Difficulty, GuessHistory, RandomSource, GUESS_SPAN, MAX_GUESS};

/// Policy for choosing the opponent's number for a round.
///
/// Implementations must be pure given the RNG: the same history and the same
/// draws always produce the same move, and the result is always in `0..=10`.
pub trait MoveStrategy: Send + Sync {
    /// Choose a move given the human's earlier guesses.
    fn next_move(&self, history: &GuessHistory, rng: &mut dyn RandomSource) -> u8;
}

fn uniform(rng: &mut dyn RandomSource) -> u8 {
    rng.gen_below(GUESS_SPAN) as u8
}

/// Uniform random, ignoring history.
#[derive(Clone, Debug, Default)]
pub struct EasyStrategy;

impl MoveStrategy for EasyStrategy {
    fn next_move(&self, _history: &GuessHistory, rng: &mut dyn RandomSource) -> u8 {
        uniform(rng)
    }
}

/// Sometimes replays the human's last guess.
#[derive(Clone, Debug)]
pub struct MediumStrategy {
    /// Chance of replaying the last guess instead of drawing uniformly.
    pub reuse_probability: f64,
}

impl Default for MediumStrategy {
    fn default() -> Self {
        Self { reuse_probability: 0.3 }
    }
}

impl MoveStrategy for MediumStrategy {
    fn next_move(&self, history: &GuessHistory, rng: &mut dyn RandomSource) -> u8 {
        if rng.gen_bool(self.reuse_probability) {
            match history.last() {
                Some(&last) => last.min(MAX_GUESS),
                None => uniform(rng),
            }
        } else {
            uniform(rng)
        }
    }
}

/// Predicts the human's favourite number and plays next to it.
///
/// The prediction is the most frequent value in the history; ties go to the
/// smallest value. The prediction is then shifted by -1, 0 or +1 with equal
/// probability and clamped to `0..=10`. An empty history falls back to a
/// uniform draw.
#[derive(Clone, Debug, Default)]
pub struct HardStrategy;

impl HardStrategy {
    /// Most frequent value in `history`, smallest value on ties.
    #[must_use]
    pub fn most_frequent(history: &GuessHistory) -> Option<u8> {
        let mut counts = [0u32; GUESS_SPAN as usize];
        for &guess in history {
            counts[usize::from(guess.min(MAX_GUESS))] += 1;
        }

        let mut best: Option<(u8, u32)> = None;
        for (value, &count) in counts.iter().enumerate() {
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((value as u8, count));
            }
        }
        best.map(|(value, _)| value)
    }
}

impl MoveStrategy for HardStrategy {
    fn next_move(&self, history: &GuessHistory, rng: &mut dyn RandomSource) -> u8 {
        match Self::most_frequent(history) {
            Some(predicted) => {
                let shift = rng.gen_below(3) as i32 - 1;
                (i32::from(predicted) + shift).clamp(0, i32::from(MAX_GUESS)) as u8
            }
            None => uniform(rng),
        }
    }
}

/// The strategy for a difficulty level.
#[must_use]
pub fn strategy_for(difficulty: Difficulty) -> Box<dyn MoveStrategy> {
    match difficulty {
        Difficulty::Easy => Box::new(EasyStrategy),
        Difficulty::Medium => Box::new(MediumStrategy::default()),
        Difficulty::Hard => Box::new(HardStrategy),
    }
}

/// Generate the opponent's move for a round.
pub fn opponent_move(
    difficulty: Difficulty,
    history: &GuessHistory,
    rng: &mut dyn RandomSource,
) -> u8 {
    strategy_for(difficulty).next_move(history, rng)
}
