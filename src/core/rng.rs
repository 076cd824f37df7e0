//! Injectable randomness.
//!
//! Every random decision the engine makes (the opponent's toss call, the
//! opponent's role after winning the toss, and every opponent move) goes
//! through a [`RandomSource`]. Production games use [`GameRng`]; tests and
//! replays use [`ScriptedSource`] to pin each draw.
//!
//! ```
//! use hand_cricket::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same sequence
//! assert_eq!(a.gen_below(11), b.gen_below(11));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform randomness.
///
/// Only [`next_f64`](RandomSource::next_f64) is required; the integer and
/// boolean draws are derived from it unless an implementation overrides them.
pub trait RandomSource {
    /// Uniform double in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `0..n`. `n` must be non-zero.
    fn gen_below(&mut self, n: u32) -> u32 {
        let scaled = (self.next_f64() * f64::from(n)).floor() as u32;
        scaled.min(n - 1)
    }

    /// `true` with the given probability.
    fn gen_bool(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }

    fn gen_below(&mut self, n: u32) -> u32 {
        (**self).gen_below(n)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        (**self).gen_bool(probability)
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn gen_below(&mut self, n: u32) -> u32 {
        self.inner.gen_range(0..n)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

/// Replays a fixed sequence of draws.
///
/// Each draw consumes one value. Panics once the script is exhausted, which
/// makes it usable as a tripwire: `ScriptedSource::empty()` asserts that no
/// randomness is consumed at all.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    values: VecDeque<f64>,
    consumed: usize,
}

impl ScriptedSource {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            consumed: 0,
        }
    }

    /// A source that panics on the first draw.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The double that makes `gen_below(n)` return `value`.
    #[must_use]
    pub fn pick(value: u32, n: u32) -> f64 {
        (f64::from(value) + 0.5) / f64::from(n)
    }

    /// Append a raw draw.
    pub fn push(&mut self, value: f64) {
        self.values.push_back(value);
    }

    /// Append a draw that makes `gen_below(n)` return `value`.
    pub fn push_pick(&mut self, value: u32, n: u32) {
        self.push(Self::pick(value, n));
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of scripted draws left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        match self.values.pop_front() {
            Some(value) => {
                self.consumed += 1;
                value
            }
            None => panic!(
                "scripted random source exhausted after {} draws",
                self.consumed
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_below(11), rng2.gen_below(11));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_below(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_below(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_below_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            assert!(rng.gen_below(11) <= 10);
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_seed_accessor() {
        assert_eq!(GameRng::new(99).seed(), 99);
    }

    #[test]
    fn test_scripted_pick() {
        let mut src = ScriptedSource::new([
            ScriptedSource::pick(0, 11),
            ScriptedSource::pick(10, 11),
            ScriptedSource::pick(1, 3),
        ]);
        assert_eq!(src.gen_below(11), 0);
        assert_eq!(src.gen_below(11), 10);
        assert_eq!(src.gen_below(3), 1);
        assert_eq!(src.consumed(), 3);
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn test_scripted_bool() {
        let mut src = ScriptedSource::new([0.1, 0.9]);
        assert!(src.gen_bool(0.5));
        assert!(!src.gen_bool(0.5));
    }

    #[test]
    #[should_panic(expected = "scripted random source exhausted")]
    fn test_empty_source_panics() {
        ScriptedSource::empty().next_f64();
    }
}
