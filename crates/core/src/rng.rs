//! Seedable random source for hidden-code generation.
//!
//! The engine never reaches for a global generator; callers hand it a
//! `GameRng`, so a fixed seed always yields the same hidden code.
//!
//! ```
//! use mastermind_core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_range_u8(0..10), b.gen_range_u8(0..10));
//! ```

use std::ops::Range;

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
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

    /// Seed from the current wall-clock time.
    #[must_use]
    pub fn from_clock() -> Self {
        let now = Utc::now();
        let seed = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp()) as u64;
        Self::new(seed)
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a value in the half-open range.
    pub fn gen_range_u8(&mut self, range: Range<u8>) -> u8 {
        self.inner.gen_range(range)
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
            assert_eq!(rng1.gen_range_u8(0..10), rng2.gen_range_u8(0..10));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.gen_range_u8(0..10)).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.gen_range_u8(0..10)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_range_is_half_open() {
        let mut rng = GameRng::new(9);
        let draws: Vec<_> = (0..500).map(|_| rng.gen_range_u8(0..3)).collect();

        assert!(draws.iter().all(|&v| v < 3));
        for value in 0..3 {
            assert!(draws.contains(&value), "value {value} never drawn");
        }
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(1234).seed(), 1234);
    }
}
