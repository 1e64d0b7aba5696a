//! Deterministic random number generation for secret-station draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Uniform draws**: Closed-interval ranges, so the last station is as
//!   likely as the first
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use secret_station::core::{GameRng, StationSource, TrackConfig};
//!
//! let config = TrackConfig::new(1, 3, 2, 2).unwrap();
//! let mut rng = GameRng::new(42);
//!
//! let secret = rng.roll_station(&config);
//! assert!(config.contains(secret));
//!
//! // Same seed, same secret
//! assert_eq!(GameRng::new(42).roll_station(&config), secret);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::config::TrackConfig;
use super::station::Station;

/// Where secret stations come from.
///
/// The transition function draws through this trait so callers can pick a
/// seeded generator, an entropy-backed one, or a fixed value in tests.
pub trait StationSource {
    /// Draw a station uniformly from `[first_station, last_station]`.
    fn roll_station(&mut self, config: &TrackConfig) -> Station;
}

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
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
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given closed range.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl StationSource for GameRng {
    fn roll_station(&mut self, config: &TrackConfig) -> Station {
        Station::new(
            self.gen_range_inclusive(config.first_station().raw()..=config.last_station().raw()),
        )
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_inclusive(0..=1000), rng2.gen_range_inclusive(0..=1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_inclusive(0..=1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_inclusive(0..=1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_covers_whole_track() {
        let config = TrackConfig::new(1, 3, 1, 1).unwrap();
        let mut rng = GameRng::new(7);
        let mut counts = [0u32; 3];

        for _ in 0..3000 {
            let station = rng.roll_station(&config);
            assert!(config.contains(station));
            counts[(station.raw() - 1) as usize] += 1;
        }

        // Both ends are reachable and nothing is starved
        for count in counts {
            assert!(count > 800, "skewed draw: {:?}", counts);
        }
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_range_inclusive(0..=1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_inclusive(0..=1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_inclusive(0..=1000)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
