//! Deterministic randomness for deck draws.
//!
//! The deck never touches a global RNG. It asks a [`RandomSource`] for an
//! index, so callers choose where randomness comes from:
//!
//! - [`GameRng`]: seeded ChaCha8, forkable, checkpointable
//! - [`ScriptedSource`]: a fixed list of indices, for tests and replays
//!
//! ```
//! use rust_pathtiles::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.next_index(35), b.next_index(35));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return an index in `0..upper`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Seeded ChaCha8 RNG with forking.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed the RNG from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent but reproducible branch.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range_usize(0..upper)
    }
}

/// Serializable RNG position.
///
/// The ChaCha8 word position makes this O(1) regardless of how many
/// values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
    pub fork_counter: u64,
}

/// Replays a fixed sequence of indices.
///
/// Each value is reduced modulo `upper`, so a script written against a
/// full deck stays valid as the deck shrinks. Once exhausted it yields 0.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of scripted values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.cursor)
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> usize {
        let value = self.script.get(self.cursor).copied().unwrap_or(0);
        self.cursor += 1;
        value % upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for upper in (1..100).rev() {
            assert_eq!(rng1.next_index(upper), rng2.next_index(upper));
        }
    }

    #[test]
    fn test_next_index_in_bounds() {
        let mut rng = GameRng::new(3);
        for upper in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_index(upper) < upper);
            }
        }
    }

    #[test]
    fn test_fork_diverges_but_is_reproducible() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut forked1 = rng1.fork();
        let mut forked2 = rng2.fork();
        assert_eq!(forked1.seed(), forked2.seed());

        let parent: Vec<_> = (0..10).map(|_| rng1.next_index(1000)).collect();
        let child: Vec<_> = (0..10).map(|_| forked1.next_index(1000)).collect();
        let child2: Vec<_> = (0..10).map(|_| forked2.next_index(1000)).collect();
        assert_ne!(parent, child);
        assert_eq!(child, child2);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..17 {
            rng.next_index(35);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_index(35)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_index(35)).collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_source_wraps_and_exhausts() {
        let mut source = ScriptedSource::new(vec![5, 40, 2]);
        assert_eq!(source.remaining(), 3);
        assert_eq!(source.next_index(35), 5);
        assert_eq!(source.next_index(35), 5); // 40 % 35
        assert_eq!(source.next_index(2), 0);
        assert_eq!(source.remaining(), 0);
        assert_eq!(source.next_index(10), 0);
    }
}
