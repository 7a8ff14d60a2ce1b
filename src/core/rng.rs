//! Deterministic random number generation.
//!
//! All randomness in the engine — the opening shuffle and the bot's
//! draws — flows through the [`RandomSource`] trait, so tests can
//! substitute scripted sequences and assert exact outcomes.
//!
//! The production source is [`DuelRng`], a seeded ChaCha8 generator:
//! the same seed always produces the same shuffle and the same bot
//! draws. Its position is capturable in O(1) for checkpointing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Source of randomness for shuffles and draws.
///
/// `index` must return a uniform value in `0..bound`. The provided
/// `shuffle` is a Fisher–Yates pass driven by `index`, so a scripted
/// source controls the permutation too.
pub trait RandomSource {
    /// Uniform index in `0..bound`. `bound` is always >= 1.
    fn index(&mut self, bound: usize) -> usize;

    /// Shuffle a slice in place (uniform over permutations when
    /// `index` is uniform).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Deterministic RNG backing real games.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
///
/// ```
/// use sum_duel::core::{DuelRng, RandomSource};
///
/// let mut a = DuelRng::new(42);
/// let mut b = DuelRng::new(42);
/// assert_eq!(a.index(100), b.index(100));
/// ```
#[derive(Clone, Debug)]
pub struct DuelRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DuelRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DuelRngState {
        DuelRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DuelRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for DuelRng {
    fn index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how
/// many values have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

/// Scripted randomness for tests.
///
/// `index` pops pre-recorded values from the front of a queue;
/// `shuffle` leaves slices untouched, so a dealt deck keeps its
/// construction order. Panics if the script runs dry or yields an
/// out-of-range value — a test supplying the wrong script should fail
/// loudly.
#[derive(Clone, Debug, Default)]
pub struct SequenceRandom {
    values: VecDeque<usize>,
}

impl SequenceRandom {
    /// Create a scripted source from a list of indices.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for SequenceRandom {
    fn index(&mut self, bound: usize) -> usize {
        let value = self
            .values
            .pop_front()
            .expect("scripted random sequence exhausted");
        assert!(
            value < bound,
            "scripted index {value} out of range 0..{bound}"
        );
        value
    }

    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}
