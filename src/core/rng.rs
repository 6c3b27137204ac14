//! Random number generation for deck and pool shuffles.
//!
//! ## Key Features
//!
//! - **Injectable**: the engine only sees the `RandomSource` trait, so tests
//!   can drive shuffles from a scripted sequence
//! - **Deterministic**: `GameRng` with the same seed produces the same games
//! - **Forkable**: a session hands each new game its own independent stream
//!
//! ## Usage
//!
//! ```
//! use rust_war::core::{shuffle, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut data = vec![1, 2, 3, 4, 5];
//! shuffle(&mut data, &mut rng);
//!
//! data.sort();
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed indices.
///
/// This is the only randomness capability the engine depends on.
pub trait RandomSource {
    /// Return an index drawn uniformly from `0..=max`.
    fn index_inclusive(&mut self, max: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index_inclusive(&mut self, max: usize) -> usize {
        (**self).index_inclusive(max)
    }
}

/// Shuffle a slice in place with Fisher–Yates.
///
/// For `i` from the last index down to 1, swap element `i` with an element
/// chosen uniformly from `[0, i]`. Given a uniform source every permutation
/// is equally likely.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.index_inclusive(i);
        debug_assert!(j <= i, "random source returned {} for max {}", j, i);
        items.swap(i, j);
    }
}

/// Seeded RNG used for real games.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is still recorded so a game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }
}

impl RandomSource for GameRng {
    fn index_inclusive(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..=max)
    }
}
