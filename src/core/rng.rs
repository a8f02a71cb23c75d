//! Deterministic random number generation for round dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deal sequence
//! - **Explicit**: The seed is a constructor argument, never ambient state
//! - **Scoped**: Deck construction is RNG-free; only the game layer deals
//!
//! ```
//! use rust_spotit::DealRng;
//!
//! let mut rng = DealRng::new(42);
//! let (left, right) = rng.distinct_pair(7);
//! assert_ne!(left, right);
//!
//! // Same seed, same deals
//! let mut replay = DealRng::new(42);
//! assert_eq!(replay.distinct_pair(7), (left, right));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for picking the cards of a round.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. The seed is retained for replay and debugging.
#[derive(Clone, Debug)]
pub struct DealRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DealRng {
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
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick a uniform index into a collection of `len` elements.
    ///
    /// Panics if `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Pick two distinct uniform indices into a collection of `len`
    /// elements.
    ///
    /// Panics if `len < 2`.
    pub fn distinct_pair(&mut self, len: usize) -> (usize, usize) {
        assert!(len >= 2, "need at least 2 elements to pick a pair");
        let first = self.inner.gen_range(0..len);
        // Draw from len - 1 slots and skip over the first pick.
        let mut second = self.inner.gen_range(0..len - 1);
        if second >= first {
            second += 1;
        }
        (first, second)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
