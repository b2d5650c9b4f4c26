//! Randomness used for dealing, role assignment and cuts.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of every random decision the engine makes.
///
/// Services take this as a type parameter so tests can substitute a scripted
/// source and assert exact deals.
pub trait RandomSource {
    /// Shuffles a slice in place.
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Returns 128 random bits, used for room ids.
    fn next_id(&mut self) -> u128;
}

/// Deterministic ChaCha8 source.
///
/// The same seed always produces the same deals, roles and cuts.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    /// Creates a source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn pick(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }

    fn next_id(&mut self) -> u128 {
        (u128::from(self.inner.next_u64()) << 64) | u128::from(self.inner.next_u64())
    }
}
