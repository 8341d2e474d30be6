//! Randomness capability injected into every generation call.

use rand::Rng;

/// Source of uniform random numbers driving the Markov chain.
///
/// Every [`rand::Rng`] is a `RandomSource`, so a seeded
/// `rand_chacha::ChaCha20Rng` gives reproducible runs and `rand::rng()` gives
/// production sampling. Do not share one non-reentrant source across
/// threads; give each worker its own.
pub trait RandomSource {
    /// Returns a float uniformly distributed in `[0, 1)`.
    fn uniform_float(&mut self) -> f64;

    /// Returns an integer uniformly distributed in `[0, bound)`.
    ///
    /// `bound` must be non-zero.
    fn uniform_int(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "bound must be non-zero");
        let v = (self.uniform_float() * bound as f64) as usize;
        v.min(bound - 1)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform_float(&mut self) -> f64 {
        self.random::<f64>()
    }

    #[inline]
    fn uniform_int(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}
