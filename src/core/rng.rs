//! Deterministic random number generation.
//!
//! All stochastic behavior in the engine - evaluation noise and the
//! deliberate-mistake draw - flows through [`GameRng`], an injected,
//! seeded source. The same seed reproduces every decision bit-for-bit,
//! which is what makes the difficulty policies testable.
//!
//! Uses ChaCha8 for speed while maintaining high-quality randomness.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Deterministic seeded RNG for noise and mistake sampling.
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

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample a zero-mean Gaussian with the given standard deviation.
    ///
    /// Returns 0.0 without consuming randomness when `std_dev` is not a
    /// positive finite number.
    pub fn gaussian(&mut self, std_dev: f64) -> f64 {
        if std_dev <= 0.0 {
            return 0.0;
        }
        match Normal::new(0.0, std_dev) {
            Ok(dist) => dist.sample(&mut self.inner),
            Err(_) => 0.0,
        }
    }

    /// Bernoulli draw. `probability` is clamped to [0, 1].
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Uniform index in `range`.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a uniformly random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
