//! Random perturbation sources.
//!
//! The forecaster never touches a global generator. Callers pass a
//! [`NoiseSource`] per call: [`RngNoise`] wraps any `rand` generator and
//! [`ZeroNoise`] removes randomness entirely.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies uniformly distributed integers.
pub trait NoiseSource {
    /// Returns an integer in `low..=high`.
    ///
    /// Callers always pass `low <= high`.
    fn next_in_range(&mut self, low: i32, high: i32) -> i32;
}

/// Adapts a `rand` generator into a [`NoiseSource`].
#[derive(Debug, Clone)]
pub struct RngNoise<R>(pub R);

impl RngNoise<ChaCha8Rng> {
    /// Deterministic noise: equal seeds yield equal sequences on every
    /// platform.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RngNoise<StdRng> {
    /// Noise seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        self.0.gen_range(low..=high)
    }
}

/// Noise that always returns the in-range value closest to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        0.clamp(low, high)
    }
}
