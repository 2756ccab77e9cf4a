//! Injectable randomness
//!
//! Every random draw the feed makes (category, location, score,
//! coordinates, arrival delay) goes through [`RandomSource`] so tests can
//! replace it with a scripted sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource: Send + 'static {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform integer in `min..=max`.
    fn between(&mut self, min: u64, max: u64) -> u64;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// `StdRng`-backed source, seeded from entropy or from a fixed value.
pub struct SystemRandom {
    rng: StdRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn between(&mut self, min: u64, max: u64) -> u64 {
        self.rng.gen_range(min..=max)
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen()
    }
}
