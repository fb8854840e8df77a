//! Uniform random sources for idle triggers.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform samples in `[0, 1)`.
pub trait Sampler {
    fn sample(&mut self) -> f64;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

/// Pseudo-random sampler backed by `StdRng`.
#[derive(Debug)]
pub struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    /// Seed from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a sampler with a specific seed for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for RandomSampler {
    fn sample(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sequence of samples.
///
/// Once the sequence runs out every sample is `0.0`, which never exceeds a
/// trigger threshold.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSampler {
    samples: VecDeque<f64>,
    drawn: usize,
}

impl ScriptedSampler {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Queue more samples after the current ones.
    pub fn extend(&mut self, samples: impl IntoIterator<Item = f64>) {
        self.samples.extend(samples);
    }

    /// Samples not yet drawn.
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }

    /// Samples drawn so far, including ones past the end of the script.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl Sampler for ScriptedSampler {
    fn sample(&mut self) -> f64 {
        self.drawn += 1;
        self.samples.pop_front().unwrap_or(0.0)
    }
}
