use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source injected into the engine at construction.
///
/// Implementations must draw uniformly over `[0, bound)` with `bound >= 1`;
/// the engine never asks for an empty range. Keeping this behind a trait
/// makes spins reproducible in tests without touching the engine.
pub trait RandomSource {
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Default source backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::rng().random_range(0..bound)
    }
}

/// Deterministic source for tests and replayable sessions.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}
