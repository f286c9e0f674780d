//! Random source adapters.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

use crate::ports::RandomSource;

/// `RandomSource` backed by the standard RNG.
///
/// Seeded from OS entropy unless a seed is given, in which case the
/// sequence of reference numbers is reproducible.
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of values, clamped into the requested range.
///
/// Cycles when exhausted; an empty sequence always yields `low`.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandomSource {
    values: VecDeque<u32>,
}

impl SequenceRandomSource {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        match self.values.pop_front() {
            Some(value) => {
                self.values.push_back(value);
                value.clamp(low, high)
            }
            None => low,
        }
    }
}
