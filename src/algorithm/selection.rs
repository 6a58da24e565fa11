//! Seeded random choices and the policies that steer color selection

use clap::ValueEnum;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// How a color is drawn from the unrestricted candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SelectionStrategy {
    /// Every surviving distinct color is equally likely
    #[default]
    Uniform,
    /// Colors are drawn proportionally to their count in the sample
    FrequencyWeighted,
}

/// What to do when every known color is restricted at a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ContradictionPolicy {
    /// Stop generation and report the coordinate
    #[default]
    Abort,
    /// Ignore the restrictions at that pixel and draw from the whole palette
    Unconstrained,
}

/// Seeded random selector for reproducible stochastic choices
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index in `0..len`, or `None` when `len` is zero
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniform integer in the inclusive range `min..=max`
    pub fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            min
        } else {
            self.rng.random_range(min..=max)
        }
    }

    /// Generic weighted random selection
    ///
    /// Returns index into weights array using cumulative distribution, or
    /// `None` for an empty slice. Non-positive totals fall back to index 0.
    pub fn weighted_choice(&mut self, weights: &[f64]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Some(0);
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return Some(i);
            }
        }
        Some(weights.len() - 1)
    }

    /// Pick one index according to `strategy`
    ///
    /// `weights` are only consulted for `FrequencyWeighted`.
    pub fn select(&mut self, strategy: SelectionStrategy, weights: &[f64]) -> Option<usize> {
        match strategy {
            SelectionStrategy::Uniform => self.choose_index(weights.len()),
            SelectionStrategy::FrequencyWeighted => self.weighted_choice(weights),
        }
    }
}
