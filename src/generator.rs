//! Seeded synthetic rental instances.
//!
//! Draws activities with uniformly random start times over a horizon and
//! uniformly random durations. The same configuration always yields the same
//! activities.

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::models::Activity;

/// Configuration for synthetic instance generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of activities drawn by [`InstanceGenerator::activities`].
    pub count: usize,
    /// Latest possible start time; starts are drawn from `1..=horizon`.
    pub horizon: i64,
    /// Shortest duration (at least 1).
    pub min_duration: i64,
    /// Longest duration.
    pub max_duration: i64,
    /// RNG seed.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Default configuration: 20 activities over 100 time units, durations
    /// 1 to 12, seed 42.
    pub fn new() -> Self {
        Self {
            count: 20,
            horizon: 100,
            min_duration: 1,
            max_duration: 12,
            seed: 42,
        }
    }

    /// Sets the number of activities.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the latest start time, clamped to `1..i64::MAX`.
    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = horizon.clamp(1, i64::MAX - 1);
        self
    }

    /// Sets the duration range. Both bounds are raised to at least 1 and
    /// `max` to at least `min`.
    pub fn with_duration_range(mut self, min: i64, max: i64) -> Self {
        self.min_duration = min.max(1);
        self.max_duration = max.max(self.min_duration);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Random activity source.
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    config: GeneratorConfig,
    rng: SmallRng,
}

impl InstanceGenerator {
    /// Creates a generator seeded from `config.seed`.
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = SmallRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// The configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Draws one activity.
    ///
    /// Durations are capped so that `horizon + duration` fits in an `i64`.
    pub fn activity(&mut self) -> Activity {
        let horizon = self.config.horizon.clamp(1, i64::MAX - 1);
        let longest = i64::MAX - horizon;
        let min = self.config.min_duration.clamp(1, longest);
        let max = self.config.max_duration.clamp(min, longest);

        let start = self.rng.random_range(1..=horizon);
        let duration = self.rng.random_range(min..=max);
        Activity::from_valid(start, start + duration)
    }

    /// Draws `config.count` activities.
    pub fn activities(&mut self) -> Vec<Activity> {
        (0..self.config.count).map(|_| self.activity()).collect()
    }

    /// Draws `config.count` existing activities and one candidate.
    pub fn request(&mut self) -> (Vec<Activity>, Activity) {
        let existing = self.activities();
        let candidate = self.activity();
        (existing, candidate)
    }
}
