//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::TOURNAMENT_POOL;
use crate::error::{GaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the genetic algorithm.
///
/// Immutable for the duration of a run: the runner only borrows it.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 4);
/// assert_eq!(config.generation_count, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generation_count(100)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Per-gene flip probability, also used as the probability that a
    /// round's children are mutated at all (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability that crossover produces children (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability that the selected parents pass through unmodified (0.0–1.0).
    pub reproduction_rate: f64,

    /// Individuals per generation. Must be at least 4 for tournament selection.
    pub population_size: usize,

    /// Number of generations to run.
    pub generation_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to compute the per-generation average fitness on the rayon
    /// pool. Ignored unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.2,
            crossover_rate: 0.6,
            reproduction_rate: 0.3,
            population_size: 4,
            generation_count: 500,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the reproduction rate.
    pub fn with_reproduction_rate(mut self, rate: f64) -> Self {
        self.reproduction_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`GaError::Configuration`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < TOURNAMENT_POOL {
            return Err(GaError::Configuration(format!(
                "population_size must be at least {TOURNAMENT_POOL}, got {}",
                self.population_size
            )));
        }
        if self.generation_count == 0 {
            return Err(GaError::Configuration(
                "generation_count must be at least 1".into(),
            ));
        }
        for (name, rate) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
            ("reproduction_rate", self.reproduction_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GaError::Configuration(format!(
                    "{name} must be within [0, 1], got {rate}"
                )));
            }
        }
        // Only reproduction and crossover produce offspring.
        if self.reproduction_rate == 0.0 && self.crossover_rate == 0.0 {
            return Err(GaError::Configuration(
                "reproduction_rate and crossover_rate cannot both be zero".into(),
            ));
        }
        Ok(())
    }
}
