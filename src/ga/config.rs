//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the steady-state loop.

use super::selection::Selection;
use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_grouping::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 5);
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.selection, Selection::Elitist);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_grouping::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_generations(500)
///     .with_selection(Selection::Tournament(3))
///     .with_mutation_rate(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of partitions kept in the population. Must be at least 2.
    pub population_size: usize,

    /// Number of generations to run. Each generation produces one child.
    pub generations: usize,

    /// Probability of mutating the child (0.0–1.0).
    pub mutation_rate: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Whether to evaluate the initial population in parallel.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 5,
            generations: 50,
            mutation_rate: 0.3,
            selection: Selection::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.selection == Selection::Tournament(0) {
            return Err(ConfigError::EmptyTournament);
        }
        Ok(())
    }
}
