//! ABC configuration.

use crate::error::ConfigError;

/// How onlooker bees turn colony fitness into selection probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnlookerWeighting {
    /// Probability proportional to raw fitness: `f_i / Σ f`.
    ///
    /// The phase is skipped for an iteration when `Σ f == 0`. It is also
    /// skipped when any single fitness is negative or the sum is not
    /// finite, even if the sum is positive: a plain zero-sum guard would
    /// still draw from those weights, but the distribution is undefined
    /// there. Use [`OnlookerWeighting::Shifted`] to keep drawing.
    #[default]
    Raw,

    /// Probability proportional to `f_i - min(f) + ε`.
    ///
    /// Always defined, so the phase never skips.
    Shifted,
}

/// Which solution an ABC run returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BestTracking {
    /// The best solution seen in any iteration, even if a scout has since
    /// discarded it from the colony.
    #[default]
    Global,

    /// The best member of the colony after the last iteration.
    FinalColony,
}

/// Configuration parameters for the Artificial Bee Colony.
///
/// # Examples
///
/// ```
/// use u_grouping::abc::{AbcConfig, BestTracking};
///
/// let config = AbcConfig::for_groups(4)
///     .with_max_iterations(200)
///     .with_stagnation_limit(5)
///     .with_best_tracking(BestTracking::FinalColony);
/// assert_eq!(config.colony_size, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AbcConfig {
    /// Number of food sources (candidate solutions) in the colony.
    pub colony_size: usize,
    /// Number of employed → onlooker → scout cycles.
    pub max_iterations: usize,
    /// A source is abandoned once its trial counter exceeds this value.
    pub stagnation_limit: usize,
    /// Onlooker probability scheme.
    pub onlooker_weighting: OnlookerWeighting,
    /// Which solution the run returns.
    pub best_tracking: BestTracking,
    /// Whether to evaluate the initial colony in parallel.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for AbcConfig {
    fn default() -> Self {
        Self {
            colony_size: 10,
            max_iterations: 100,
            stagnation_limit: 3,
            onlooker_weighting: OnlookerWeighting::default(),
            best_tracking: BestTracking::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl AbcConfig {
    /// Default configuration whose colony holds one source per group.
    ///
    /// Ties colony size to the partition's group count. Use
    /// [`with_colony_size`](Self::with_colony_size) to decouple them.
    pub fn for_groups(num_groups: usize) -> Self {
        Self {
            colony_size: num_groups,
            ..Self::default()
        }
    }

    /// Sets the number of food sources.
    pub fn with_colony_size(mut self, n: usize) -> Self {
        self.colony_size = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the abandonment limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the onlooker probability scheme.
    pub fn with_onlooker_weighting(mut self, weighting: OnlookerWeighting) -> Self {
        self.onlooker_weighting = weighting;
        self
    }

    /// Sets which solution the run returns.
    pub fn with_best_tracking(mut self, tracking: BestTracking) -> Self {
        self.best_tracking = tracking;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colony_size < 2 {
            return Err(ConfigError::ColonyTooSmall(self.colony_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AbcConfig::default();
        assert_eq!(config.colony_size, 10);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.stagnation_limit, 3);
        assert_eq!(config.onlooker_weighting, OnlookerWeighting::Raw);
        assert_eq!(config.best_tracking, BestTracking::Global);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_groups_couples_colony_size() {
        let config = AbcConfig::for_groups(6);
        assert_eq!(config.colony_size, 6);
        assert_eq!(config.max_iterations, AbcConfig::default().max_iterations);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AbcConfig::default()
            .with_colony_size(20)
            .with_max_iterations(50)
            .with_stagnation_limit(8)
            .with_onlooker_weighting(OnlookerWeighting::Shifted)
            .with_best_tracking(BestTracking::FinalColony)
            .with_parallel(true)
            .with_seed(5);
        assert_eq!(config.colony_size, 20);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.stagnation_limit, 8);
        assert_eq!(config.onlooker_weighting, OnlookerWeighting::Shifted);
        assert_eq!(config.best_tracking, BestTracking::FinalColony);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_validate_colony_too_small() {
        assert_eq!(
            AbcConfig::for_groups(1).validate(),
            Err(ConfigError::ColonyTooSmall(1))
        );
    }
}
