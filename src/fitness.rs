//! Partition quality.
//!
//! Fitness rewards groups whose members' scores are spread out, and
//! penalises partitions where that spread is uneven across groups:
//!
//! ```text
//! diversity(g)     = sample std-dev of member scores in g   (0 if |g| < 2)
//! mean_diversity   = mean of diversity(g) over all groups
//! diversity_spread = sample std-dev of diversity(g)         (0 if 1 group)
//!
//! Standard:    mean_diversity                    - diversity_spread
//! Preferences: mean_diversity + preference_score - diversity_spread
//! ```
//!
//! `preference_score` counts the entities that share their group with at
//! least one of their preferred peers. Higher fitness is better.

use crate::entity::{Entity, EntityId};
use crate::partition::Partition;
use std::collections::HashMap;

/// Which fitness formula to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Objective {
    /// Score diversity only.
    #[default]
    Standard,
    /// Score diversity plus one point per entity placed with a preferred peer.
    Preferences,
}

/// How the per-member values inside a group are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreMode {
    /// Each member contributes its own score.
    #[default]
    Absolute,
    /// Each member contributes the sum of its [`Entity::affinity`] against
    /// every other member of the same group.
    Pairwise,
}

/// Components of one fitness evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessBreakdown {
    pub mean_diversity: f64,
    pub diversity_spread: f64,
    /// Number of entities placed with at least one preferred peer.
    /// Always computed; only added to `total` under [`Objective::Preferences`].
    pub preference_score: usize,
    pub total: f64,
}

/// Evaluates partitions of one fixed entity set.
///
/// Preferred-peer identifiers are resolved to entity indices once at
/// construction; identifiers that match no entity are ignored.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    scores: Vec<f64>,
    preferred: Vec<Vec<usize>>,
    objective: Objective,
    score_mode: ScoreMode,
}

impl FitnessEvaluator {
    /// Creates an evaluator in [`ScoreMode::Absolute`].
    pub fn new(entities: &[Entity], objective: Objective) -> Self {
        let index: HashMap<EntityId, usize> = entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id(), i))
            .collect();
        let preferred = entities
            .iter()
            .map(|e| {
                e.preferences()
                    .iter()
                    .filter_map(|id| index.get(id).copied())
                    .collect()
            })
            .collect();
        Self {
            scores: entities.iter().map(Entity::score).collect(),
            preferred,
            objective,
            score_mode: ScoreMode::Absolute,
        }
    }

    /// Sets the per-member score mode.
    pub fn with_score_mode(mut self, mode: ScoreMode) -> Self {
        self.score_mode = mode;
        self
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn score_mode(&self) -> ScoreMode {
        self.score_mode
    }

    pub fn entity_count(&self) -> usize {
        self.scores.len()
    }

    /// Resolved preferred-peer indices of entity `i`.
    pub fn preferred(&self, i: usize) -> &[usize] {
        &self.preferred[i]
    }

    /// Fitness of `partition`. Higher is better.
    pub fn evaluate(&self, partition: &Partition) -> f64 {
        self.breakdown(partition).total
    }

    /// Fitness of `partition` with its individual terms.
    ///
    /// Empty groups contribute a diversity of 0. A partition with no
    /// groups at all scores 0.
    pub fn breakdown(&self, partition: &Partition) -> FitnessBreakdown {
        let diversities: Vec<f64> = partition
            .groups()
            .iter()
            .map(|g| sample_std_dev(&self.member_values(g)))
            .collect();

        let mean_diversity = if diversities.is_empty() {
            0.0
        } else {
            diversities.iter().sum::<f64>() / diversities.len() as f64
        };
        let diversity_spread = sample_std_dev(&diversities);
        let preference_score = self.preference_score(partition);

        let total = match self.objective {
            Objective::Standard => mean_diversity - diversity_spread,
            Objective::Preferences => {
                mean_diversity + preference_score as f64 - diversity_spread
            }
        };

        FitnessBreakdown {
            mean_diversity,
            diversity_spread,
            preference_score,
            total,
        }
    }

    /// Number of entities sharing a group with at least one preferred peer.
    pub fn preference_score(&self, partition: &Partition) -> usize {
        let assignment = partition.assignment(self.scores.len());
        partition
            .groups()
            .iter()
            .enumerate()
            .flat_map(|(g, members)| members.iter().map(move |&e| (g, e)))
            .filter(|&(g, e)| {
                self.preferred
                    .get(e)
                    .is_some_and(|prefs| prefs.iter().any(|&p| assignment[p] == Some(g)))
            })
            .count()
    }

    fn member_values(&self, group: &[usize]) -> Vec<f64> {
        match self.score_mode {
            ScoreMode::Absolute => group.iter().map(|&e| self.scores[e]).collect(),
            ScoreMode::Pairwise => group
                .iter()
                .map(|&a| {
                    group
                        .iter()
                        .filter(|&&b| b != a)
                        .map(|&b| (self.scores[a] - self.scores[b]).abs())
                        .sum()
                })
                .collect(),
        }
    }
}

/// Sample standard deviation (`n - 1` denominator).
///
/// Returns 0 for fewer than two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (ss / (n - 1) as f64).sqrt()
}
