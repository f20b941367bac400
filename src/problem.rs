//! The grouping problem shared by both engines.
//!
//! [`GroupingProblem`] binds an entity set, a group count, a fitness
//! objective and an initializer, and implements both [`GaProblem`] and
//! [`AbcProblem`] over [`Partition`].

use crate::abc::AbcProblem;
use crate::entity::Entity;
use crate::error::GroupingError;
use crate::fitness::{FitnessBreakdown, FitnessEvaluator, Objective, ScoreMode};
use crate::ga::{coverage_crossover, GaProblem};
use crate::init::Initializer;
use crate::partition::Partition;
use crate::swap::{swap_in_place, swap_move};
use rand::Rng;
use std::collections::HashSet;

/// Partition `entities` into `num_groups` groups.
///
/// # Examples
///
/// ```
/// use u_grouping::{Entity, GroupingProblem, Objective};
/// use u_grouping::ga::{GaConfig, GaRunner};
///
/// let entities: Vec<Entity> = (1..=9).map(|i| Entity::new(i, i as f64 * 10.0)).collect();
/// let problem = GroupingProblem::new(entities, 3, Objective::Standard).unwrap();
///
/// let result = GaRunner::run(&problem, &GaConfig::default().with_seed(1));
/// assert!(result.best.validate(9).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GroupingProblem {
    entities: Vec<Entity>,
    num_groups: usize,
    evaluator: FitnessEvaluator,
    initializer: Initializer,
}

impl GroupingProblem {
    /// Creates a problem.
    ///
    /// The initializer defaults to [`Initializer::PreferenceGreedy`] for
    /// [`Objective::Preferences`] and [`Initializer::RoundRobin`] otherwise.
    ///
    /// # Errors
    /// - [`GroupingError::NoEntities`] if `entities` is empty
    /// - [`GroupingError::ZeroGroups`] if `num_groups == 0`
    /// - [`GroupingError::TooManyGroups`] if `num_groups >= entities.len()`,
    ///   which would leave every group a singleton or empty
    /// - [`GroupingError::DuplicateEntityId`] if two entities share an id
    pub fn new(
        entities: Vec<Entity>,
        num_groups: usize,
        objective: Objective,
    ) -> Result<Self, GroupingError> {
        if entities.is_empty() {
            return Err(GroupingError::NoEntities);
        }
        if num_groups == 0 {
            return Err(GroupingError::ZeroGroups);
        }
        if num_groups >= entities.len() {
            return Err(GroupingError::TooManyGroups {
                groups: num_groups,
                entities: entities.len(),
            });
        }
        let mut seen = HashSet::with_capacity(entities.len());
        if let Some(dup) = entities.iter().find(|e| !seen.insert(e.id())) {
            return Err(GroupingError::DuplicateEntityId(dup.id()));
        }

        let initializer = match objective {
            Objective::Preferences => Initializer::PreferenceGreedy,
            Objective::Standard => Initializer::RoundRobin,
        };
        let evaluator = FitnessEvaluator::new(&entities, objective);
        Ok(Self {
            entities,
            num_groups,
            evaluator,
            initializer,
        })
    }

    /// Overrides the initializer.
    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = initializer;
        self
    }

    /// Sets how per-member group values are computed.
    pub fn with_score_mode(mut self, mode: ScoreMode) -> Self {
        self.evaluator = self.evaluator.with_score_mode(mode);
        self
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    pub fn objective(&self) -> Objective {
        self.evaluator.objective()
    }

    pub fn initializer(&self) -> Initializer {
        self.initializer
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Builds a starting partition with the configured initializer.
    pub fn initial_partition<R: Rng>(&self, rng: &mut R) -> Partition {
        self.initializer.build(&self.evaluator, self.num_groups, rng)
    }

    /// Fitness of `partition`.
    pub fn fitness(&self, partition: &Partition) -> f64 {
        self.evaluator.evaluate(partition)
    }

    /// Fitness of `partition` with its individual terms.
    pub fn breakdown(&self, partition: &Partition) -> FitnessBreakdown {
        self.evaluator.breakdown(partition)
    }
}

impl GaProblem for GroupingProblem {
    type Solution = Partition;

    fn create_solution<R: Rng>(&self, rng: &mut R) -> Partition {
        self.initial_partition(rng)
    }

    fn evaluate(&self, partition: &Partition) -> f64 {
        self.fitness(partition)
    }

    fn crossover<R: Rng>(&self, parent1: &Partition, parent2: &Partition, _rng: &mut R) -> Partition {
        coverage_crossover(parent1, parent2)
    }

    fn mutate<R: Rng>(&self, partition: &mut Partition, rng: &mut R) {
        swap_in_place(partition, rng);
    }
}

impl AbcProblem for GroupingProblem {
    type Solution = Partition;

    fn create_solution<R: Rng>(&self, rng: &mut R) -> Partition {
        self.initial_partition(rng)
    }

    fn evaluate(&self, partition: &Partition) -> f64 {
        self.fitness(partition)
    }

    fn neighbor<R: Rng>(&self, partition: &Partition, rng: &mut R) -> Partition {
        swap_move(partition, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entities(n: u64) -> Vec<Entity> {
        (1..=n)
            .map(|i| Entity::new(i, (i * 7 % 10) as f64).with_preferences(vec![i % n + 1]))
            .collect()
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            GroupingProblem::new(vec![], 1, Objective::Standard).unwrap_err(),
            GroupingError::NoEntities
        );
    }

    #[test]
    fn test_rejects_zero_groups() {
        assert_eq!(
            GroupingProblem::new(entities(3), 0, Objective::Standard).unwrap_err(),
            GroupingError::ZeroGroups
        );
    }

    #[test]
    fn test_rejects_too_many_groups() {
        assert_eq!(
            GroupingProblem::new(entities(3), 4, Objective::Standard).unwrap_err(),
            GroupingError::TooManyGroups {
                groups: 4,
                entities: 3
            }
        );
        assert!(GroupingProblem::new(entities(3), 3, Objective::Standard).is_err());
        assert!(GroupingProblem::new(entities(3), 2, Objective::Standard).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let ents = vec![Entity::new(1, 0.0), Entity::new(2, 0.0), Entity::new(1, 5.0)];
        assert_eq!(
            GroupingProblem::new(ents, 1, Objective::Standard).unwrap_err(),
            GroupingError::DuplicateEntityId(1)
        );
    }

    #[test]
    fn test_default_initializer_follows_objective() {
        let standard = GroupingProblem::new(entities(6), 2, Objective::Standard).unwrap();
        assert_eq!(standard.initializer(), Initializer::RoundRobin);
        let prefs = GroupingProblem::new(entities(6), 2, Objective::Preferences).unwrap();
        assert_eq!(prefs.initializer(), Initializer::PreferenceGreedy);
        let overridden = prefs.with_initializer(Initializer::RoundRobin);
        assert_eq!(overridden.initializer(), Initializer::RoundRobin);
    }

    #[test]
    fn test_ga_operators_preserve_coverage() {
        let problem = GroupingProblem::new(entities(10), 3, Objective::Preferences).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let a = GaProblem::create_solution(&problem, &mut rng);
        let b = GaProblem::create_solution(&problem, &mut rng);
        let mut child = GaProblem::crossover(&problem, &a, &b, &mut rng);
        problem.mutate(&mut child, &mut rng);
        assert!(child.validate(10).is_ok());
    }

    #[test]
    fn test_abc_neighbor_is_pure() {
        let problem = GroupingProblem::new(entities(8), 2, Objective::Standard).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let p = AbcProblem::create_solution(&problem, &mut rng);
        let snapshot = p.clone();
        let q = problem.neighbor(&p, &mut rng);
        assert_eq!(p, snapshot);
        assert_eq!(q.group_sizes(), p.group_sizes());
    }

    #[test]
    fn test_score_mode_changes_fitness() {
        let absolute = GroupingProblem::new(entities(6), 2, Objective::Standard).unwrap();
        let pairwise = absolute.clone().with_score_mode(ScoreMode::Pairwise);
        let p = Partition::from_groups(vec![vec![0, 1, 2], vec![3, 4, 5]]);
        assert_ne!(absolute.fitness(&p), pairwise.fitness(&p));
    }
}
