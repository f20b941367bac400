//! One-call entry points.
//!
//! [`run_genetic`] and [`run_abc`] build a [`GroupingProblem`] from a plain
//! entity slice and return the best partition found. The `use_preferences`
//! flag picks both the objective and the initializer:
//!
//! | `use_preferences` | Objective | Initializer | ABC returns |
//! |---|---|---|---|
//! | `false` | [`Objective::Standard`] | [`Initializer::RoundRobin`](crate::Initializer::RoundRobin) | best of final colony |
//! | `true`  | [`Objective::Preferences`] | [`Initializer::PreferenceGreedy`](crate::Initializer::PreferenceGreedy) | global best |
//!
//! For seeds, alternative selection strategies, or the fitness trajectory,
//! build the problem and config yourself and call the runners directly.

use crate::abc::{AbcConfig, AbcRunner, BestTracking};
use crate::entity::Entity;
use crate::error::GroupingError;
use crate::fitness::Objective;
use crate::ga::{GaConfig, GaRunner};
use crate::partition::Partition;
use crate::problem::GroupingProblem;

fn objective(use_preferences: bool) -> Objective {
    if use_preferences {
        Objective::Preferences
    } else {
        Objective::Standard
    }
}

/// Partitions `entities` with the steady-state GA.
///
/// With `use_preferences`, the greedy initializer can leave a group empty
/// (for example two mutual pairs split into three groups). No operator
/// refills an empty group, so the returned partition may contain one.
/// It still covers every entity exactly once.
///
/// # Errors
/// Fails on an invalid entity list or group count (see
/// [`GroupingProblem::new`]), a population smaller than 2, or a mutation
/// rate outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use u_grouping::{run_genetic, Entity};
///
/// let entities: Vec<Entity> = (1..=15).map(|i| Entity::new(i, (i * 13 % 100) as f64)).collect();
/// let best = run_genetic(&entities, 3, 5, 50, 0.3, false).unwrap();
/// assert_eq!(best.num_groups(), 3);
/// assert!(best.validate(entities.len()).is_ok());
/// ```
pub fn run_genetic(
    entities: &[Entity],
    num_groups: usize,
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    use_preferences: bool,
) -> Result<Partition, GroupingError> {
    let problem = GroupingProblem::new(entities.to_vec(), num_groups, objective(use_preferences))?;
    let config = GaConfig {
        population_size,
        generations,
        mutation_rate,
        ..GaConfig::default()
    };
    config.validate()?;

    Ok(GaRunner::run(&problem, &config).best)
}

/// Partitions `entities` with the Artificial Bee Colony.
///
/// The colony holds one candidate partition per group.
///
/// With `use_preferences`, the greedy initializer can leave a group empty
/// (for example two mutual pairs split into three groups). No operator
/// refills an empty group, so the returned partition may contain one.
/// It still covers every entity exactly once.
///
/// # Errors
/// Fails on an invalid entity list or group count (see
/// [`GroupingProblem::new`]), or when `num_groups < 2` (colony too small).
///
/// # Examples
///
/// ```
/// use u_grouping::{run_abc, Entity};
///
/// let entities: Vec<Entity> = (1..=12)
///     .map(|i| Entity::new(i, (i * 17 % 100) as f64).with_preferences(vec![i % 12 + 1]))
///     .collect();
/// let best = run_abc(&entities, 4, 20, 3, true).unwrap();
/// assert!(best.validate(entities.len()).is_ok());
/// ```
pub fn run_abc(
    entities: &[Entity],
    num_groups: usize,
    num_iterations: usize,
    stagnation_limit: usize,
    use_preferences: bool,
) -> Result<Partition, GroupingError> {
    let problem = GroupingProblem::new(entities.to_vec(), num_groups, objective(use_preferences))?;
    let tracking = if use_preferences {
        BestTracking::Global
    } else {
        BestTracking::FinalColony
    };
    let config = AbcConfig::for_groups(num_groups)
        .with_max_iterations(num_iterations)
        .with_stagnation_limit(stagnation_limit)
        .with_best_tracking(tracking);
    config.validate()?;

    Ok(AbcRunner::run(&problem, &config).best)
}
