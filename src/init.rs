//! Starting partitions.
//!
//! Both strategies shuffle the entity order first; repeated initialization
//! with different random draws is what gives a population or colony its
//! initial diversity.

use crate::fitness::FitnessEvaluator;
use crate::partition::{max_group_size, Partition};
use rand::seq::SliceRandom;
use rand::Rng;

/// Strategy for building a starting [`Partition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Initializer {
    /// Shuffle, then deal entities to groups cyclically.
    ///
    /// Group sizes differ by at most one.
    #[default]
    RoundRobin,

    /// Shuffle, then greedily place each entity into the first group under
    /// the size cap that already holds one of its preferred peers, falling
    /// back to the smallest group.
    ///
    /// Groups never exceed `ceil(n / num_groups)` members, but sizes are
    /// not guaranteed to be balanced beyond that cap, and a group may stay
    /// empty once peers have filled the others.
    PreferenceGreedy,
}

impl Initializer {
    /// Builds a partition of `entity_count` entities into `num_groups` groups.
    ///
    /// `evaluator` supplies the resolved preferred-peer lists; it is only
    /// read by [`Initializer::PreferenceGreedy`].
    ///
    /// # Panics
    /// Panics if `num_groups == 0`.
    pub fn build<R: Rng>(
        &self,
        evaluator: &FitnessEvaluator,
        num_groups: usize,
        rng: &mut R,
    ) -> Partition {
        assert!(num_groups > 0, "num_groups must be positive");
        let n = evaluator.entity_count();
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);

        match self {
            Initializer::RoundRobin => round_robin(&order, num_groups),
            Initializer::PreferenceGreedy => preference_greedy(&order, num_groups, evaluator),
        }
    }
}

fn round_robin(order: &[usize], num_groups: usize) -> Partition {
    let mut partition = Partition::empty(num_groups);
    for (i, &e) in order.iter().enumerate() {
        partition.push(i % num_groups, e);
    }
    partition
}

fn preference_greedy(
    order: &[usize],
    num_groups: usize,
    evaluator: &FitnessEvaluator,
) -> Partition {
    let cap = max_group_size(order.len(), num_groups);
    let mut partition = Partition::empty(num_groups);
    let mut group_of: Vec<Option<usize>> = vec![None; evaluator.entity_count()];
    let mut unplaced = Vec::new();

    for &e in order {
        let with_peer = (0..num_groups).find(|&g| {
            partition.group(g).len() < cap
                && evaluator
                    .preferred(e)
                    .iter()
                    .any(|&p| group_of[p] == Some(g))
        });

        let target = with_peer.or_else(|| {
            partition
                .smallest_group()
                .filter(|&g| partition.group(g).len() < cap)
        });

        match target {
            Some(g) => {
                partition.push(g, e);
                group_of[e] = Some(g);
            }
            None => unplaced.push(e),
        }
    }

    // cap * num_groups >= n, so a group under the cap always exists here.
    for e in unplaced {
        if let Some(g) = (0..num_groups).find(|&g| partition.group(g).len() < cap) {
            partition.push(g, e);
        }
    }

    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::fitness::Objective;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn evaluator(n: usize) -> FitnessEvaluator {
        let ents: Vec<Entity> = (0..n)
            .map(|i| {
                let id = i as u64 + 1;
                let next = id % n as u64 + 1;
                Entity::new(id, i as f64).with_preferences(vec![next])
            })
            .collect();
        FitnessEvaluator::new(&ents, Objective::Preferences)
    }

    #[test]
    fn test_round_robin_six_into_three() {
        let eval = evaluator(6);
        let mut rng = StdRng::seed_from_u64(1);
        let p = Initializer::RoundRobin.build(&eval, 3, &mut rng);
        assert_eq!(p.group_sizes(), vec![2, 2, 2]);
        assert!(p.validate(6).is_ok());
    }

    #[test]
    fn test_round_robin_balance_within_one() {
        let eval = evaluator(17);
        let mut rng = StdRng::seed_from_u64(2);
        let p = Initializer::RoundRobin.build(&eval, 5, &mut rng);
        let sizes = p.group_sizes();
        let max = *sizes.iter().max().unwrap();
        let min = *sizes.iter().min().unwrap();
        assert!(max - min <= 1, "sizes {sizes:?}");
        assert!(p.validate(17).is_ok());
    }

    #[test]
    fn test_preference_greedy_respects_cap() {
        for seed in 0..20 {
            let eval = evaluator(15);
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Initializer::PreferenceGreedy.build(&eval, 4, &mut rng);
            assert!(p.validate(15).is_ok());
            assert!(p.group_sizes().iter().all(|&s| s <= 4));
        }
    }

    #[test]
    fn test_preference_greedy_places_peers_together() {
        // Two mutual pairs and a cap of two: whichever order the shuffle
        // produces, each partner finds the other's group still open.
        let ents = vec![
            Entity::new(1, 0.0).with_preferences(vec![2]),
            Entity::new(2, 0.0).with_preferences(vec![1]),
            Entity::new(3, 0.0).with_preferences(vec![4]),
            Entity::new(4, 0.0).with_preferences(vec![3]),
        ];
        let eval = FitnessEvaluator::new(&ents, Objective::Preferences);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Initializer::PreferenceGreedy.build(&eval, 2, &mut rng);
            assert!(p.validate(4).is_ok());
            assert_eq!(eval.preference_score(&p), 4);
        }
    }

    #[test]
    fn test_same_seed_same_partition() {
        let eval = evaluator(12);
        for init in [Initializer::RoundRobin, Initializer::PreferenceGreedy] {
            let a = init.build(&eval, 3, &mut StdRng::seed_from_u64(9));
            let b = init.build(&eval, 3, &mut StdRng::seed_from_u64(9));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_single_group_holds_everyone() {
        let eval = evaluator(5);
        let mut rng = StdRng::seed_from_u64(4);
        let p = Initializer::PreferenceGreedy.build(&eval, 1, &mut rng);
        assert_eq!(p.group_sizes(), vec![5]);
    }
}
