//! Parent selection strategies for the GA.
//!
//! Selection picks the two parents recombined each generation. Strategies
//! plug into the runner through the [`ParentSelection`] trait; [`Selection`]
//! provides the built-in ones.
//!
//! All strategies assume **maximization** (higher fitness = better) and
//! always return two distinct indices.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;
use std::cmp::Ordering;

/// Chooses two distinct parent indices from a population's fitness values.
pub trait ParentSelection {
    /// Returns `(parent1, parent2)` with `parent1 != parent2`.
    ///
    /// # Panics
    /// Implementations may panic if `fitness.len() < 2`.
    fn select_parents<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> (usize, usize);
}

/// Built-in selection strategies.
///
/// # Examples
///
/// ```
/// use u_grouping::ga::{ParentSelection, Selection};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let fitness = [1.0, 9.0, 4.0, 7.0];
/// assert_eq!(Selection::Elitist.select_parents(&fitness, &mut rng), (1, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Deterministically take the two fittest individuals.
    ///
    /// Ties resolve to the lower index.
    #[default]
    Elitist,

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Weights are `fitness - min + ε`, so negative fitness is handled.
    Roulette,

    /// Tournament selection: best of `k` uniform draws.
    Tournament(usize),

    /// Linear rank selection: weight `n - rank`, best rank 0.
    Rank,
}

impl ParentSelection for Selection {
    fn select_parents<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> (usize, usize) {
        assert!(
            fitness.len() >= 2,
            "parent selection needs at least two individuals"
        );

        match self {
            Selection::Elitist => top_two(fitness),
            Selection::Roulette => {
                let first = roulette(fitness, None, rng);
                (first, roulette(fitness, Some(first), rng))
            }
            Selection::Tournament(k) => {
                let first = tournament(fitness, *k, None, rng);
                (first, tournament(fitness, *k, Some(first), rng))
            }
            Selection::Rank => {
                let first = rank(fitness, None, rng);
                (first, rank(fitness, Some(first), rng))
            }
        }
    }
}

fn cmp_fitness(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Index of the highest fitness, skipping `exclude`. First index wins ties.
fn argmax(fitness: &[f64], exclude: Option<usize>) -> usize {
    let mut best: Option<usize> = None;
    for (i, &f) in fitness.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        match best {
            Some(b) if cmp_fitness(f, fitness[b]) != Ordering::Greater => {}
            _ => best = Some(i),
        }
    }
    best.expect("fitness has at least two entries")
}

fn top_two(fitness: &[f64]) -> (usize, usize) {
    let first = argmax(fitness, None);
    (first, argmax(fitness, Some(first)))
}

/// Draws an index uniformly from `0..n`, never returning `exclude`.
fn uniform_excluding<R: Rng>(n: usize, exclude: Option<usize>, rng: &mut R) -> usize {
    match exclude {
        Some(ex) => {
            let mut i = rng.random_range(0..n - 1);
            if i >= ex {
                i += 1;
            }
            i
        }
        None => rng.random_range(0..n),
    }
}

fn tournament<R: Rng>(fitness: &[f64], k: usize, exclude: Option<usize>, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = fitness.len();

    let mut best = uniform_excluding(n, exclude, rng);
    for _ in 1..k {
        let idx = uniform_excluding(n, exclude, rng);
        if fitness[idx] > fitness[best] {
            best = idx;
        }
    }
    best
}

/// Cumulative-weight draw over `weights`, skipping `exclude`.
fn weighted_draw<R: Rng>(weights: &[f64], exclude: Option<usize>, rng: &mut R) -> usize {
    let n = weights.len();
    let total: f64 = weights
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != exclude)
        .map(|(_, w)| w)
        .sum();
    if !total.is_finite() || total <= 0.0 {
        return uniform_excluding(n, exclude, rng);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;
    for (i, &w) in weights.iter().enumerate() {
        if Some(i) == exclude {
            continue;
        }
        cumulative += w;
        last = Some(i);
        if cumulative > threshold {
            return i;
        }
    }
    // floating-point fallback
    last.unwrap_or_else(|| uniform_excluding(n, exclude, rng))
}

fn roulette<R: Rng>(fitness: &[f64], exclude: Option<usize>, rng: &mut R) -> usize {
    let min = fitness.iter().cloned().fold(f64::INFINITY, f64::min);
    let epsilon = 1e-10;
    let weights: Vec<f64> = fitness.iter().map(|&f| f - min + epsilon).collect();
    weighted_draw(&weights, exclude, rng)
}

fn rank<R: Rng>(fitness: &[f64], exclude: Option<usize>, rng: &mut R) -> usize {
    let n = fitness.len();
    let mut order: Vec<usize> = (0..n).collect();
    // best first
    order.sort_by(|&a, &b| cmp_fitness(fitness[b], fitness[a]));

    let mut weights = vec![0.0; n];
    for (r, &i) in order.iter().enumerate() {
        weights[i] = (n - r) as f64;
    }
    weighted_draw(&weights, exclude, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ALL: [Selection; 4] = [
        Selection::Elitist,
        Selection::Roulette,
        Selection::Tournament(3),
        Selection::Rank,
    ];

    #[test]
    fn test_elitist_picks_top_two() {
        let mut rng = StdRng::seed_from_u64(42);
        let fitness = [3.0, 10.0, -2.0, 8.0, 1.0];
        assert_eq!(Selection::Elitist.select_parents(&fitness, &mut rng), (1, 3));
    }

    #[test]
    fn test_elitist_ties_resolve_to_first_index() {
        let mut rng = StdRng::seed_from_u64(42);
        let fitness = [5.0, 7.0, 7.0, 7.0];
        assert_eq!(Selection::Elitist.select_parents(&fitness, &mut rng), (1, 2));
        let flat = [0.0; 3];
        assert_eq!(Selection::Elitist.select_parents(&flat, &mut rng), (0, 1));
    }

    #[test]
    fn test_parents_always_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        let fitness = [1.0, 2.0, 3.0];
        for sel in ALL {
            for _ in 0..500 {
                let (a, b) = sel.select_parents(&fitness, &mut rng);
                assert_ne!(a, b, "{sel:?}");
            }
        }
    }

    #[test]
    fn test_two_individuals() {
        let mut rng = StdRng::seed_from_u64(42);
        for sel in ALL {
            let (a, b) = sel.select_parents(&[4.0, 4.0], &mut rng);
            assert_eq!(a + b, 1, "{sel:?}");
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let fitness = [1.0, 5.0, 10.0, 2.0];
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let (a, _) = Selection::Tournament(4).select_parents(&fitness, &mut rng);
            counts[a] += 1;
        }
        assert!(
            counts[2] > 6000,
            "expected best to be selected >60% of the time, got {counts:?}"
        );
    }

    #[test]
    fn test_roulette_handles_negative_fitness() {
        let fitness = [-50.0, -10.0, 20.0, -40.0];
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let (a, _) = Selection::Roulette.select_parents(&fitness, &mut rng);
            counts[a] += 1;
        }
        assert!(counts[2] > counts[0], "got {counts:?}");
        assert!(counts[2] > counts[3], "got {counts:?}");
    }

    #[test]
    fn test_rank_favors_best() {
        let fitness = [1.0, 50.0, 100.0, 20.0];
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            let (a, _) = Selection::Rank.select_parents(&fitness, &mut rng);
            counts[a] += 1;
        }
        assert!(counts[2] > counts[0], "got {counts:?}");
    }

    #[test]
    fn test_same_seed_same_parents() {
        let fitness = [1.0, 5.0, 3.0, 2.0, 4.0];
        for sel in ALL {
            let a = sel.select_parents(&fitness, &mut StdRng::seed_from_u64(9));
            let b = sel.select_parents(&fitness, &mut StdRng::seed_from_u64(9));
            assert_eq!(a, b);
        }
    }

    #[test]
    #[should_panic(expected = "parent selection needs at least two individuals")]
    fn test_single_individual_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        Selection::Elitist.select_parents(&[1.0], &mut rng);
    }
}
