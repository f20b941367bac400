//! Steady-state GA loop.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → (selection → crossover → mutation →
//! replace-worst) × generations.
//!
//! Each generation produces exactly one child. The child replaces the
//! current worst individual only if it is strictly fitter, so the best
//! fitness in the population never decreases.

use super::config::GaConfig;
use super::selection::ParentSelection;
use super::types::GaProblem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<S> {
    /// The fittest solution in the final population.
    pub best: S,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Number of generations whose child replaced a population member.
    pub replacements: usize,

    /// Best fitness in the population, initially and after each generation.
    ///
    /// Has `generations + 1` entries and is non-decreasing.
    pub fitness_history: Vec<f64>,
}

/// Executes the steady-state GA.
///
/// # Usage
///
/// ```ignore
/// let problem = GroupingProblem::new(entities, 3, Objective::Preferences)?;
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the selection strategy from `config`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Solution> {
        Self::run_with_selection(problem, config, &config.selection)
    }

    /// Runs the GA with a caller-supplied parent selection strategy.
    ///
    /// `config.selection` is ignored.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_selection<P: GaProblem, S: ParentSelection>(
        problem: &P,
        config: &GaConfig,
        selection: &S,
    ) -> GaResult<P::Solution> {
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // 1. Initialize population
        let mut population: Vec<P::Solution> = (0..config.population_size)
            .map(|_| problem.create_solution(&mut rng))
            .collect();

        // 2. Evaluate initial population
        let mut fitness = evaluate_all(problem, &population, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(fitness[best_index(&fitness)]);
        let mut replacements = 0usize;

        // 3. Evolutionary loop
        for generation in 0..config.generations {
            let (p1, p2) = selection.select_parents(&fitness, &mut rng);

            let mut child = problem.crossover(&population[p1], &population[p2], &mut rng);
            if rng.random_range(0.0..1.0) < config.mutation_rate {
                problem.mutate(&mut child, &mut rng);
            }

            let child_fitness = problem.evaluate(&child);
            let worst = worst_index(&fitness);
            if child_fitness > fitness[worst] {
                population[worst] = child;
                fitness[worst] = child_fitness;
                replacements += 1;
            }

            let best_fitness = fitness[best_index(&fitness)];
            fitness_history.push(best_fitness);
            log::debug!("generation {}: best fitness {:.6}", generation + 1, best_fitness);
            problem.on_generation(generation + 1, best_fitness);
        }

        let best = best_index(&fitness);
        log::info!(
            "GA finished after {} generations ({} replacements), best fitness {:.6}",
            config.generations,
            replacements,
            fitness[best]
        );

        GaResult {
            best_fitness: fitness[best],
            best: population.swap_remove(best),
            generations: config.generations,
            replacements,
            fitness_history,
        }
    }
}

/// Evaluate every solution in the population.
fn evaluate_all<P: GaProblem>(problem: &P, population: &[P::Solution], parallel: bool) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return population.par_iter().map(|s| problem.evaluate(s)).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(|s| problem.evaluate(s)).collect()
}

/// Index of the highest fitness, first on ties.
fn best_index(fitness: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > fitness[best] {
            best = i;
        }
    }
    best
}

/// Index of the lowest fitness, first on ties.
fn worst_index(fitness: &[f64]) -> usize {
    let mut worst = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f < fitness[worst] {
            worst = i;
        }
    }
    worst
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Selection;

    // ---- OneMax: maximize the number of set bits ----

    struct OneMaxProblem {
        n: usize,
    }

    impl GaProblem for OneMaxProblem {
        type Solution = Vec<bool>;

        fn create_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
            (0..self.n).map(|_| rng.random_bool(0.5)).collect()
        }

        fn evaluate(&self, bits: &Vec<bool>) -> f64 {
            bits.iter().filter(|&&b| b).count() as f64
        }

        fn crossover<R: Rng>(&self, p1: &Vec<bool>, p2: &Vec<bool>, rng: &mut R) -> Vec<bool> {
            let point = rng.random_range(0..self.n);
            p1[..point].iter().chain(&p2[point..]).copied().collect()
        }

        fn mutate<R: Rng>(&self, bits: &mut Vec<bool>, rng: &mut R) {
            let idx = rng.random_range(0..self.n);
            bits[idx] = !bits[idx];
        }
    }

    #[test]
    fn test_onemax_improves() {
        let problem = OneMaxProblem { n: 20 };
        let config = GaConfig::default()
            .with_population_size(30)
            .with_generations(2000)
            .with_mutation_rate(0.5)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config);

        assert!(
            result.best_fitness >= 15.0,
            "expected fitness >= 15 for 20-bit OneMax, got {}",
            result.best_fitness
        );
        assert!(result.best_fitness >= result.fitness_history[0]);
    }

    #[test]
    fn test_fitness_history_monotone() {
        let problem = OneMaxProblem { n: 16 };
        for selection in [
            Selection::Elitist,
            Selection::Roulette,
            Selection::Tournament(2),
            Selection::Rank,
        ] {
            let config = GaConfig::default()
                .with_population_size(10)
                .with_generations(200)
                .with_selection(selection)
                .with_seed(7);
            let result = GaRunner::run(&problem, &config);
            for w in result.fitness_history.windows(2) {
                assert!(w[1] >= w[0], "{selection:?}: {} < {}", w[1], w[0]);
            }
        }
    }

    #[test]
    fn test_fitness_history_length() {
        let problem = OneMaxProblem { n: 8 };
        let config = GaConfig::default().with_generations(30).with_seed(1);
        let result = GaRunner::run(&problem, &config);
        assert_eq!(result.fitness_history.len(), 31);
        assert_eq!(result.generations, 30);
        assert_eq!(result.best_fitness, *result.fitness_history.last().unwrap());
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let problem = OneMaxProblem { n: 8 };
        let config = GaConfig::default().with_generations(0).with_seed(1);
        let result = GaRunner::run(&problem, &config);
        assert_eq!(result.fitness_history.len(), 1);
        assert_eq!(result.replacements, 0);
        assert_eq!(problem.evaluate(&result.best), result.best_fitness);
    }

    #[test]
    fn test_seed_reproducibility() {
        let problem = OneMaxProblem { n: 12 };
        let config = GaConfig::default().with_generations(100).with_seed(99);
        let a = GaRunner::run(&problem, &config);
        let b = GaRunner::run(&problem, &config);
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    struct FirstTwo;

    impl ParentSelection for FirstTwo {
        fn select_parents<R: Rng>(&self, _fitness: &[f64], _rng: &mut R) -> (usize, usize) {
            (0, 1)
        }
    }

    #[test]
    fn test_custom_selection_strategy() {
        let problem = OneMaxProblem { n: 8 };
        let config = GaConfig::default().with_generations(20).with_seed(3);
        let result = GaRunner::run_with_selection(&problem, &config, &FirstTwo);
        assert_eq!(result.fitness_history.len(), 21);
    }

    #[test]
    #[should_panic(expected = "invalid GaConfig")]
    fn test_population_of_one_rejected() {
        let problem = OneMaxProblem { n: 8 };
        let config = GaConfig::default().with_population_size(1);
        GaRunner::run(&problem, &config);
    }

    #[test]
    fn test_best_and_worst_index_ties() {
        assert_eq!(best_index(&[1.0, 3.0, 3.0]), 1);
        assert_eq!(worst_index(&[2.0, 1.0, 1.0]), 1);
    }
}
