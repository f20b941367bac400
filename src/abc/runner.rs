//! ABC execution loop.
//!
//! One iteration runs three phases over a fixed-size colony:
//!
//! 1. **Employed**: every source tries one neighbour; a strict improvement
//!    replaces it and clears its trial counter, otherwise the counter grows.
//! 2. **Onlooker**: `colony_size` roulette draws pick sources to try one
//!    more neighbour each; improvements replace the source but leave its
//!    trial counter alone.
//! 3. **Scout**: sources whose counter exceeds `stagnation_limit` are
//!    abandoned and replaced by a fresh random solution.
//!
//! The global best is threaded through the loop as an explicit value and
//! only ever improves.

use super::config::{AbcConfig, BestTracking, OnlookerWeighting};
use super::types::AbcProblem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an ABC run.
#[derive(Debug, Clone)]
pub struct AbcResult<S: Clone> {
    /// The returned solution, chosen by [`AbcConfig::best_tracking`].
    pub best: S,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Best fitness seen over the whole run.
    ///
    /// Equals `best_fitness` under [`BestTracking::Global`].
    pub global_best_fitness: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Number of sources abandoned by scouts.
    pub scout_resets: usize,

    /// Number of iterations whose onlooker phase was skipped.
    pub skipped_onlooker_phases: usize,

    /// Global best fitness, initially and after each iteration.
    ///
    /// Has `iterations + 1` entries and is non-decreasing.
    pub fitness_history: Vec<f64>,

    /// Best fitness inside the colony, initially and after each iteration.
    ///
    /// May decrease when a scout abandons the best source.
    pub colony_history: Vec<f64>,
}

/// A candidate solution with its cached fitness and trial counter.
#[derive(Debug, Clone)]
pub(crate) struct FoodSource<S> {
    pub(crate) solution: S,
    pub(crate) fitness: f64,
    pub(crate) trials: usize,
}

/// Best solution observed so far.
#[derive(Debug, Clone)]
pub(crate) struct GlobalBest<S> {
    pub(crate) solution: S,
    pub(crate) fitness: f64,
}

/// Outcome of one onlooker phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OnlookerOutcome {
    /// The phase ran; the count is the number of improving draws.
    Ran(usize),
    /// Total fitness was exactly zero.
    SkippedZeroSum,
    /// Raw weights were negative or non-finite.
    SkippedUndefined,
}

/// Executes the Artificial Bee Colony algorithm.
pub struct AbcRunner;

impl AbcRunner {
    /// Runs ABC optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AbcConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: AbcProblem>(problem: &P, config: &AbcConfig) -> AbcResult<P::Solution> {
        config.validate().expect("invalid AbcConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Initialize
        let solutions: Vec<P::Solution> = (0..config.colony_size)
            .map(|_| problem.create_solution(&mut rng))
            .collect();
        let fitness = evaluate_all(problem, &solutions, config.parallel);
        let mut colony: Vec<FoodSource<P::Solution>> = solutions
            .into_iter()
            .zip(fitness)
            .map(|(solution, fitness)| FoodSource {
                solution,
                fitness,
                trials: 0,
            })
            .collect();

        let start = colony_best(&colony);
        let mut global = GlobalBest {
            solution: colony[start].solution.clone(),
            fitness: colony[start].fitness,
        };

        let mut fitness_history = Vec::with_capacity(config.max_iterations + 1);
        let mut colony_history = Vec::with_capacity(config.max_iterations + 1);
        fitness_history.push(global.fitness);
        colony_history.push(global.fitness);

        let mut scout_resets = 0usize;
        let mut skipped_onlooker_phases = 0usize;

        for iter in 0..config.max_iterations {
            employed_phase(problem, &mut colony, &mut rng);

            match onlooker_phase(problem, &mut colony, config.onlooker_weighting, &mut rng) {
                OnlookerOutcome::Ran(improved) => {
                    log::trace!("iteration {}: {} onlooker improvements", iter + 1, improved);
                }
                skipped => {
                    log::debug!("iteration {}: onlooker phase skipped ({:?})", iter + 1, skipped);
                    skipped_onlooker_phases += 1;
                }
            }

            scout_resets += scout_phase(problem, &mut colony, config.stagnation_limit, &mut rng);

            global = update_global_best(global, &colony);

            let colony_fitness = colony[colony_best(&colony)].fitness;
            fitness_history.push(global.fitness);
            colony_history.push(colony_fitness);
            log::debug!(
                "iteration {}: best fitness {:.6} (colony {:.6})",
                iter + 1,
                global.fitness,
                colony_fitness
            );
            problem.on_iteration(iter + 1, global.fitness);
        }

        log::info!(
            "ABC finished after {} iterations ({} scout resets), best fitness {:.6}",
            config.max_iterations,
            scout_resets,
            global.fitness
        );

        let global_best_fitness = global.fitness;
        let (best, best_fitness) = match config.best_tracking {
            BestTracking::Global => (global.solution, global.fitness),
            BestTracking::FinalColony => {
                let i = colony_best(&colony);
                let source = colony.swap_remove(i);
                (source.solution, source.fitness)
            }
        };

        AbcResult {
            best,
            best_fitness,
            global_best_fitness,
            iterations: config.max_iterations,
            scout_resets,
            skipped_onlooker_phases,
            fitness_history,
            colony_history,
        }
    }
}

/// Employed bees: one neighbour per source.
pub(crate) fn employed_phase<P: AbcProblem, R: Rng>(
    problem: &P,
    colony: &mut [FoodSource<P::Solution>],
    rng: &mut R,
) {
    for source in colony.iter_mut() {
        let candidate = problem.neighbor(&source.solution, rng);
        let fitness = problem.evaluate(&candidate);
        if fitness > source.fitness {
            source.solution = candidate;
            source.fitness = fitness;
            source.trials = 0;
        } else {
            source.trials += 1;
        }
    }
}

/// Onlooker bees: `colony.len()` fitness-proportional draws.
///
/// Probabilities are fixed at the start of the phase.
pub(crate) fn onlooker_phase<P: AbcProblem, R: Rng>(
    problem: &P,
    colony: &mut [FoodSource<P::Solution>],
    weighting: OnlookerWeighting,
    rng: &mut R,
) -> OnlookerOutcome {
    let weights = match onlooker_weights(colony, weighting) {
        Ok(w) => w,
        Err(skipped) => return skipped,
    };
    let total: f64 = weights.iter().sum();

    let mut improved = 0usize;
    for _ in 0..colony.len() {
        let chosen = draw(&weights, total, rng);
        let source = &mut colony[chosen];
        let candidate = problem.neighbor(&source.solution, rng);
        let fitness = problem.evaluate(&candidate);
        if fitness > source.fitness {
            source.solution = candidate;
            source.fitness = fitness;
            improved += 1;
        }
    }
    OnlookerOutcome::Ran(improved)
}

fn onlooker_weights<S>(
    colony: &[FoodSource<S>],
    weighting: OnlookerWeighting,
) -> Result<Vec<f64>, OnlookerOutcome> {
    let fitness: Vec<f64> = colony.iter().map(|s| s.fitness).collect();
    match weighting {
        OnlookerWeighting::Raw => {
            let total: f64 = fitness.iter().sum();
            if total == 0.0 {
                return Err(OnlookerOutcome::SkippedZeroSum);
            }
            if !total.is_finite() || fitness.iter().any(|&f| f < 0.0 || !f.is_finite()) {
                return Err(OnlookerOutcome::SkippedUndefined);
            }
            Ok(fitness)
        }
        OnlookerWeighting::Shifted => {
            let min = fitness.iter().cloned().fold(f64::INFINITY, f64::min);
            if !min.is_finite() {
                return Err(OnlookerOutcome::SkippedUndefined);
            }
            let epsilon = 1e-10;
            Ok(fitness.iter().map(|&f| f - min + epsilon).collect())
        }
    }
}

/// Roulette draw from non-negative weights summing to `total > 0`.
fn draw<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    weights.len() - 1 // floating-point fallback
}

/// Scout bees: abandon sources past the trial limit. Returns the number
/// of sources replaced.
pub(crate) fn scout_phase<P: AbcProblem, R: Rng>(
    problem: &P,
    colony: &mut [FoodSource<P::Solution>],
    limit: usize,
    rng: &mut R,
) -> usize {
    let mut resets = 0;
    for source in colony.iter_mut().filter(|s| s.trials > limit) {
        let solution = problem.create_solution(rng);
        source.fitness = problem.evaluate(&solution);
        source.solution = solution;
        source.trials = 0;
        resets += 1;
    }
    resets
}

/// Returns the better of `current` and the colony's best member.
pub(crate) fn update_global_best<S: Clone>(
    current: GlobalBest<S>,
    colony: &[FoodSource<S>],
) -> GlobalBest<S> {
    let i = colony_best(colony);
    if colony[i].fitness > current.fitness {
        GlobalBest {
            solution: colony[i].solution.clone(),
            fitness: colony[i].fitness,
        }
    } else {
        current
    }
}

/// Index of the fittest source, first on ties.
fn colony_best<S>(colony: &[FoodSource<S>]) -> usize {
    let mut best = 0;
    for (i, source) in colony.iter().enumerate().skip(1) {
        if source.fitness > colony[best].fitness {
            best = i;
        }
    }
    best
}

fn evaluate_all<P: AbcProblem>(problem: &P, solutions: &[P::Solution], parallel: bool) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return solutions.par_iter().map(|s| problem.evaluate(s)).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    solutions.iter().map(|s| problem.evaluate(s)).collect()
}
