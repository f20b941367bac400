//! Core trait for the Artificial Bee Colony engine.

use rand::Rng;

/// Defines an ABC optimization problem.
///
/// The user supplies solution construction, evaluation, and a local
/// neighbourhood move. The ABC framework handles the employed, onlooker
/// and scout phases.
///
/// # Maximization
///
/// ABC **maximizes** fitness: higher values are better.
///
/// # Examples
///
/// ```ignore
/// struct Knapsack { values: Vec<f64> }
///
/// impl AbcProblem for Knapsack {
///     type Solution = Vec<bool>;
///
///     fn create_solution<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
///         self.values.iter().map(|_| rng.random_bool(0.5)).collect()
///     }
///
///     fn evaluate(&self, picks: &Vec<bool>) -> f64 {
///         picks.iter().zip(&self.values).filter(|(p, _)| **p).map(|(_, v)| v).sum()
///     }
///
///     fn neighbor<R: Rng>(&self, picks: &Vec<bool>, rng: &mut R) -> Vec<bool> {
///         let mut next = picks.clone();
///         let i = rng.random_range(0..next.len());
///         next[i] = !next[i];
///         next
///     }
/// }
/// ```
///
/// # References
///
/// Karaboga (2005), Karaboga & Basturk (2007)
pub trait AbcProblem: Send + Sync {
    /// The food source (solution) representation.
    type Solution: Clone + Send + Sync;

    /// Creates a fresh random solution. Used at start-up and by scouts.
    fn create_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Evaluates a solution. Higher is better.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Returns a nearby solution, leaving `solution` untouched.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;

    /// Called at the end of each iteration with the global best fitness.
    ///
    /// The default implementation is a no-op.
    fn on_iteration(&self, _iteration: usize, _best_fitness: f64) {}
}
