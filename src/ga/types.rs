//! Core trait definitions for the GA engine.
//!
//! [`GaProblem`] is the contract between the steady-state GA loop and a
//! concrete solution representation.

use rand::Rng;

/// Defines a GA optimization problem.
///
/// The engine **maximizes** fitness: higher values are better.
///
/// 1. **Initialization**: how to create a random solution
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to perturb a solution
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the initial population may be
/// evaluated in parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The solution representation.
    type Solution: Clone + Send + Sync;

    /// Creates a random valid solution.
    fn create_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Evaluates a solution. Higher is better.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Produces one child from two parents.
    ///
    /// The default implementation clones `parent1` (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Solution,
        _parent2: &Self::Solution,
        _rng: &mut R,
    ) -> Self::Solution {
        parent1.clone()
    }

    /// Mutates a solution in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _solution: &mut Self::Solution, _rng: &mut R) {}

    /// Called at the end of each generation with the best fitness so far.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}
