//! Steady-state Genetic Algorithm.
//!
//! A generic GA engine built on the [`GaProblem`] trait. Each generation
//! selects two parents, recombines them into a single child, mutates the
//! child with probability `mutation_rate`, and lets it replace the worst
//! member of the population if it is strictly fitter.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, generations, mutation rate, selection
//! - [`Selection`] / [`ParentSelection`]: Built-in and pluggable parent selection
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best solution and fitness trajectory
//!
//! # Operators
//!
//! - [`coverage_crossover`]: Partition recombination with coverage repair
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//!   (steady-state replacement)

mod config;
mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::coverage_crossover;
pub use runner::{GaResult, GaRunner};
pub use selection::{ParentSelection, Selection};
pub use types::GaProblem;
