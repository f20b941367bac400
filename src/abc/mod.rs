//! Artificial Bee Colony (ABC).
//!
//! A swarm metaheuristic that keeps a colony of food sources (candidate
//! solutions). Employed bees refine each source locally, onlooker bees
//! concentrate extra refinement on the fitter sources, and scout bees
//! abandon sources that have stopped improving.
//!
//! # References
//!
//! - Karaboga (2005), "An Idea Based on Honey Bee Swarm for Numerical
//!   Optimization", Technical Report TR06, Erciyes University
//! - Karaboga & Basturk (2007), "A powerful and efficient algorithm for
//!   numerical function optimization: artificial bee colony (ABC) algorithm"

mod config;
mod runner;
mod types;

pub use config::{AbcConfig, BestTracking, OnlookerWeighting};
pub use runner::{AbcResult, AbcRunner};
pub use types::AbcProblem;
