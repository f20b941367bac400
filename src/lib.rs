//! Balanced group partitioning with metaheuristic search.
//!
//! Splits a fixed set of entities into a fixed number of equally sized
//! groups, maximizing a fitness that rewards:
//!
//! - **Score diversity**: each group's member scores are spread out, and
//!   that spread is uniform across groups
//! - **Preference satisfaction** (optional): each entity shares a group
//!   with at least one of its preferred peers
//!
//! Two engines search the same problem:
//!
//! - **Genetic Algorithm ([`ga`])**: steady-state, elitist parent selection
//!   by default, coverage-repairing crossover, swap mutation.
//! - **Artificial Bee Colony ([`abc`])**: employed / onlooker / scout
//!   phases over a colony of partitions, with a tracked global best.
//!
//! Both share one representation ([`Partition`]), one fitness function
//! ([`FitnessEvaluator`]), two initializers ([`Initializer`]) and one
//! neighbourhood move ([`swap_move`]).
//!
//! # Quick start
//!
//! ```
//! use u_grouping::{run_abc, run_genetic, Entity};
//!
//! let entities: Vec<Entity> = (1..=12)
//!     .map(|i| Entity::new(i, (i * 37 % 100) as f64).with_preferences(vec![i % 12 + 1]))
//!     .collect();
//!
//! let ga = run_genetic(&entities, 3, 10, 100, 0.3, true).unwrap();
//! let abc = run_abc(&entities, 3, 50, 3, true).unwrap();
//! assert!(ga.validate(entities.len()).is_ok());
//! assert!(abc.validate(entities.len()).is_ok());
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate initial populations and colonies with rayon
//! - `serde`: `Serialize`/`Deserialize` for entities, criteria and partitions

pub mod abc;
pub mod entity;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod init;
pub mod partition;
pub mod problem;
pub mod solve;
pub mod swap;

pub use entity::{Criterion, CriterionScale, Entity, EntityId};
pub use error::{ConfigError, GroupingError};
pub use fitness::{FitnessBreakdown, FitnessEvaluator, Objective, ScoreMode};
pub use init::Initializer;
pub use partition::Partition;
pub use problem::GroupingProblem;
pub use solve::{run_abc, run_genetic};
pub use swap::swap_move;
