//! Error types.
//!
//! Input problems (bad entity lists, unknown criterion scales, broken
//! partitions) surface as [`GroupingError`]. Engine parameter problems
//! surface as [`ConfigError`] and are nested into [`GroupingError`] by the
//! convenience entry points.

use crate::entity::EntityId;

/// Errors raised while building or validating a grouping problem.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GroupingError {
    #[error("entity list must not be empty")]
    NoEntities,

    #[error("group count must be at least 1")]
    ZeroGroups,

    #[error("{groups} groups for {entities} entities leaves no group with two members")]
    TooManyGroups { groups: usize, entities: usize },

    #[error("entity id {0} appears more than once")]
    DuplicateEntityId(EntityId),

    #[error("unknown criterion scale {0:?} (expected \"0-1\", \"0-10\" or \"0-100\")")]
    UnknownCriterionScale(String),

    #[error("invalid partition: {0}")]
    InvalidPartition(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Engine configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("colony size must be at least 2, got {0}")]
    ColonyTooSmall(usize),

    #[error("mutation rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("tournament size must be at least 1")]
    EmptyTournament,
}
