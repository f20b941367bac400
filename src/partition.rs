//! The shared solution representation.
//!
//! A [`Partition`] is a fixed number of groups, each holding indices into
//! the caller's entity slice. Groups never share storage between two
//! partitions, so cloning a partition and editing the clone leaves the
//! original untouched.

use crate::entity::{Entity, EntityId};
use crate::error::GroupingError;

/// An assignment of entities (by index) into a fixed number of groups.
///
/// # Invariants
///
/// For a partition produced by this crate's operators:
/// 1. every entity index `0..n` appears in exactly one group
/// 2. no group exceeds `ceil(n / num_groups)` members, except after
///    crossover repair (which balances greedily but has no hard cap)
///
/// Use [`validate`](Self::validate) to check invariant 1.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    groups: Vec<Vec<usize>>,
}

impl Partition {
    /// Creates a partition of `num_groups` empty groups.
    pub fn empty(num_groups: usize) -> Self {
        Self {
            groups: vec![Vec::new(); num_groups],
        }
    }

    /// Wraps existing groups of entity indices.
    pub fn from_groups(groups: Vec<Vec<usize>>) -> Self {
        Self { groups }
    }

    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Total number of placed entities across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// Members of group `i`.
    ///
    /// # Panics
    /// Panics if `i >= num_groups()`.
    pub fn group(&self, i: usize) -> &[usize] {
        &self.groups[i]
    }

    pub(crate) fn groups_mut(&mut self) -> &mut [Vec<usize>] {
        &mut self.groups
    }

    pub fn group_sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    /// Index of the smallest group, first one on ties.
    ///
    /// Returns `None` for a partition with no groups.
    pub fn smallest_group(&self) -> Option<usize> {
        self.groups
            .iter()
            .enumerate()
            .min_by_key(|(_, g)| g.len())
            .map(|(i, _)| i)
    }

    /// Appends entity `entity` to group `group`.
    pub fn push(&mut self, group: usize, entity: usize) {
        self.groups[group].push(entity);
    }

    /// Builds an entity → group lookup table of length `entity_count`.
    ///
    /// Entries for entities not present in the partition are `None`.
    /// Indices `>= entity_count` are ignored.
    pub fn assignment(&self, entity_count: usize) -> Vec<Option<usize>> {
        let mut table = vec![None; entity_count];
        for (g, members) in self.groups.iter().enumerate() {
            for &e in members {
                if let Some(slot) = table.get_mut(e) {
                    *slot = Some(g);
                }
            }
        }
        table
    }

    /// Maps the groups back to entity identifiers.
    ///
    /// # Panics
    /// Panics if the partition references an index outside `entities`.
    pub fn entity_ids(&self, entities: &[Entity]) -> Vec<Vec<EntityId>> {
        self.groups
            .iter()
            .map(|g| g.iter().map(|&e| entities[e].id()).collect())
            .collect()
    }

    /// Checks that every index in `0..entity_count` appears exactly once.
    ///
    /// # Errors
    /// [`GroupingError::InvalidPartition`] describing the first violation.
    pub fn validate(&self, entity_count: usize) -> Result<(), GroupingError> {
        let mut seen = vec![false; entity_count];
        for (g, members) in self.groups.iter().enumerate() {
            for &e in members {
                match seen.get_mut(e) {
                    None => {
                        return Err(GroupingError::InvalidPartition(format!(
                            "group {g} references entity index {e}, only {entity_count} entities exist"
                        )))
                    }
                    Some(true) => {
                        return Err(GroupingError::InvalidPartition(format!(
                            "entity index {e} appears more than once"
                        )))
                    }
                    Some(slot) => *slot = true,
                }
            }
        }
        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(GroupingError::InvalidPartition(format!(
                "entity index {missing} is not assigned to any group"
            )));
        }
        Ok(())
    }
}

/// Largest group size allowed when `entity_count` entities are spread
/// over `num_groups` groups: `ceil(entity_count / num_groups)`.
pub fn max_group_size(entity_count: usize, num_groups: usize) -> usize {
    if num_groups == 0 {
        return 0;
    }
    entity_count.div_ceil(num_groups)
}
