//! Partition recombination.
//!
//! # Crossover
//!
//! - [`coverage_crossover`]: keep parent 1's groups, then repair coverage by
//!   adding every entity parent 1 lacks to the currently smallest group.
//!
//! Mutation is the shared single swap in [`crate::swap`].

use crate::partition::Partition;

/// Coverage-preserving crossover.
///
/// # Algorithm
///
/// 1. Seed the child with a copy of every group of `parent1`
/// 2. Walk `parent2`'s groups and members in order; each entity not yet in
///    the child is appended to the child's smallest group (first on ties)
///
/// The child covers the union of both parents' entities exactly once.
/// Group sizes are balanced greedily but no hard cap is enforced.
///
/// The child has as many groups as `parent1`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```
/// use u_grouping::ga::coverage_crossover;
/// use u_grouping::Partition;
///
/// let p1 = Partition::from_groups(vec![vec![0], vec![1]]);
/// let p2 = Partition::from_groups(vec![vec![2, 3], vec![]]);
/// let child = coverage_crossover(&p1, &p2);
/// assert_eq!(child.groups(), &[vec![0, 2], vec![1, 3]]);
/// ```
pub fn coverage_crossover(parent1: &Partition, parent2: &Partition) -> Partition {
    let mut child = parent1.clone();

    let upper = parent1
        .groups()
        .iter()
        .chain(parent2.groups())
        .flatten()
        .max()
        .map_or(0, |&m| m + 1);
    let mut present = vec![false; upper];
    for &e in parent1.groups().iter().flatten() {
        present[e] = true;
    }

    if child.num_groups() == 0 {
        return child;
    }

    for &e in parent2.groups().iter().flatten() {
        if present[e] {
            continue;
        }
        if let Some(g) = child.smallest_group() {
            child.push(g, e);
            present[e] = true;
        }
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_parents_give_copy() {
        let p = Partition::from_groups(vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(coverage_crossover(&p, &p), p);
    }

    #[test]
    fn test_child_is_parent1_when_parents_share_entities() {
        let p1 = Partition::from_groups(vec![vec![0, 1], vec![2, 3], vec![4, 5]]);
        let p2 = Partition::from_groups(vec![vec![5, 2], vec![0, 4], vec![3, 1]]);
        let child = coverage_crossover(&p1, &p2);
        assert_eq!(child, p1);
        assert!(child.validate(6).is_ok());
    }

    #[test]
    fn test_disjoint_parents_cover_union() {
        let p1 = Partition::from_groups(vec![vec![0, 1], vec![2]]);
        let p2 = Partition::from_groups(vec![vec![3], vec![4, 5]]);
        let child = coverage_crossover(&p1, &p2);
        assert!(child.validate(6).is_ok());
        assert_eq!(child.num_groups(), 2);
        assert_eq!(child.group_sizes(), vec![3, 3]);
    }

    #[test]
    fn test_missing_entities_go_to_smallest_group() {
        let p1 = Partition::from_groups(vec![vec![0, 1, 2], vec![3], vec![]]);
        let p2 = Partition::from_groups(vec![vec![4], vec![5, 6]]);
        let child = coverage_crossover(&p1, &p2);
        assert_eq!(child.groups(), &[vec![0, 1, 2], vec![3, 5], vec![4, 6]]);
    }

    #[test]
    fn test_overlapping_parents_no_duplicates() {
        let p1 = Partition::from_groups(vec![vec![0, 1], vec![2]]);
        let p2 = Partition::from_groups(vec![vec![1, 3], vec![2, 0]]);
        let child = coverage_crossover(&p1, &p2);
        assert!(child.validate(4).is_ok());
    }

    #[test]
    fn test_parents_untouched() {
        let p1 = Partition::from_groups(vec![vec![0], vec![1]]);
        let p2 = Partition::from_groups(vec![vec![2], vec![3]]);
        let (s1, s2) = (p1.clone(), p2.clone());
        let _ = coverage_crossover(&p1, &p2);
        assert_eq!(p1, s1);
        assert_eq!(p2, s2);
    }
}
