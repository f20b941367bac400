//! Single-swap neighbourhood move.
//!
//! Exchanges one random member between two distinct random groups. This is
//! the only move either engine uses: GA mutation and every ABC bee phase
//! reduce to it.

use crate::partition::Partition;
use rand::Rng;

/// Returns a copy of `partition` with one member of group `a` exchanged
/// for one member of group `b`, both chosen uniformly at random.
///
/// Group sizes and coverage are unchanged. With fewer than two groups, or
/// when either chosen group is empty, the copy is returned unchanged.
///
/// # Complexity
/// O(n) for the copy, O(1) for the move.
pub fn swap_move<R: Rng>(partition: &Partition, rng: &mut R) -> Partition {
    let mut next = partition.clone();
    swap_in_place(&mut next, rng);
    next
}

/// In-place form of [`swap_move`]. Returns `true` if a swap happened.
pub fn swap_in_place<R: Rng>(partition: &mut Partition, rng: &mut R) -> bool {
    let k = partition.num_groups();
    if k < 2 {
        return false;
    }
    let (a, b) = distinct_pair(k, rng);

    let groups = partition.groups_mut();
    if groups[a].is_empty() || groups[b].is_empty() {
        return false;
    }
    let i = rng.random_range(0..groups[a].len());
    let j = rng.random_range(0..groups[b].len());

    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (left, right) = groups.split_at_mut(hi);
    let (gi, gj) = if a < b { (i, j) } else { (j, i) };
    std::mem::swap(&mut left[lo][gi], &mut right[0][gj]);
    true
}

/// Two distinct indices drawn uniformly from `0..n`.
///
/// # Panics
/// Panics if `n < 2`.
pub(crate) fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two items to pick a distinct pair");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Partition {
        Partition::from_groups(vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7]])
    }

    #[test]
    fn test_swap_preserves_sizes_and_coverage() {
        let original = sample();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let next = swap_move(&original, &mut rng);
            assert_eq!(next.group_sizes(), original.group_sizes());
            assert!(next.validate(8).is_ok());
        }
    }

    #[test]
    fn test_swap_changes_exactly_two_groups() {
        let original = sample();
        let mut rng = StdRng::seed_from_u64(7);
        let next = swap_move(&original, &mut rng);
        let changed = original
            .groups()
            .iter()
            .zip(next.groups())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 2);
    }

    #[test]
    fn test_original_untouched() {
        let original = sample();
        let snapshot = original.clone();
        let mut rng = StdRng::seed_from_u64(1);
        let _ = swap_move(&original, &mut rng);
        assert_eq!(original, snapshot);
    }

    #[test]
    fn test_single_group_is_noop() {
        let original = Partition::from_groups(vec![vec![0, 1, 2]]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(swap_move(&original, &mut rng), original);
    }

    #[test]
    fn test_empty_group_is_noop() {
        let mut p = Partition::from_groups(vec![vec![0, 1], vec![]]);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(!swap_in_place(&mut p, &mut rng));
        assert_eq!(p.group_sizes(), vec![2, 0]);
    }

    #[test]
    fn test_deterministic_under_seed() {
        let original = sample();
        let a = swap_move(&original, &mut StdRng::seed_from_u64(11));
        let b = swap_move(&original, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_pair() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let (a, b) = distinct_pair(3, &mut rng);
            assert_ne!(a, b);
            assert!(a < 3 && b < 3);
        }
    }
}
