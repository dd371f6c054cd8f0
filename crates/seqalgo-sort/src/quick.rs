//! Quicksort and hybrid quicksort.
//!
//! Partitioning is Lomuto-style around the last element of the range. Only
//! elements strictly less than the pivot move into the left partition, so
//! elements equal to the pivot end up to its right.
//!
//! The driver recurses into the smaller side of each split and loops on the
//! larger one, which keeps the call depth at O(log n) even on sorted or
//! reverse-sorted input. The sides are disjoint, so the visiting order does
//! not change the output.

use seqalgo_core::{Error, Index, Result};
use seqalgo_ops::swap;

use crate::insertion::insertion_sort_in_range;

/// Sort the whole slice with plain quicksort.
///
/// Average O(n log n), worst case O(n^2). Not stable.
pub fn quick_sort<T: Ord>(seq: &mut [T]) -> Result<()> {
    let hi = seq.len() as Index - 1;
    quick_sort_in_range(seq, 0, hi)
}

/// Sort `seq[lo..=hi]` with plain quicksort.
///
/// Fails with `IndexOutOfBounds` when `lo < 0` or `hi >= len`. A range with
/// `lo >= hi` is a no-op.
pub fn quick_sort_in_range<T: Ord>(seq: &mut [T], lo: Index, hi: Index) -> Result<()> {
    check_bounds(seq.len(), lo, hi)?;
    sort_range(seq, lo, hi, None)
}

/// Sort the whole slice with quicksort, switching to insertion sort for any
/// range of at most `threshold` elements.
pub fn hybrid_quick_sort<T: Ord>(seq: &mut [T], threshold: usize) -> Result<()> {
    let hi = seq.len() as Index - 1;
    hybrid_quick_sort_in_range(seq, 0, hi, threshold)
}

/// Hybrid quicksort of `seq[lo..=hi]`.
///
/// `threshold` of `0` or `1` never triggers the insertion-sort fallback, so
/// the result matches [`quick_sort_in_range`]. A threshold at least as large
/// as the range sorts it with a single insertion-sort pass.
pub fn hybrid_quick_sort_in_range<T: Ord>(
    seq: &mut [T],
    lo: Index,
    hi: Index,
    threshold: usize,
) -> Result<()> {
    check_bounds(seq.len(), lo, hi)?;
    sort_range(seq, lo, hi, Some(threshold))
}

/// Only the bounds are checked here: a reversed range is an empty sort.
fn check_bounds(len: usize, lo: Index, hi: Index) -> Result<()> {
    if lo < 0 || hi >= len as Index {
        #[cfg(feature = "tracing")]
        tracing::trace!(len, lo, hi, "quick sort rejected range");
        return Err(Error::IndexOutOfBounds { lo, hi, len });
    }
    Ok(())
}

fn sort_range<T: Ord>(
    seq: &mut [T],
    mut lo: Index,
    mut hi: Index,
    threshold: Option<usize>,
) -> Result<()> {
    while lo < hi {
        if let Some(k) = threshold {
            if ((hi - lo + 1) as usize) <= k {
                #[cfg(feature = "tracing")]
                tracing::trace!(lo, hi, threshold = k, "insertion sort fallback");
                return insertion_sort_in_range(seq, lo, hi);
            }
        }

        let mid = partition(seq, lo, hi)?;
        if mid - lo < hi - mid {
            sort_range(seq, lo, mid - 1, threshold)?;
            lo = mid + 1;
        } else {
            sort_range(seq, mid + 1, hi, threshold)?;
            hi = mid - 1;
        }
    }
    Ok(())
}

/// Partition `seq[lo..=hi]` around `seq[hi]` and return the pivot's final position.
fn partition<T: Ord>(seq: &mut [T], lo: Index, hi: Index) -> Result<Index> {
    // Last slot of the "strictly less than pivot" prefix.
    let mut end_less = lo - 1;
    for i in lo..hi {
        if seq[i as usize] < seq[hi as usize] {
            swap(seq, end_less + 1, i)?;
            end_less += 1;
        }
    }
    swap(seq, end_less + 1, hi)?;

    #[cfg(feature = "tracing")]
    tracing::trace!(lo, hi, split = end_less + 1, "partitioned");
    Ok(end_less + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tagged(i32, char);

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    fn tags(v: &[Tagged]) -> String {
        v.iter().map(|t| t.1).collect()
    }

    #[test]
    fn quick_sort_basic() {
        let mut v = [3, 6, 4, -8, 5, 9, 5];
        quick_sort(&mut v).unwrap();
        assert_eq!(v, [-8, 3, 4, 5, 5, 6, 9]);
    }

    #[test]
    fn hybrid_sort_basic() {
        let mut v = [3, 6, 4, -8, 5, 9, 5];
        hybrid_quick_sort(&mut v, 3).unwrap();
        assert_eq!(v, [-8, 3, 4, 5, 5, 6, 9]);
    }

    #[test]
    fn empty_is_noop() {
        let mut empty: Vec<i32> = vec![];
        quick_sort(&mut empty).unwrap();
        hybrid_quick_sort(&mut empty, 3).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn in_range_leaves_outside_untouched() {
        let mut v = [3, 6, 4, -8, 5, 9, 5];
        quick_sort_in_range(&mut v, 1, 4).unwrap();
        assert_eq!(v, [3, -8, 4, 5, 6, 9, 5]);

        let mut v = [3, 6, 4, -8, 5, 9, 5];
        hybrid_quick_sort_in_range(&mut v, 1, 4, 3).unwrap();
        assert_eq!(v, [3, -8, 4, 5, 6, 9, 5]);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut v = [3, 6, 4, -8, 5, 9, 5];
        assert_eq!(
            quick_sort_in_range(&mut v, -5, 4),
            Err(Error::IndexOutOfBounds { lo: -5, hi: 4, len: 7 })
        );
        assert!(hybrid_quick_sort_in_range(&mut v, -5, 4, 3).is_err());
        assert!(quick_sort_in_range(&mut v, 0, 7).is_err());
        assert_eq!(v, [3, 6, 4, -8, 5, 9, 5]);
    }

    #[test]
    fn reversed_range_is_noop() {
        let mut v = [3, 2, 1];
        quick_sort_in_range(&mut v, 2, 0).unwrap();
        hybrid_quick_sort_in_range(&mut v, 2, 1, 5).unwrap();
        assert_eq!(v, [3, 2, 1]);
    }

    #[test]
    fn partition_places_pivot_and_keeps_equals_right() {
        let mut v = vec![Tagged(1, 'a'), Tagged(0, 'b'), Tagged(1, 'c')];
        let split = partition(&mut v, 0, 2).unwrap();
        assert_eq!(split, 1);
        // 'a' equals the pivot and is not moved into the "less" prefix.
        assert_eq!(tags(&v), "bca");
    }

    #[test]
    fn quick_sort_tie_order_is_fixed() {
        let mut v = vec![Tagged(1, 'a'), Tagged(0, 'b'), Tagged(1, 'c')];
        quick_sort(&mut v).unwrap();
        assert_eq!(tags(&v), "bca");
    }

    #[test]
    fn large_threshold_matches_insertion_sort() {
        let original = vec![
            Tagged(2, 'a'),
            Tagged(1, 'b'),
            Tagged(2, 'c'),
            Tagged(0, 'd'),
            Tagged(1, 'e'),
        ];
        let mut hybrid = original.clone();
        hybrid_quick_sort(&mut hybrid, original.len()).unwrap();
        let mut insertion = original.clone();
        crate::insertion::insertion_sort(&mut insertion).unwrap();
        assert_eq!(tags(&hybrid), tags(&insertion));
        assert_eq!(tags(&hybrid), "dbeac");
    }

    #[test]
    fn small_threshold_matches_quick_sort() {
        let original = vec![
            Tagged(2, 'a'),
            Tagged(1, 'b'),
            Tagged(2, 'c'),
            Tagged(0, 'd'),
            Tagged(1, 'e'),
        ];
        for k in [0, 1] {
            let mut hybrid = original.clone();
            hybrid_quick_sort(&mut hybrid, k).unwrap();
            let mut quick = original.clone();
            quick_sort(&mut quick).unwrap();
            assert_eq!(tags(&hybrid), tags(&quick));
        }
    }

    #[test]
    fn sorted_and_reversed_inputs_do_not_overflow_the_stack() {
        let mut asc: Vec<u32> = (0..5_000).collect();
        quick_sort(&mut asc).unwrap();
        assert!(asc.windows(2).all(|w| w[0] <= w[1]));

        let mut desc: Vec<u32> = (0..5_000).rev().collect();
        hybrid_quick_sort(&mut desc, 8).unwrap();
        assert!(desc.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn random_inputs_match_std_sort() {
        let mut rng = StdRng::seed_from_u64(0x9e37);
        for len in [0usize, 1, 2, 5, 17, 64, 300] {
            let original: Vec<i32> = (0..len).map(|_| rng.gen_range(-20..=20)).collect();
            let mut expected = original.clone();
            expected.sort();

            let mut quick = original.clone();
            quick_sort(&mut quick).unwrap();
            assert_eq!(quick, expected, "quick len={}", len);

            for k in [0, 3, 12] {
                let mut hybrid = original.clone();
                hybrid_quick_sort(&mut hybrid, k).unwrap();
                assert_eq!(hybrid, expected, "hybrid len={} k={}", len, k);
            }
        }
    }
}
