//! Recursive binary search.
//!
//! Each step probes `mid = (lo + hi) / 2` (floor, for the non-negative ranges
//! used here) and recurses into `[lo, mid - 1]` or `[mid + 1, hi]`. An empty
//! range (`lo > hi`) is a miss.

use std::cmp::Ordering;

use seqalgo_core::{full_range, Index};

/// Position of some element equal to `target` in a slice sorted ascending.
///
/// With duplicates this is whichever occurrence the midpoint path hits first,
/// not necessarily the leftmost.
pub fn binary_search<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    let (lo, hi) = full_range(seq.len());
    binary_search_in_range(seq, lo, hi, target)
}

/// Binary search restricted to `seq[lo..=hi]`, which must be sorted ascending.
///
/// Endpoints are not validated. A probe that falls outside the slice ends the
/// search with `None`.
pub fn binary_search_in_range<T: Ord>(
    seq: &[T],
    lo: Index,
    hi: Index,
    target: &T,
) -> Option<usize> {
    if lo > hi {
        return None;
    }

    let mid = midpoint(lo, hi);
    let probe = usize::try_from(mid).ok().and_then(|m| seq.get(m))?;

    #[cfg(feature = "tracing")]
    tracing::trace!(lo, hi, mid, "binary search probe");

    match target.cmp(probe) {
        Ordering::Equal => Some(mid as usize),
        Ordering::Less => binary_search_in_range(seq, lo, mid - 1, target),
        Ordering::Greater => binary_search_in_range(seq, mid + 1, hi, target),
    }
}

/// `floor((lo + hi) / 2)` without overflowing for any pair of endpoints.
fn midpoint(lo: Index, hi: Index) -> Index {
    (lo >> 1) + (hi >> 1) + (lo & hi & 1)
}
