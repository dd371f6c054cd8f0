//! Adjacent-swap insertion sort.
//!
//! Best case O(n) on sorted input, O(n^2) average and worst case. Elements are
//! only swapped past strictly greater neighbours, so equal elements keep their
//! relative order.

use seqalgo_core::{check_endpoints, Index, Result};
use seqalgo_ops::swap;

/// Sort the whole slice. An empty slice is treated as the range `(0, 0)`.
pub fn insertion_sort<T: Ord>(seq: &mut [T]) -> Result<()> {
    let hi = seq.len().saturating_sub(1) as Index;
    insertion_sort_in_range(seq, 0, hi)
}

/// Sort `seq[lo..=hi]`, leaving everything outside the range untouched.
///
/// `lo == hi` returns immediately, before any validation. Otherwise fails with
/// `InvalidRange` when `lo > hi` and `IndexOutOfBounds` when the range does
/// not fit the slice.
pub fn insertion_sort_in_range<T: Ord>(seq: &mut [T], lo: Index, hi: Index) -> Result<()> {
    if lo == hi {
        return Ok(());
    }
    check_endpoints(seq.len(), lo, hi)?;

    for i in lo + 1..=hi {
        let mut k = i;
        while k > lo && seq[k as usize] < seq[(k - 1) as usize] {
            swap(seq, k, k - 1)?;
            k -= 1;
        }
    }
    Ok(())
}
