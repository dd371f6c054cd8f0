//! Config-driven dispatch and the `Sorter` trait.
//!
//! Callers that pick an algorithm at runtime (from a [`SortConfig`]) use
//! [`sort_with`]; callers that want to pass an algorithm around as a value,
//! such as a benchmark harness timing several sorts on the same input, use
//! the [`Sorter`] implementations.

use seqalgo_core::{Index, Result, SortConfig, SortStrategy};

use crate::insertion::{insertion_sort, insertion_sort_in_range};
use crate::quick::{hybrid_quick_sort, hybrid_quick_sort_in_range, quick_sort, quick_sort_in_range};

/// An in-place sorting algorithm.
pub trait Sorter {
    /// Human-readable algorithm name (stable).
    fn name(&self) -> &'static str;

    /// Sort the whole slice.
    fn sort<T: Ord>(&self, seq: &mut [T]) -> Result<()>;

    /// Sort `seq[lo..=hi]`, with the validation rules of the underlying algorithm.
    fn sort_range<T: Ord>(&self, seq: &mut [T], lo: Index, hi: Index) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSorter;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSorter;

#[derive(Debug, Clone, Copy)]
pub struct HybridQuickSorter {
    pub threshold: usize,
}

impl Sorter for InsertionSorter {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn sort<T: Ord>(&self, seq: &mut [T]) -> Result<()> {
        insertion_sort(seq)
    }

    fn sort_range<T: Ord>(&self, seq: &mut [T], lo: Index, hi: Index) -> Result<()> {
        insertion_sort_in_range(seq, lo, hi)
    }
}

impl Sorter for QuickSorter {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn sort<T: Ord>(&self, seq: &mut [T]) -> Result<()> {
        quick_sort(seq)
    }

    fn sort_range<T: Ord>(&self, seq: &mut [T], lo: Index, hi: Index) -> Result<()> {
        quick_sort_in_range(seq, lo, hi)
    }
}

impl Sorter for HybridQuickSorter {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn sort<T: Ord>(&self, seq: &mut [T]) -> Result<()> {
        hybrid_quick_sort(seq, self.threshold)
    }

    fn sort_range<T: Ord>(&self, seq: &mut [T], lo: Index, hi: Index) -> Result<()> {
        hybrid_quick_sort_in_range(seq, lo, hi, self.threshold)
    }
}

/// Sort the whole slice with the algorithm selected by `cfg`.
pub fn sort_with<T: Ord>(seq: &mut [T], cfg: &SortConfig) -> Result<()> {
    match cfg.strategy {
        SortStrategy::Insertion => InsertionSorter.sort(seq),
        SortStrategy::Quick => QuickSorter.sort(seq),
        SortStrategy::Hybrid => HybridQuickSorter {
            threshold: cfg.hybrid_threshold,
        }
        .sort(seq),
    }
}

/// Sort `seq[lo..=hi]` with the algorithm selected by `cfg`.
pub fn sort_range_with<T: Ord>(
    seq: &mut [T],
    lo: Index,
    hi: Index,
    cfg: &SortConfig,
) -> Result<()> {
    match cfg.strategy {
        SortStrategy::Insertion => InsertionSorter.sort_range(seq, lo, hi),
        SortStrategy::Quick => QuickSorter.sort_range(seq, lo, hi),
        SortStrategy::Hybrid => HybridQuickSorter {
            threshold: cfg.hybrid_threshold,
        }
        .sort_range(seq, lo, hi),
    }
}
