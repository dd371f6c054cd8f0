#![forbid(unsafe_code)]
//! seqalgo-sort: in-place insertion sort and (hybrid) quicksort.
//!
//! All sorts operate on `&mut [T]` with `T: Ord`, mutate through
//! `seqalgo_ops::swap`, and validate their endpoints before the first write.
//!
//! - [`insertion_sort`]: adjacent-swap insertion sort, stable.
//! - [`quick_sort`]: Lomuto partition around the last element of the range.
//! - [`hybrid_quick_sort`]: quicksort that hands small ranges to insertion sort.
//! - [`strategy`]: config-driven dispatch and the [`Sorter`] trait.

pub mod insertion;
pub mod quick;
pub mod strategy;

pub use insertion::{insertion_sort, insertion_sort_in_range};
pub use quick::{hybrid_quick_sort, hybrid_quick_sort_in_range, quick_sort, quick_sort_in_range};
pub use strategy::{
    sort_range_with, sort_with, HybridQuickSorter, InsertionSorter, QuickSorter, Sorter,
};
