#![forbid(unsafe_code)]
//! seqalgo: generic in-place sequence algorithms.
//!
//! Facade over the workspace crates:
//! - [`base`]: error taxonomy, endpoint validation, sort configuration.
//! - [`ops`]: bounds-checked swap/shift and range-bounded min/max scans.
//! - [`sort`]: insertion sort, quicksort, hybrid quicksort.
//! - [`search`]: linear and recursive binary search.
//!
//! Ranges are inclusive `[lo, hi]` with signed endpoints. Every ranged
//! operation validates before its first write.
//!
//! ```
//! use seqalgo::prelude::*;
//!
//! let mut v = vec![3, 6, 4, -8, 5, 9, 5];
//! hybrid_quick_sort(&mut v, 3)?;
//! assert_eq!(v, [-8, 3, 4, 5, 5, 6, 9]);
//! assert_eq!(binary_search(&v, &6), Some(5));
//! assert_eq!(find_max(&v)?, Some(&9));
//! # Ok::<(), seqalgo::Error>(())
//! ```

pub use seqalgo_core as base;
pub use seqalgo_ops as ops;
pub use seqalgo_search as search;
pub use seqalgo_sort as sort;

pub use seqalgo_core::{Error, Index, Result, SortConfig, SortStrategy};

pub mod prelude {
    //! Everything needed to call the algorithms directly.

    pub use seqalgo_core::prelude::*;
    pub use seqalgo_ops::{
        find_max, find_max_in_range, find_max_pos, find_max_pos_in_range, find_min,
        find_min_in_range, find_min_pos, find_min_pos_in_range, shift_left, shift_right, swap,
        Extreme,
    };
    pub use seqalgo_search::{binary_search, binary_search_in_range, linear_search};
    pub use seqalgo_sort::{
        hybrid_quick_sort, hybrid_quick_sort_in_range, insertion_sort, insertion_sort_in_range,
        quick_sort, quick_sort_in_range, sort_range_with, sort_with, HybridQuickSorter,
        InsertionSorter, QuickSorter, Sorter,
    };
}
