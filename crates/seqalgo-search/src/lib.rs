#![forbid(unsafe_code)]
//! seqalgo-search: read-only lookups over slices.
//!
//! Searches never fail: a miss is `None`. Neither search validates its input;
//! binary search assumes the searched range is sorted ascending.

pub mod binary;
pub mod linear;

pub use binary::{binary_search, binary_search_in_range};
pub use linear::linear_search;
