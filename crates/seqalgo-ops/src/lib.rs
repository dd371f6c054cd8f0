#![forbid(unsafe_code)]
//! seqalgo-ops: bounds-checked primitives over mutable slices.
//!
//! Every ranged operation validates its endpoints through
//! [`seqalgo_core::check_endpoints`] before touching the slice, so a failed
//! call never leaves partial writes behind.
//!
//! Also hosts the input generators used by tests and benchmarks.

pub mod extreme;
pub mod generate;
pub mod shift;

mod validate;

pub use extreme::{
    find_extreme_in_range, find_extreme_position_in_range, find_max, find_max_in_range,
    find_max_pos, find_max_pos_in_range, find_min, find_min_in_range, find_min_pos,
    find_min_pos_in_range, Extreme,
};
pub use generate::{
    generate_matrix, generate_sequence, random_between, random_between_with, random_sequence,
};
pub use shift::{shift_left, shift_right, swap};
