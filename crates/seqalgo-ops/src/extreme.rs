//! Range-bounded minimum/maximum scans.
//!
//! All finders share one contract:
//! - an empty slice yields `Ok(None)` without validating the endpoints;
//! - otherwise `[lo, hi]` is validated (order first, then bounds);
//! - ties resolve to the first occurrence in a left-to-right scan.

use std::cmp::Ordering;

use seqalgo_core::{full_range, Index, Result};

use crate::validate;

/// Which end of the order a scan is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

impl Extreme {
    /// Whether an element comparing as `ord` against the current best replaces it.
    fn beats(self, ord: Ordering) -> bool {
        match self {
            Extreme::Min => ord == Ordering::Less,
            Extreme::Max => ord == Ordering::Greater,
        }
    }
}

/// Position of the extreme element of `seq[lo..=hi]`.
pub fn find_extreme_position_in_range<T: Ord>(
    seq: &[T],
    lo: Index,
    hi: Index,
    mode: Extreme,
) -> Result<Option<usize>> {
    if seq.is_empty() {
        return Ok(None);
    }
    validate::endpoints("find_extreme", seq.len(), lo, hi)?;

    let (lo, hi) = (lo as usize, hi as usize);
    let mut best = lo;
    for p in lo + 1..=hi {
        if mode.beats(seq[p].cmp(&seq[best])) {
            best = p;
        }
    }
    Ok(Some(best))
}

/// The extreme element of `seq[lo..=hi]`.
pub fn find_extreme_in_range<T: Ord>(
    seq: &[T],
    lo: Index,
    hi: Index,
    mode: Extreme,
) -> Result<Option<&T>> {
    Ok(find_extreme_position_in_range(seq, lo, hi, mode)?.map(|p| &seq[p]))
}

pub fn find_min<T: Ord>(seq: &[T]) -> Result<Option<&T>> {
    let (lo, hi) = full_range(seq.len());
    find_extreme_in_range(seq, lo, hi, Extreme::Min)
}

pub fn find_max<T: Ord>(seq: &[T]) -> Result<Option<&T>> {
    let (lo, hi) = full_range(seq.len());
    find_extreme_in_range(seq, lo, hi, Extreme::Max)
}

pub fn find_min_in_range<T: Ord>(seq: &[T], lo: Index, hi: Index) -> Result<Option<&T>> {
    find_extreme_in_range(seq, lo, hi, Extreme::Min)
}

pub fn find_max_in_range<T: Ord>(seq: &[T], lo: Index, hi: Index) -> Result<Option<&T>> {
    find_extreme_in_range(seq, lo, hi, Extreme::Max)
}

pub fn find_min_pos<T: Ord>(seq: &[T]) -> Result<Option<usize>> {
    let (lo, hi) = full_range(seq.len());
    find_extreme_position_in_range(seq, lo, hi, Extreme::Min)
}

pub fn find_max_pos<T: Ord>(seq: &[T]) -> Result<Option<usize>> {
    let (lo, hi) = full_range(seq.len());
    find_extreme_position_in_range(seq, lo, hi, Extreme::Max)
}

pub fn find_min_pos_in_range<T: Ord>(seq: &[T], lo: Index, hi: Index) -> Result<Option<usize>> {
    find_extreme_position_in_range(seq, lo, hi, Extreme::Min)
}

pub fn find_max_pos_in_range<T: Ord>(seq: &[T], lo: Index, hi: Index) -> Result<Option<usize>> {
    find_extreme_position_in_range(seq, lo, hi, Extreme::Max)
}
