//! Endpoint type and the shared range check.
//!
//! Ranges are inclusive `[lo, hi]`. Endpoints are signed so that callers can
//! pass (and be rejected for) negative values, and so a recursive split can
//! describe the empty range `[lo, lo - 1]` without wrapping.

use crate::error::{Error, Result};

/// A signed position or range endpoint.
pub type Index = isize;

/// Validate an inclusive range against a sequence of length `len`.
///
/// The order check runs first: `lo > hi` reports [`Error::InvalidRange`] even
/// when the endpoints are also out of bounds. Then `lo < 0` or `hi >= len`
/// reports [`Error::IndexOutOfBounds`].
pub fn check_endpoints(len: usize, lo: Index, hi: Index) -> Result<()> {
    if lo > hi {
        return Err(Error::InvalidRange { lo, hi });
    }
    if lo < 0 || !in_bounds(len, hi) {
        return Err(Error::IndexOutOfBounds { lo, hi, len });
    }
    Ok(())
}

/// Validate a single position against a sequence of length `len` and
/// convert it to `usize`.
pub fn check_index(len: usize, i: Index) -> Result<usize> {
    if in_bounds(len, i) {
        Ok(i as usize)
    } else {
        Err(Error::IndexOutOfBounds { lo: i, hi: i, len })
    }
}

/// The inclusive range covering a whole sequence: `(0, len - 1)`.
///
/// For an empty sequence this is `(0, -1)`.
pub fn full_range(len: usize) -> (Index, Index) {
    (0, len as Index - 1)
}

fn in_bounds(len: usize, i: Index) -> bool {
    i >= 0 && (i as usize) < len
}
