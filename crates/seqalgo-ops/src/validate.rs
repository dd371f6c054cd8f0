//! Validation entry points that report rejections through `tracing` when enabled.

use seqalgo_core::{check_endpoints, check_index, Index, Result};

pub(crate) fn endpoints(op: &'static str, len: usize, lo: Index, hi: Index) -> Result<()> {
    let checked = check_endpoints(len, lo, hi);
    #[cfg(feature = "tracing")]
    if let Err(e) = &checked {
        tracing::trace!(op, len, lo, hi, error = %e, "rejected range");
    }
    #[cfg(not(feature = "tracing"))]
    let _ = op;
    checked
}

pub(crate) fn index(op: &'static str, len: usize, i: Index) -> Result<usize> {
    let checked = check_index(len, i);
    #[cfg(feature = "tracing")]
    if let Err(e) = &checked {
        tracing::trace!(op, len, i, error = %e, "rejected index");
    }
    #[cfg(not(feature = "tracing"))]
    let _ = op;
    checked
}
