#![forbid(unsafe_code)]
//! seqalgo-core: shared vocabulary for the seqalgo crates.
//!
//! Responsibilities:
//! - The error taxonomy every bounded operation reports through.
//! - Signed endpoints and the single range check used by all ranged operations.
//! - Serializable sort configuration (strategy + hybrid threshold).
//!
//! **No algorithms live here.** `seqalgo-ops`, `seqalgo-sort` and
//! `seqalgo-search` build on these types.

pub mod config;
pub mod error;
pub mod prelude;
pub mod range;

pub use config::{SortConfig, SortStrategy};
pub use error::{Error, Result};
pub use range::{check_endpoints, check_index, full_range, Index};
