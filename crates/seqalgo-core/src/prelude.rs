//! Convenient re-exports for downstream crates.

pub use crate::config::{SortConfig, SortStrategy};
pub use crate::error::{Error, Result};
pub use crate::range::{check_endpoints, check_index, full_range, Index};
