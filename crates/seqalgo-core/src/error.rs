use thiserror::Error;

use crate::range::Index;

/// Canonical result for every seqalgo crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The lower endpoint lies past the upper one.
    #[error("invalid range: lower endpoint {lo} is greater than upper endpoint {hi}")]
    InvalidRange { lo: Index, hi: Index },

    /// An index or endpoint lies outside `[0, len)`.
    #[error("endpoints ({lo}, {hi}) are not valid for a sequence of length {len}")]
    IndexOutOfBounds { lo: Index, hi: Index, len: usize },

    #[error("invalid generator bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: usize, max: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// True for the two argument-validation kinds (`InvalidRange`, `IndexOutOfBounds`).
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidRange { .. } | Error::IndexOutOfBounds { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
