//! Sort configuration that callers can serialize/deserialize.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which sorting routine a config-driven sort dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    Insertion,
    Quick,
    /// Quicksort that hands ranges of at most `hybrid_threshold` elements to insertion sort.
    Hybrid,
}

impl FromStr for SortStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insertion" => Ok(SortStrategy::Insertion),
            "quick" => Ok(SortStrategy::Quick),
            "hybrid" => Ok(SortStrategy::Hybrid),
            other => Err(Error::Config(format!("unknown sort strategy '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub strategy: SortStrategy,

    /// Largest range size the hybrid sorter hands to insertion sort.
    /// `0` and `1` make the hybrid sorter behave exactly like plain quicksort.
    pub hybrid_threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            strategy: SortStrategy::Hybrid,
            hybrid_threshold: 10,
        }
    }
}

impl SortConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQALGO_SORT_STRATEGY`: `insertion`, `quick` or `hybrid`
    /// - `SEQALGO_HYBRID_THRESHOLD`: hybrid insertion-sort cutoff
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQALGO_SORT_STRATEGY") {
            if let Ok(v) = s.parse::<SortStrategy>() {
                cfg.strategy = v;
            }
        }

        if let Ok(s) = std::env::var("SEQALGO_HYBRID_THRESHOLD") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.hybrid_threshold = v;
            }
        }

        cfg
    }

    /// Decode a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
