//! Prime cache growth strategies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a prime cache grows when asked for primes beyond its recorded limit.
///
/// Both strategies return exactly the same primes; they differ only in how
/// much work is redone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SieveStrategy {
    /// Discard the cache and sieve `[0, limit]` from scratch (default).
    #[default]
    Rebuild,
    /// Keep the cache and sieve only the new segment above the old limit.
    Incremental,
}

impl fmt::Display for SieveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rebuild => f.write_str("rebuild"),
            Self::Incremental => f.write_str("incremental"),
        }
    }
}
