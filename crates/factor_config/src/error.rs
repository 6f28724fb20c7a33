//! Error types for `factor.toml` loading.

use std::path::PathBuf;

/// Errors that can occur while reading or checking a `factor.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid TOML or does not match the expected schema.
    #[error("malformed factor.toml: {reason}")]
    Parse {
        /// Message from the TOML deserializer.
        reason: String,
    },

    /// A numeric setting lies outside the range the factorizer can honour.
    #[error("{field} = {value} is out of range: {reason}")]
    OutOfRange {
        /// Dotted key of the offending setting, e.g. `sieve.prewarm`.
        field: &'static str,
        /// The configured value.
        value: u64,
        /// The bound that was violated.
        reason: String,
    },
}

impl ConfigError {
    /// Returns the dotted key of an out-of-range setting, if that is the cause.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::OutOfRange { field, .. } => Some(field),
            _ => None,
        }
    }
}
