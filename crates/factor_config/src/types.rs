//! Configuration types deserialized from `factor.toml`.

use factor_common::{isqrt, SieveStrategy, MAX_SAFE_INTEGER};
use serde::Deserialize;

/// The top-level configuration parsed from `factor.toml`.
///
/// Every section is optional; a missing file or an empty document yields
/// [`FactorConfig::default`].
#[derive(Debug, Default, Deserialize)]
pub struct FactorConfig {
    /// Prime cache settings.
    #[serde(default)]
    pub sieve: SieveConfig,
    /// Input bounds.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Output settings for the command-line front end.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Prime cache settings.
#[derive(Debug, Default, Deserialize)]
pub struct SieveConfig {
    /// How the cache grows past its recorded limit.
    #[serde(default)]
    pub strategy: SieveStrategy,
    /// Limit to sieve up to before the first request. `0` disables prewarming.
    #[serde(default)]
    pub prewarm: u64,
}

/// Bounds on accepted input.
#[derive(Debug, Deserialize)]
pub struct LimitsConfig {
    /// Largest number the factorizer accepts.
    #[serde(default = "default_max_input")]
    pub max_input: u64,
}

impl LimitsConfig {
    /// Largest sieve limit any accepted input can need: `⌊√max_input⌋`.
    pub fn max_sieve(&self) -> u64 {
        isqrt(self.max_input)
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input: default_max_input(),
        }
    }
}

fn default_max_input() -> u64 {
    MAX_SAFE_INTEGER
}

/// Output settings.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Default rendering for factorization results.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering of factorization results.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `"<number>: <f1>, <f2>, ..."` line per result (default).
    #[default]
    Text,
    /// A JSON array of `{ "number", "factors" }` objects.
    Json,
}
