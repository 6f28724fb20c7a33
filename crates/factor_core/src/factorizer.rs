//! Trial division over cached primes.

use std::sync::Arc;

use factor_common::{isqrt, FactorError, FactorResult, MAX_SAFE_INTEGER};
use factor_config::FactorConfig;
use factor_sieve::PrimeCache;
use tracing::debug;

use crate::factorization::Factorization;

/// Factorizes integers using primes drawn from a shared [`PrimeCache`].
///
/// Cloning is cheap; clones share the same cache.
#[derive(Debug, Clone)]
pub struct Factorizer {
    cache: Arc<PrimeCache>,
    max_input: u64,
}

impl Factorizer {
    /// Creates a factorizer with a private cache and the default input bound
    /// of [`MAX_SAFE_INTEGER`].
    pub fn new() -> Self {
        Self::with_cache(Arc::new(PrimeCache::new()))
    }

    /// Creates a factorizer that draws primes from an existing cache.
    pub fn with_cache(cache: Arc<PrimeCache>) -> Self {
        Self {
            cache,
            max_input: MAX_SAFE_INTEGER,
        }
    }

    /// Sets the largest accepted input.
    pub fn with_max_input(mut self, max_input: u64) -> Self {
        self.max_input = max_input;
        self
    }

    /// Builds a factorizer from loaded configuration.
    ///
    /// Creates a cache with the configured strategy and sieves up to
    /// `sieve.prewarm` before returning. Prewarming never goes past
    /// `⌊√max_input⌋`, even for a config that skipped validation.
    pub fn from_config(config: &FactorConfig) -> Self {
        let cache = PrimeCache::with_strategy(config.sieve.strategy);
        let prewarm = config.sieve.prewarm.min(config.limits.max_sieve());
        if prewarm > 0 {
            cache.prewarm(prewarm);
        }
        Self::with_cache(Arc::new(cache)).with_max_input(config.limits.max_input)
    }

    /// The cache this factorizer draws primes from.
    pub fn cache(&self) -> &Arc<PrimeCache> {
        &self.cache
    }

    /// The largest accepted input.
    pub fn max_input(&self) -> u64 {
        self.max_input
    }

    /// The largest sieve limit this factorizer will run: `⌊√max_input⌋`.
    pub fn max_sieve(&self) -> u64 {
        isqrt(self.max_input)
    }

    /// Returns all primes `<= limit` from the cache.
    ///
    /// # Errors
    ///
    /// [`FactorError::SieveTooLarge`] if `limit` exceeds
    /// [`max_sieve`](Self::max_sieve); the sieve is never attempted.
    pub fn primes_up_to(&self, limit: u64) -> FactorResult<Vec<u64>> {
        let max = self.max_sieve();
        if limit > max {
            return Err(FactorError::SieveTooLarge { limit, max });
        }
        Ok(self.cache.primes_up_to(limit))
    }

    /// Returns the prime factors of `n` in ascending order, with multiplicity.
    ///
    /// # Errors
    ///
    /// - [`FactorError::InvalidInput`] if `n` is negative.
    /// - [`FactorError::Undefined`] if `n` is zero.
    /// - [`FactorError::TooLarge`] if `n` exceeds [`max_input`](Self::max_input).
    pub fn factorize(&self, n: i64) -> FactorResult<Vec<u64>> {
        let n = FactorError::check(n, self.max_input)?;
        if n == 1 {
            return Ok(Vec::new());
        }

        let primes = self.cache.primes_up_to(isqrt(n));
        let mut factors = Vec::new();
        let mut remaining = n;
        for p in primes {
            if p * p > remaining {
                break;
            }
            while remaining % p == 0 {
                factors.push(p);
                remaining /= p;
            }
        }
        // Every prime below √remaining has been divided out.
        if remaining > 1 {
            factors.push(remaining);
        }
        Ok(factors)
    }

    /// Factorizes each number in order.
    ///
    /// The first number that fails aborts the batch; its error is returned
    /// unchanged and no partial results are kept.
    pub fn factorize_all(&self, numbers: &[i64]) -> FactorResult<Vec<Factorization>> {
        let mut results = Vec::with_capacity(numbers.len());
        for (index, &n) in numbers.iter().enumerate() {
            let factors = self.factorize(n).map_err(|err| {
                debug!(index, value = n, error = %err, "batch aborted");
                err
            })?;
            results.push(Factorization {
                number: n as u64,
                factors,
            });
        }
        Ok(results)
    }
}

impl Default for Factorizer {
    fn default() -> Self {
        Self::new()
    }
}
