//! Growable prime cache.
//!
//! The `PrimeCache` type remembers every prime up to the highest limit it has
//! been asked for. Requests at or below that limit are answered by slicing the
//! cached sequence; larger requests re-sieve according to the configured
//! [`SieveStrategy`]. The read-or-regenerate step happens under a single lock,
//! so concurrent callers never observe a sequence that disagrees with the
//! recorded limit.

use std::sync::{Mutex, MutexGuard, PoisonError};

use factor_common::{isqrt, SieveStrategy};
use tracing::{debug, trace};

use crate::sieve::{sieve, sieve_segment};

/// Snapshot of a cache's state and usage counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Highest limit up to which primality is fully determined.
    pub limit: u64,
    /// Number of cached primes.
    pub prime_count: usize,
    /// Requests answered from the cache without sieving.
    pub hits: u64,
    /// Requests that had to grow the cache.
    pub regenerations: u64,
}

/// Mutable cache contents guarded by the [`PrimeCache`] lock.
///
/// Invariant: `primes` holds exactly the primes `<= limit`, ascending.
#[derive(Debug)]
struct CacheState {
    primes: Vec<u64>,
    limit: u64,
    hits: u64,
    regenerations: u64,
}

impl CacheState {
    fn new() -> Self {
        Self {
            primes: Vec::new(),
            limit: 1,
            hits: 0,
            regenerations: 0,
        }
    }

    /// Cached primes `<= limit`. Requires `limit <= self.limit`.
    fn prefix(&self, limit: u64) -> &[u64] {
        let end = self.primes.partition_point(|&p| p <= limit);
        &self.primes[..end]
    }

    fn rebuild(&mut self, limit: u64) {
        self.primes = sieve(limit);
        self.limit = limit;
    }

    /// Appends the primes in `(self.limit, limit]`, first growing the cache to
    /// `⌊√limit⌋` if the segment needs base primes it does not have yet.
    fn extend(&mut self, limit: u64) {
        let root = isqrt(limit);
        if root > self.limit {
            self.extend(root);
        }
        let segment = sieve_segment(self.limit, limit, self.prefix(root));
        self.primes.extend(segment);
        self.limit = limit;
    }
}

/// A thread-safe cache of all primes up to the highest limit requested.
///
/// The cache starts empty (limit 1) and only ever grows. It is not persisted;
/// dropping it discards all sieving work.
#[derive(Debug)]
pub struct PrimeCache {
    state: Mutex<CacheState>,
    strategy: SieveStrategy,
}

impl PrimeCache {
    /// Creates an empty cache using the default [`SieveStrategy::Rebuild`].
    pub fn new() -> Self {
        Self::with_strategy(SieveStrategy::default())
    }

    /// Creates an empty cache with an explicit growth strategy.
    pub fn with_strategy(strategy: SieveStrategy) -> Self {
        Self {
            state: Mutex::new(CacheState::new()),
            strategy,
        }
    }

    /// Returns the growth strategy this cache was created with.
    pub fn strategy(&self) -> SieveStrategy {
        self.strategy
    }

    /// Returns all primes `<= limit` in ascending order.
    ///
    /// Answers from memory when `limit` is within the recorded limit, otherwise
    /// grows the cache to exactly `limit` first.
    pub fn primes_up_to(&self, limit: u64) -> Vec<u64> {
        let mut state = self.lock();
        self.ensure(&mut state, limit);
        state.prefix(limit).to_vec()
    }

    /// Grows the cache to cover `limit` without copying any primes out.
    pub fn prewarm(&self, limit: u64) {
        let mut state = self.lock();
        self.ensure(&mut state, limit);
    }

    /// Highest limit up to which primality is fully determined.
    pub fn limit(&self) -> u64 {
        self.lock().limit
    }

    /// Number of primes currently cached.
    pub fn prime_count(&self) -> usize {
        self.lock().primes.len()
    }

    /// Returns a snapshot of the cache contents and usage counters.
    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            limit: state.limit,
            prime_count: state.primes.len(),
            hits: state.hits,
            regenerations: state.regenerations,
        }
    }

    fn ensure(&self, state: &mut CacheState, limit: u64) {
        if limit <= state.limit {
            state.hits += 1;
            trace!(limit, cached = state.limit, "prime cache hit");
            return;
        }

        let previous = state.limit;
        match self.strategy {
            SieveStrategy::Rebuild => state.rebuild(limit),
            SieveStrategy::Incremental => state.extend(limit),
        }
        state.regenerations += 1;
        debug!(
            from = previous,
            to = limit,
            strategy = %self.strategy,
            primes = state.primes.len(),
            "grew prime cache"
        );
    }

    // State is only replaced after a sieve completes, so a panic elsewhere
    // while the lock was held cannot leave it inconsistent.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::new()
    }
}
