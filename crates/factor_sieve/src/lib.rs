//! Prime generation with a reusable, growable cache.
//!
//! [`sieve`] and [`sieve_segment`] are pure sieve-of-Eratosthenes routines.
//! [`PrimeCache`] wraps them in process-lifetime state that answers
//! "all primes up to `limit`" from memory when it can and re-sieves only when
//! a request goes past the highest limit seen so far.

#![warn(missing_docs)]

pub mod cache;
pub mod sieve;

pub use cache::{CacheStats, PrimeCache};
pub use sieve::{sieve, sieve_segment};
