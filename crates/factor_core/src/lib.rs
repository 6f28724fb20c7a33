//! Prime factorization by trial division over a cached sieve.
//!
//! [`Factorizer`] owns a shared [`PrimeCache`](factor_sieve::PrimeCache) and
//! turns integers into ascending lists of prime factors with multiplicity.
//! The free functions [`factorize`] and [`factorize_all`] run against a
//! process-wide default instance for callers that do not need their own.

#![warn(missing_docs)]

pub mod factorization;
pub mod factorizer;
pub mod global;

pub use factor_common::{FactorError, FactorResult};
pub use factorization::Factorization;
pub use factorizer::Factorizer;
pub use global::{factorize, factorize_all, global};
