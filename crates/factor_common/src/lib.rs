//! Shared foundational types used across the factor workspace.
//!
//! This crate provides the error and result types reported by the factorizer,
//! the supported input bound, integer square roots, and the prime cache growth
//! strategy shared by configuration and the sieve.

#![warn(missing_docs)]

pub mod bounds;
pub mod result;
pub mod strategy;

pub use bounds::{isqrt, MAX_SAFE_INTEGER};
pub use result::{FactorError, FactorResult};
pub use strategy::SieveStrategy;
