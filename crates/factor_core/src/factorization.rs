//! The result of factorizing one number.

use serde::Serialize;
use std::fmt;

/// A number paired with its prime factors.
///
/// `factors` is ascending and repeats each prime once per power dividing
/// `number`, so its product is `number`. The factorization of 1 is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Factorization {
    /// The factorized number.
    pub number: u64,
    /// Prime factors in ascending order, with multiplicity.
    pub factors: Vec<u64>,
}

impl Factorization {
    /// Returns `true` if the number is itself prime.
    pub fn is_prime(&self) -> bool {
        self.factors.len() == 1
    }

    /// Groups repeated factors into `(prime, exponent)` pairs.
    pub fn powers(&self) -> Vec<(u64, u32)> {
        let mut powers: Vec<(u64, u32)> = Vec::new();
        for &p in &self.factors {
            match powers.last_mut() {
                Some((last, exp)) if *last == p => *exp += 1,
                _ => powers.push((p, 1)),
            }
        }
        powers
    }
}

/// Renders as `"<number>: <f1>, <f2>, ..."`; an empty list leaves nothing
/// after the colon and space.
impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.number)?;
        for (i, factor) in self.factors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{factor}")?;
        }
        Ok(())
    }
}
