//! Common result and error types for factorization.

/// The standard result type for factorization operations.
pub type FactorResult<T> = Result<T, FactorError>;

/// Reasons a number cannot be factorized.
///
/// All variants describe a problem with the caller's input. None of them are
/// transient, so callers should never retry the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FactorError {
    /// The input was negative.
    #[error("invalid input {value}: negative numbers are not supported")]
    InvalidInput {
        /// The rejected value.
        value: i64,
    },

    /// The input was zero, which has no prime factorization.
    #[error("zero cannot be factorized into primes")]
    Undefined,

    /// The input exceeds the largest value the factorizer is configured for.
    #[error("input {value} exceeds the supported maximum of {max}")]
    TooLarge {
        /// The rejected value.
        value: i64,
        /// The configured upper bound.
        max: u64,
    },

    /// A prime listing was requested beyond the largest sieve the
    /// configured input bound needs.
    #[error("sieve limit {limit} exceeds the supported maximum of {max}")]
    SieveTooLarge {
        /// The requested sieve limit.
        limit: u64,
        /// The largest allowed sieve limit.
        max: u64,
    },
}

impl FactorError {
    /// Validates `n` against the factorizer's input domain.
    ///
    /// Returns the value as `u64` when it lies in `1..=max`.
    pub fn check(n: i64, max: u64) -> FactorResult<u64> {
        if n < 0 {
            return Err(Self::InvalidInput { value: n });
        }
        if n == 0 {
            return Err(Self::Undefined);
        }
        let value = n as u64;
        if value > max {
            return Err(Self::TooLarge { value: n, max });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_input() {
        let err = FactorError::InvalidInput { value: -5 };
        assert_eq!(
            format!("{err}"),
            "invalid input -5: negative numbers are not supported"
        );
    }

    #[test]
    fn display_undefined() {
        assert_eq!(
            format!("{}", FactorError::Undefined),
            "zero cannot be factorized into primes"
        );
    }

    #[test]
    fn display_too_large() {
        let err = FactorError::TooLarge { value: 101, max: 100 };
        let msg = err.to_string();
        assert!(msg.contains("101"));
        assert!(msg.contains("maximum of 100"));
    }

    #[test]
    fn display_sieve_too_large() {
        let err = FactorError::SieveTooLarge {
            limit: 1_000_000_000_000,
            max: 94_906_265,
        };
        assert_eq!(
            err.to_string(),
            "sieve limit 1000000000000 exceeds the supported maximum of 94906265"
        );
    }

    #[test]
    fn check_rejects_negative() {
        assert_eq!(
            FactorError::check(-1, 10),
            Err(FactorError::InvalidInput { value: -1 })
        );
        assert_eq!(
            FactorError::check(i64::MIN, u64::MAX),
            Err(FactorError::InvalidInput { value: i64::MIN })
        );
    }

    #[test]
    fn check_rejects_zero() {
        assert_eq!(FactorError::check(0, 10), Err(FactorError::Undefined));
    }

    #[test]
    fn check_bound_is_inclusive() {
        assert_eq!(FactorError::check(10, 10), Ok(10));
        assert_eq!(
            FactorError::check(11, 10),
            Err(FactorError::TooLarge { value: 11, max: 10 })
        );
    }

    #[test]
    fn check_accepts_one() {
        assert_eq!(FactorError::check(1, 1), Ok(1));
    }
}
