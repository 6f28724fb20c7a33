//! Process-wide default factorizer.

use std::sync::OnceLock;

use factor_common::FactorResult;

use crate::factorization::Factorization;
use crate::factorizer::Factorizer;

static DEFAULT: OnceLock<Factorizer> = OnceLock::new();

/// Returns the process-wide factorizer, creating it on first use.
///
/// Its cache lives until the process exits and is shared by every caller of
/// [`factorize`] and [`factorize_all`].
pub fn global() -> &'static Factorizer {
    DEFAULT.get_or_init(Factorizer::new)
}

/// Factorizes `n` with the process-wide factorizer.
///
/// See [`Factorizer::factorize`].
pub fn factorize(n: i64) -> FactorResult<Vec<u64>> {
    global().factorize(n)
}

/// Factorizes each number in order with the process-wide factorizer.
///
/// See [`Factorizer::factorize_all`].
pub fn factorize_all(numbers: &[i64]) -> FactorResult<Vec<Factorization>> {
    global().factorize_all(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use factor_common::FactorError;

    #[test]
    fn free_functions_use_shared_cache() {
        assert_eq!(factorize(99).unwrap(), vec![3, 3, 11]);
        assert!(global().cache().limit() >= 9);
        assert!(std::ptr::eq(global(), global()));
    }

    #[test]
    fn free_batch() {
        let results = factorize_all(&[10, 1]).unwrap();
        assert_eq!(results[0].to_string(), "10: 2, 5");
        assert_eq!(results[1].to_string(), "1: ");
    }

    #[test]
    fn free_errors() {
        assert_eq!(factorize(0), Err(FactorError::Undefined));
        assert_eq!(
            factorize_all(&[4, -1]),
            Err(FactorError::InvalidInput { value: -1 })
        );
    }
}
