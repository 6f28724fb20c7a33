//! Sieve of Eratosthenes, whole-range and segmented.

use factor_common::isqrt;

/// Returns all primes `<= limit` in ascending order.
pub fn sieve(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let len = limit as usize + 1;
    let mut is_prime = vec![true; len];
    is_prime[0] = false;
    is_prime[1] = false;

    let root = isqrt(limit) as usize;
    for p in 2..=root {
        if is_prime[p] {
            for multiple in (p * p..len).step_by(p) {
                is_prime[multiple] = false;
            }
        }
    }

    is_prime
        .iter()
        .enumerate()
        .filter(|&(_, &prime)| prime)
        .map(|(i, _)| i as u64)
        .collect()
}

/// Returns the primes in the half-open window `(low, high]` in ascending order.
///
/// `base_primes` must contain every prime `<= ⌊√high⌋`, ascending. Extra
/// larger primes are ignored.
pub fn sieve_segment(low: u64, high: u64, base_primes: &[u64]) -> Vec<u64> {
    if high <= low || high < 2 {
        return Vec::new();
    }
    let first = low + 1;
    let len = (high - low) as usize;
    let mut is_prime = vec![true; len];

    let root = isqrt(high);
    for &p in base_primes.iter().take_while(|&&p| p <= root) {
        let first_multiple = first.div_ceil(p) * p;
        let start = first_multiple.max(p * p);
        if start > high {
            continue;
        }
        for multiple in (start..=high).step_by(p as usize) {
            is_prime[(multiple - first) as usize] = false;
        }
    }

    is_prime
        .iter()
        .enumerate()
        .filter(|&(_, &prime)| prime)
        .map(|(i, _)| first + i as u64)
        .filter(|&n| n >= 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMES_TO_100: [u64; 25] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97,
    ];

    #[test]
    fn empty_below_two() {
        assert!(sieve(0).is_empty());
        assert!(sieve(1).is_empty());
    }

    #[test]
    fn tiny_limits() {
        assert_eq!(sieve(2), vec![2]);
        assert_eq!(sieve(3), vec![2, 3]);
        assert_eq!(sieve(4), vec![2, 3]);
    }

    #[test]
    fn primes_to_100() {
        assert_eq!(sieve(100), PRIMES_TO_100);
    }

    #[test]
    fn ten_thousandth_prime() {
        let primes = sieve(104_729);
        assert_eq!(primes.len(), 10_000);
        assert_eq!(primes.last(), Some(&104_729));
    }

    #[test]
    fn limit_on_a_square_excludes_it() {
        let primes = sieve(49);
        assert_eq!(primes.last(), Some(&47));
        assert!(!primes.contains(&49));
    }

    #[test]
    fn segment_matches_whole_sieve() {
        let base = sieve(10);
        let segment = sieve_segment(50, 100, &base);
        let expected: Vec<u64> = PRIMES_TO_100.iter().copied().filter(|&p| p > 50).collect();
        assert_eq!(segment, expected);
    }

    #[test]
    fn segment_from_zero_skips_zero_and_one() {
        let base = sieve(3);
        assert_eq!(sieve_segment(0, 10, &base), vec![2, 3, 5, 7]);
        assert_eq!(sieve_segment(1, 10, &base), vec![2, 3, 5, 7]);
    }

    #[test]
    fn segment_keeps_base_primes_inside_window() {
        let base = sieve(5);
        assert_eq!(sieve_segment(1, 30, &base), sieve(30));
    }

    #[test]
    fn empty_segment() {
        assert!(sieve_segment(10, 10, &[2, 3]).is_empty());
        assert!(sieve_segment(10, 5, &[2, 3]).is_empty());
        assert!(sieve_segment(0, 1, &[]).is_empty());
    }

    #[test]
    fn segment_with_extra_base_primes() {
        let base = sieve(100);
        assert_eq!(sieve_segment(20, 40, &base), vec![23, 29, 31, 37]);
    }
}
