//! Input bounds and integer square roots.

/// Largest integer exactly representable in an IEEE-754 double (2^53 - 1).
///
/// Used as the default upper bound for factorizer input. Sieving up to the
/// square root of this value needs roughly 95 million flags.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Returns `⌊√n⌋`.
///
/// Starts from the floating-point estimate and corrects it, since `f64`
/// rounding can be off by one for large inputs.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}
