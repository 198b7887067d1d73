//! Binomial coefficients
//!
//! Small arguments (`n <= 20`) are computed exactly in `i64` using a
//! precomputed factorial table. Larger arguments go through the log-gamma
//! function and are rounded, so they are a best-effort approximation and
//! lose exactness once the result exceeds 2^53.

use lazy_static::lazy_static;
use statrs::function::gamma::ln_gamma;

/// Largest `n` whose factorial fits in an `i64` (20! needs 62 bits)
pub const SMALL_FACTORIAL_LIMIT: usize = 20;

lazy_static! {
    static ref SMALL_FACTORIALS: [i64; SMALL_FACTORIAL_LIMIT + 1] = {
        let mut table = [1i64; SMALL_FACTORIAL_LIMIT + 1];
        for n in 1..=SMALL_FACTORIAL_LIMIT {
            table[n] = table[n - 1] * n as i64;
        }
        table
    };
}

/// Exact `n!` for `n <= 20`, `None` beyond the table
pub fn factorial(n: usize) -> Option<i64> {
    SMALL_FACTORIALS.get(n).copied()
}

/// Natural log of the binomial coefficient `C(n, k)`.
///
/// Uses `lnΓ(n+1) - lnΓ(k+1) - lnΓ(n-k+1)`. Only meaningful for
/// `0 <= k <= n`; other inputs produce unspecified values.
pub fn log_choose(n: i64, k: i64) -> f64 {
    // Convert before adding so extreme n cannot overflow i64.
    let (n, k) = (n as f64, k as f64);
    let a = ln_gamma(n + 1.0);
    let b = ln_gamma(k + 1.0);
    let c = ln_gamma(n - k + 1.0);
    a - b - c
}

/// Binomial coefficient `C(n, k)`.
///
/// Returns 0 for `k < 0` or `k > n`. Exact for `n <= 20`; for larger `n`
/// the result is `round(exp(log_choose(n, k)))` and is only approximate.
/// Values beyond `i64::MAX` saturate. Once `n` exceeds 2^53 its neighbours
/// are no longer distinct in `f64` and the approximation degrades further.
pub fn choose(n: i64, k: i64) -> i64 {
    if k == 0 || k == n {
        return 1;
    }
    if k < 0 || n < k {
        return 0;
    }
    if n <= SMALL_FACTORIAL_LIMIT as i64 {
        // k <= n <= 20, so the product of the top k terms is at most 20!.
        let numer: i64 = (n - k + 1..=n).product();
        return numer / SMALL_FACTORIALS[k as usize];
    }

    log_choose(n, k).exp().round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial_table() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), None);
    }

    #[test]
    fn test_choose_small() {
        assert_eq!(choose(5, 2), 10);
        assert_eq!(choose(10, 3), 120);
        assert_eq!(choose(20, 10), 184_756);
        assert_eq!(choose(20, 19), 20);
    }

    #[test]
    fn test_choose_edges() {
        assert_eq!(choose(0, 0), 1);
        assert_eq!(choose(7, 0), 1);
        assert_eq!(choose(7, 7), 1);
        assert_eq!(choose(7, 8), 0);
        assert_eq!(choose(7, -1), 0);
    }

    #[test]
    fn test_choose_large_is_close() {
        // C(30, 15) = 155117520
        assert_eq!(choose(30, 15), 155_117_520);
        // C(50, 3) = 19600
        assert_eq!(choose(50, 3), 19_600);
    }

    #[test]
    fn test_choose_extreme_n_does_not_overflow() {
        // Near i64::MAX, n and n - k round to the same f64, so only the
        // absence of integer overflow is checked there.
        assert!(choose(i64::MAX, 2) >= 1);
        assert!(log_choose(i64::MAX, 2).is_finite());
        assert_eq!(choose(i64::MAX, i64::MAX), 1);
        assert_eq!(choose(i64::MAX, 0), 1);
    }

    #[test]
    fn test_choose_saturates_past_i64() {
        // C(2^40, 2) is about 6e23.
        assert_eq!(choose(1 << 40, 2), i64::MAX);
        assert_eq!(choose(1000, 500), i64::MAX);
    }

    #[test]
    fn test_log_choose_matches_exact() {
        let lc = log_choose(10, 4);
        assert!((lc - 210f64.ln()).abs() < 1e-10);
        assert!(log_choose(6, 0).abs() < 1e-12);
    }
}
