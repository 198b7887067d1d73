//! Scalar helpers shared by the other modules

/// Sign of `x`: -1, 0 or 1.
///
/// Both `0.0` and `-0.0` map to 0. NaN maps to NaN.
pub fn sign(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        f64::NAN
    }
}

/// Larger of two integers
pub fn max_of(a: i64, b: i64) -> i64 {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of two integers
pub fn min_of(a: i64, b: i64) -> i64 {
    if a < b {
        a
    } else {
        b
    }
}

/// Sum of a slice of integers, 0 when empty
pub fn sum_of(xs: &[i64]) -> i64 {
    xs.iter().sum()
}
