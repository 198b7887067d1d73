//! Infinite-series summation
//!
//! Terms are added until the running sum reaches a floating-point fixed
//! point: adding the next term no longer changes the accumulator. This is
//! fast but subject to round-off, and it only terminates for series that
//! converge rapidly within the range of `f64`.

use crate::config::SeriesConfig;
use crate::error::{NumericError, NumericResult};

/// Sum `f(0) + f(1) + f(2) + ...`.
///
/// The caller must only pass series known to converge rapidly; a divergent
/// or slowly converging series never terminates. Use [`series_sum_with`]
/// with a term cap when that cannot be guaranteed.
pub fn series_sum<F>(f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut sum = 0.0;
    let mut n = 0.0;
    loop {
        let prev = sum;
        sum += f(n);
        n += 1.0;
        if sum == prev {
            return sum;
        }
    }
}

/// [`series_sum`] with an optional cap on the number of terms
pub fn series_sum_with<F>(f: F, config: &SeriesConfig) -> NumericResult<f64>
where
    F: Fn(f64) -> f64,
{
    let Some(limit) = config.max_terms else {
        return Ok(series_sum(f));
    };

    let mut sum = 0.0;
    for term in 0..limit {
        let prev = sum;
        sum += f(term as f64);
        if sum == prev {
            tracing::trace!(terms = term + 1, sum, "series converged");
            return Ok(sum);
        }
    }

    tracing::debug!(limit, sum, "series did not reach a fixed point");
    Err(NumericError::IterationLimit {
        routine: "series_sum",
        limit,
        last: sum,
    })
}
