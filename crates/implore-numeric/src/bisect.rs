//! Bisection on continuous and boolean functions
//!
//! Both searches halve a bracket `[low, high]` until the target is located
//! or the midpoint can no longer be distinguished from an endpoint in `f64`.
//! Calling either routine on an interval that does not bracket anything is
//! a caller bug and is reported as an error rather than a wrong answer.

use crate::config::BisectConfig;
use crate::error::{NumericError, NumericResult};
use crate::scalar::sign;

/// Outcome of a continuous bisection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    /// Location of the root, or of the apparent discontinuity
    pub x: f64,
    /// False when the interval collapsed without |f(x)| reaching tolerance
    pub found: bool,
}

/// Interval around a boolean transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub low: f64,
    pub high: f64,
}

impl Bracket {
    /// Width of the bracket
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Midpoint of the bracket
    pub fn midpoint(&self) -> f64 {
        (self.high + self.low) / 2.0
    }
}

fn within(value: f64, tolerance: f64) -> bool {
    -tolerance <= value && value <= tolerance
}

/// Find an `x` in `[low, high]` with `|f(x)| <= tolerance`.
///
/// `f(low)` and `f(high)` must have opposite signs. If `f` has no root in
/// the interval (e.g. it jumps across zero), the returned [`Root`] holds the
/// location of the apparent discontinuity with `found == false`.
///
/// The loop runs until the interval collapses at `f64` precision; use
/// [`bisect_with`] to cap it.
pub fn bisect<F>(f: F, low: f64, high: f64, tolerance: f64) -> NumericResult<Root>
where
    F: Fn(f64) -> f64,
{
    bisect_with(f, low, high, tolerance, &BisectConfig::default())
}

/// [`bisect`] with an optional cap on midpoint evaluations
pub fn bisect_with<F>(
    f: F,
    mut low: f64,
    mut high: f64,
    tolerance: f64,
    config: &BisectConfig,
) -> NumericResult<Root>
where
    F: Fn(f64) -> f64,
{
    let mut f_low = f(low);
    let f_high = f(high);
    if within(f_low, tolerance) {
        return Ok(Root { x: low, found: true });
    }
    if within(f_high, tolerance) {
        return Ok(Root { x: high, found: true });
    }
    if sign(f_low) == sign(f_high) {
        tracing::warn!(low, high, f_low, f_high, "bisect called on a non-bracketing interval");
        return Err(NumericError::NotBracketed {
            low,
            high,
            f_low,
            f_high,
        });
    }

    let mut iterations = 0usize;
    loop {
        if let Some(limit) = config.max_iterations {
            if iterations >= limit {
                tracing::debug!(limit, low, high, "bisect hit its iteration limit");
                return Err(NumericError::IterationLimit {
                    routine: "bisect",
                    limit,
                    last: (high + low) / 2.0,
                });
            }
        }
        iterations += 1;

        let mid = (high + low) / 2.0;
        let f_mid = f(mid);
        if within(f_mid, tolerance) {
            tracing::trace!(iterations, x = mid, "bisect converged");
            return Ok(Root { x: mid, found: true });
        }
        if mid == high || mid == low {
            tracing::debug!(x = mid, f_mid, "bisect stopped at an apparent discontinuity");
            return Ok(Root { x: mid, found: false });
        }
        // NaN and out-of-tolerance zeros fall through to the high side.
        if sign(f_mid) == sign(f_low) {
            low = mid;
            f_low = f_mid;
        } else {
            high = mid;
        }
    }
}

/// Locate the transition of a boolean step function.
///
/// Returns a [`Bracket`] inside `[low, high]` with `f(bracket.low) !=
/// f(bracket.high)` and width at most `xtol`, or the narrowest bracket `f64`
/// can represent when `xtol` is smaller than that. `f(low)` must differ from
/// `f(high)`.
pub fn bisect_bool<F>(f: F, low: f64, high: f64, xtol: f64) -> NumericResult<Bracket>
where
    F: Fn(f64) -> bool,
{
    bisect_bool_with(f, low, high, xtol, &BisectConfig::default())
}

/// [`bisect_bool`] with an optional cap on midpoint evaluations
pub fn bisect_bool_with<F>(
    f: F,
    mut low: f64,
    mut high: f64,
    xtol: f64,
    config: &BisectConfig,
) -> NumericResult<Bracket>
where
    F: Fn(f64) -> bool,
{
    let f_low = f(low);
    let f_high = f(high);
    if f_low == f_high {
        tracing::warn!(low, high, value = f_low, "bisect_bool called without a transition");
        return Err(NumericError::NoTransition {
            low,
            high,
            value: f_low,
        });
    }

    let mut iterations = 0usize;
    loop {
        if high - low <= xtol {
            tracing::trace!(iterations, low, high, "bisect_bool reached xtol");
            return Ok(Bracket { low, high });
        }
        let mid = (high + low) / 2.0;
        if mid == high || mid == low {
            tracing::debug!(low, high, "bisect_bool interval collapsed before xtol");
            return Ok(Bracket { low, high });
        }
        if let Some(limit) = config.max_iterations {
            if iterations >= limit {
                tracing::debug!(limit, low, high, "bisect_bool hit its iteration limit");
                return Err(NumericError::IterationLimit {
                    routine: "bisect_bool",
                    limit,
                    last: mid,
                });
            }
        }
        iterations += 1;

        // f_low never changes: low only moves to points that share its value.
        if f(mid) == f_low {
            low = mid;
        } else {
            high = mid;
        }
    }
}
