//! Error types for implore-numeric
//!
//! Two classes of failure exist:
//! - Precondition violations: a search interval that does not bracket a
//!   sign change or a value transition. These are programming errors and
//!   must not be retried.
//! - Iteration limits: a capped loop ran out of budget before converging.
//!
//! An interval that collapses during bisection is not an error; it is
//! reported through [`crate::Root::found`].

use thiserror::Error;

/// Main error type for numeric routines
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    /// f(low) and f(high) have the same sign
    #[error("root of f is not bracketed by [low, high]; f({low})={f_low} f({high})={f_high}")]
    NotBracketed {
        low: f64,
        high: f64,
        f_low: f64,
        f_high: f64,
    },

    /// Boolean function has no transition in range
    #[error("transition of f is not bracketed by [low, high]; f({low})={value} f({high})={value}")]
    NoTransition { low: f64, high: f64, value: bool },

    /// Capped loop exhausted its budget
    #[error("{routine} did not converge within {limit} iterations (last value {last})")]
    IterationLimit {
        routine: &'static str,
        limit: usize,
        last: f64,
    },
}

impl NumericError {
    /// True for misuse errors that indicate a caller bug
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            NumericError::NotBracketed { .. } | NumericError::NoTransition { .. }
        )
    }
}

/// Result type alias for numeric routines
pub type NumericResult<T> = Result<T, NumericError>;
