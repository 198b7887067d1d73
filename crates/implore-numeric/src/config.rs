//! Iteration limits for the convergence loops
//!
//! Bisection and series summation loop until a floating-point fixed point by
//! default. These configs make an upper bound explicit. They deserialize
//! with defaults so callers can embed them in their own settings files.

use serde::{Deserialize, Serialize};

/// Enough halvings to collapse any finite `f64` interval
pub const DEFAULT_MAX_BISECT_ITERATIONS: usize = 1100;

/// Term budget used by [`SeriesConfig::bounded`]
pub const DEFAULT_MAX_SERIES_TERMS: usize = 1_000_000;

/// Bisection loop settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BisectConfig {
    /// Maximum number of midpoint evaluations, `None` for unbounded
    pub max_iterations: Option<usize>,
}

impl BisectConfig {
    /// Unbounded bisection
    pub fn new() -> Self {
        Self::default()
    }

    /// Capped at [`DEFAULT_MAX_BISECT_ITERATIONS`]
    pub fn bounded() -> Self {
        Self::new().with_max_iterations(DEFAULT_MAX_BISECT_ITERATIONS)
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

/// Series summation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Maximum number of terms to add, `None` for unbounded
    pub max_terms: Option<usize>,
}

impl SeriesConfig {
    /// Unbounded summation
    pub fn new() -> Self {
        Self::default()
    }

    /// Capped at [`DEFAULT_MAX_SERIES_TERMS`]
    pub fn bounded() -> Self {
        Self::new().with_max_terms(DEFAULT_MAX_SERIES_TERMS)
    }

    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = Some(max_terms);
        self
    }
}
