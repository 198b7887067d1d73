//! implore-numeric - Numerical helpers for distribution code
//!
//! This crate provides the small numeric primitives that probability
//! distributions lean on:
//!
//! - **Scalars**: sign classification, integer min/max/sum
//! - **Combinatorics**: exact binomial coefficients for small `n`,
//!   log-gamma approximations for large `n`
//! - **Bisection**: root finding on continuous functions and transition
//!   search on boolean step functions
//! - **Series**: infinite-series summation with fixed-point termination
//! - **Map**: elementwise evaluation, optionally on rayon's pool
//!
//! Everything runs in `f64`/`i64` arithmetic. Routines that loop until
//! convergence have `*_with` variants taking a config with an optional
//! iteration cap.

pub mod bisect;
pub mod combinatorics;
pub mod config;
pub mod error;
pub mod map;
pub mod oracle;
pub mod scalar;
pub mod series;

pub use bisect::*;
pub use combinatorics::*;
pub use config::*;
pub use error::*;
pub use map::*;
pub use scalar::*;
pub use series::*;
