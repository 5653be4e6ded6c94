//! # chh-math
//!
//! Numeric utilities for the CHH calibration workspace: 1D bracketed
//! root-finding, the standard normal distribution (via `statrs`), 1D
//! interpolation schemes, float comparison helpers, and a `Matrix` newtype
//! (over nalgebra) used for the calibration grids.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

/// 1D interpolation schemes.
pub mod interpolations;

/// The 2D grid type used for calibration surfaces.
pub mod matrix;

/// 1D root-finding solvers.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use distributions::{normal_cdf, normal_pdf};
pub use interpolations::{
    Interpolation1D, LinearInterpolation, LogLinearInterpolation, StepInterpolation,
};
pub use matrix::Matrix;
pub use solvers1d::{bisection, brent};
