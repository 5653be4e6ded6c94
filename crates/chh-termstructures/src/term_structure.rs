//! `TermStructure` — base trait for all curves, plus the interpolation
//! builders the curve constructors accept.
//!
//! Every curve is defined over an ascending grid of strictly positive
//! year-fraction times and carries an extrapolation flag; reading a curve
//! outside its grid with the flag off is an error.

use chh_core::{errors::Result, Real, Time};
use chh_math::{
    Interpolation1D, LinearInterpolation, LogLinearInterpolation, StepInterpolation,
};

/// Base trait for all term structures.
pub trait TermStructure: std::fmt::Debug {
    /// The curve's time grid (year fractions, ascending, strictly positive).
    fn times(&self) -> &[Time];

    /// Whether the curve may be evaluated outside its time grid.
    fn allows_extrapolation(&self) -> bool;

    /// The earliest time on the grid.
    fn min_time(&self) -> Time {
        self.times().first().copied().unwrap_or(0.0)
    }

    /// The latest time on the grid.
    fn max_time(&self) -> Time {
        self.times().last().copied().unwrap_or(0.0)
    }

    /// Check that `t` may be evaluated: non-negative, and inside the grid
    /// unless extrapolation is allowed.
    fn check_range(&self, t: Time) -> Result<()> {
        chh_core::ensure!(t >= 0.0, "negative time {t} given");
        chh_core::ensure!(
            self.allows_extrapolation() || (t >= self.min_time() && t <= self.max_time()),
            "time {t} is outside the curve grid [{}, {}] and extrapolation is disabled",
            self.min_time(),
            self.max_time()
        );
        Ok(())
    }
}

/// Trait for creating an interpolation from `(xs, ys)` slices.
///
/// Lets callers choose the interpolation method without the curve needing
/// to know the concrete type.
pub trait InterpolationBuilder: std::fmt::Debug {
    /// Build an interpolation over the given x and y values.
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>>;
}

/// Linear interpolation builder.
#[derive(Debug, Clone, Copy)]
pub struct Linear;

impl InterpolationBuilder for Linear {
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>> {
        Ok(Box::new(LinearInterpolation::new(xs, ys)?))
    }
}

/// Log-linear interpolation builder.
#[derive(Debug, Clone, Copy)]
pub struct LogLinear;

impl InterpolationBuilder for LogLinear {
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>> {
        Ok(Box::new(LogLinearInterpolation::new(xs, ys)?))
    }
}

/// Previous-value step interpolation builder.
#[derive(Debug, Clone, Copy)]
pub struct Previous;

impl InterpolationBuilder for Previous {
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>> {
        Ok(Box::new(StepInterpolation::new(xs, ys)?))
    }
}

/// Shared constructor check: equal-length grids, at least two nodes, all
/// times strictly positive.
pub(crate) fn check_grid(times: &[Time], values: &[Real]) -> Result<()> {
    chh_core::ensure!(
        times.len() == values.len(),
        "time grid has {} entries but {} values were given",
        times.len(),
        values.len()
    );
    chh_core::ensure!(times.len() >= 2, "need at least 2 curve nodes");
    chh_core::ensure!(
        times.iter().all(|&t| t > 0.0),
        "curve times must be strictly positive"
    );
    Ok(())
}
