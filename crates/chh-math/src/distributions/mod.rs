//! Probability distributions, delegating to the `statrs` crate for the
//! underlying special functions.

/// The standard normal distribution.
pub mod normal;

pub use normal::{normal_cdf, normal_pdf};
