//! # chh-termstructures
//!
//! Term-structure curves over a fixed time grid: zero-rate, discount-factor,
//! and forward-rate curves with pairwise conversions.
//!
//! Each curve holds its samples at strictly positive year-fraction nodes and
//! evaluates continuously through a pluggable interpolation scheme; whether a
//! curve may be read outside its node range is an explicit flag chosen at
//! construction.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The base trait and interpolation-builder plumbing shared by all curves.
pub mod term_structure;

/// Discount-factor curve.
pub mod discount_curve;

/// Forward-rate curve.
pub mod forward_curve;

/// Zero-rate (yield) curve.
pub mod yield_curve;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use discount_curve::DiscountCurve;
pub use forward_curve::ForwardCurve;
pub use term_structure::{InterpolationBuilder, Linear, LogLinear, Previous, TermStructure};
pub use yield_curve::YieldCurve;
