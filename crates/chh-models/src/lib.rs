//! # chh-models
//!
//! The CHH swaption-calibration scheme and the Black swaption pricer that
//! shares its price/quote conventions.
//!
//! [`ChhCalibration`] consumes a grid of observed swaption prices together
//! with a discount curve and produces two surfaces: the cumulative
//! total-variance grid `v` and the elementary per-period volatility grid
//! `xi`, which jointly reproduce the observed prices under the model's
//! pricing identity.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The two-pass calibration scheme.
pub mod chh_calibration;

/// Black-formula swaption pricing.
pub mod swaption;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use chh_calibration::{ChhCalibration, STANDARD_EXPIRIES, STANDARD_TENORS};
pub use swaption::{black_swaption_price, Swaption};
