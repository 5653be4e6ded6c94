//! # chh
//!
//! A Rust implementation of the CHH swaption calibration scheme: from a
//! grid of observed swaption prices and a discount curve, derive the
//! cumulative total-variance surface `v` and the elementary per-period
//! volatility surface `xi` that reproduce the observed prices exactly.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `chh-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use chh::models::ChhCalibration;
//! use chh::termstructures::{DiscountCurve, Previous};
//!
//! let times = [1.0, 2.0, 3.0];
//! let curve = DiscountCurve::new(&times, &[0.99, 0.97, 0.94], &Previous, true)?;
//! let prices = vec![vec![0.02], vec![0.0], vec![]];
//! let calibration =
//!     ChhCalibration::with_nodes(&prices, &curve, times.to_vec(), times.to_vec())?;
//! assert!(calibration.v()[(0, 0)] > 0.0);
//! # Ok::<(), chh::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use chh_core as core;

/// Mathematical utilities: solvers, distributions, interpolation, grids.
pub use chh_math as math;

/// Yield, discount, and forward curves.
pub use chh_termstructures as termstructures;

/// The calibration scheme and the Black swaption pricer.
pub use chh_models as models;
