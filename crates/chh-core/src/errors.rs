//! Error types for the CHH calibration workspace.
//!
//! A single `thiserror`-derived enum covers the whole workspace: generic
//! numeric failures, violated preconditions, and the cell-level calibration
//! failure that the solvers report when an observed price cannot be
//! reproduced by any parameter in the solve bracket.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A cell-level solve found no root inside its bracket: the quoted
    /// price (or the implied variance) lies outside the model's feasible
    /// range for that (expiry, tenor) node pair.
    #[error("calibration infeasible at cell ({row}, {column}): {detail}")]
    Infeasible {
        /// Expiry-node (row) index of the failing cell.
        row: usize,
        /// Tenor-node (column) index of the failing cell.
        column: usize,
        /// Which equation failed to bracket a root.
        detail: String,
    },
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Check a precondition, returning `Err(Error::Precondition(...))` when it
/// does not hold.
///
/// # Example
/// ```
/// use chh_core::ensure;
/// fn positive(x: f64) -> chh_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use chh_core::fail;
/// fn always_err() -> chh_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_display_names_the_cell() {
        let err = Error::Infeasible {
            row: 3,
            column: 7,
            detail: "no root of the price equation in [0, 1]".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("(3, 7)"), "got: {msg}");
        assert!(msg.contains("price equation"), "got: {msg}");
    }

    #[test]
    fn ensure_returns_precondition() {
        fn check(n: usize) -> Result<()> {
            ensure!(n == 15, "expected 15 nodes, got {n}");
            Ok(())
        }
        assert!(check(15).is_ok());
        assert_eq!(
            check(3),
            Err(Error::Precondition("expected 15 nodes, got 3".into()))
        );
    }
}
