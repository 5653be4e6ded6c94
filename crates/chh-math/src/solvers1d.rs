//! 1D root-finding solvers.
//!
//! The calibration recovers every unknown from a scalar equation that is
//! monotone and sign-changing over a known bracket, so the solvers here all
//! require a bracket and fail fast when the bracket does not straddle a
//! root.

use chh_core::{
    errors::{Error, Result},
    Real,
};

const MAX_ITERATIONS: u32 = 100;
const DEFAULT_ACCURACY: Real = 1.0e-11;

#[inline]
fn accuracy_or_default(accuracy: Real) -> Real {
    if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    }
}

// ── Brent ─────────────────────────────────────────────────────────────────────

/// Brent's method for finding a root of `f(x)` in `[x_min, x_max]`.
///
/// Combines bisection, secant, and inverse quadratic interpolation.
/// `f(x_min)` and `f(x_max)` must have opposite signs (a value of exactly
/// zero at either endpoint returns that endpoint).
///
/// # Errors
/// `Error::Precondition` when the bracket does not contain a sign change;
/// `Error::Runtime` when the iteration limit is reached.
pub fn brent<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = accuracy_or_default(accuracy);
    let mut a = x_min;
    let mut b = x_max;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if fa * fb > 0.0 {
        return Err(Error::Precondition(format!(
            "Brent: no sign change over [{a}, {b}] (f = {fa}, {fb})"
        )));
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..MAX_ITERATIONS {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }
        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * acc;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb == 0.0 {
            return Ok(b);
        }
        if e.abs() >= tol && fa.abs() > fb.abs() {
            // Secant / inverse quadratic step
            let s = fb / fa;
            let (p, q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            let (p, q) = if p > 0.0 { (p, -q) } else { (-p, q) };
            if 2.0 * p < (3.0 * xm * q - (tol * q).abs()) && 2.0 * p < (e * q).abs() {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }
        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if xm > 0.0 {
            tol
        } else {
            -tol
        };
        fb = f(b);
    }
    Err(Error::Runtime(
        "Brent solver: maximum iterations reached".into(),
    ))
}

// ── Bisection ────────────────────────────────────────────────────────────────

/// Simple bisection method over `[x_min, x_max]`.
///
/// Same bracketing contract as [`brent`]; converges linearly and is used
/// mainly as a cross-check for the faster solver.
pub fn bisection<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = accuracy_or_default(accuracy);
    let mut a = x_min;
    let mut b = x_max;
    let fa = f(a);
    let fb = f(b);

    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if fa * fb > 0.0 {
        return Err(Error::Precondition(format!(
            "Bisection: no sign change over [{a}, {b}]"
        )));
    }

    // Orient so that f is negative at `a`
    if fa > 0.0 {
        std::mem::swap(&mut a, &mut b);
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = 0.5 * (a + b);
        let fm = f(mid);
        if fm == 0.0 || (b - a).abs() * 0.5 < acc {
            return Ok(mid);
        }
        if fm < 0.0 {
            a = mid;
        } else {
            b = mid;
        }
    }
    Err(Error::Runtime(
        "Bisection solver: maximum iterations reached".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn brent_sqrt2() {
        let root = brent(|x| x * x - 2.0, 0.0, 2.0, 1e-12).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn brent_root_at_bracket_start() {
        assert_eq!(brent(|x| x, 0.0, 1.0, 1e-12).unwrap(), 0.0);
    }

    #[test]
    fn brent_sign_change_required() {
        let err = brent(|x| x + 1.0, 0.0, 1.0, 1e-10).unwrap_err();
        assert!(matches!(err, chh_core::Error::Precondition(_)));
    }

    #[test]
    fn bisection_sqrt2() {
        let root = bisection(|x| x * x - 2.0, 0.0, 2.0, 1e-12).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn bisection_sign_change_required() {
        assert!(bisection(|x| x + 1.0, 0.0, 1.0, 1e-10).is_err());
    }

    #[test]
    fn zero_accuracy_falls_back_to_default() {
        let root = brent(|x| x - 0.25, 0.0, 1.0, 0.0).unwrap();
        assert!((root - 0.25).abs() < 1e-10);
    }

    proptest! {
        #[test]
        fn brent_recovers_quadratic_roots(a in 0.01f64..0.95) {
            let root = brent(|x| x * x - a, 0.0, 1.0, 1e-12).unwrap();
            prop_assert!((root - a.sqrt()).abs() < 1e-9);
        }

        #[test]
        fn brent_and_bisection_agree(a in 0.05f64..0.95) {
            let fast = brent(|x| x * x * x - a, 0.0, 1.0, 1e-12).unwrap();
            let slow = bisection(|x| x * x * x - a, 0.0, 1.0, 1e-12).unwrap();
            prop_assert!((fast - slow).abs() < 1e-8);
        }
    }
}
