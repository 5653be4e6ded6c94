//! The CHH calibration scheme.
//!
//! From a grid of observed swaption prices indexed by (option expiry, swap
//! tenor) and a discount curve sampled at the model nodes, the scheme
//! recovers two surfaces in sequence:
//!
//! 1. **Chi/V pass** (per expiry row, left to right): filter the row of
//!    forward discount ratios `psi[j][k] = df[k]/df[j]` to the entries
//!    below 1, then for each prefix solve three coupled equations, each by
//!    bracketed root-finding over `[0, 1]`:
//!    * the par-weight equation `wk * Σ slice + slice[last] - 1 = 0`,
//!    * the price equation
//!      `df[i] * (wk * (Σ chi_row + chi) + chi) - price[j][i] = 0`,
//!    * the variance equation
//!      `slice[i] * (Φ(v/2) - Φ(-v/2)) - chi = 0`.
//! 2. **Xi pass** (row-major over `v`): for every cell with positive
//!    cumulative variance, solve the consistency equation
//!    `Σ_{l<=i} (Σ_{k<=j} xi[l][i+k-l])² = v[i][j]²` for the cell's
//!    elementary volatility, reading only cells already resolved.
//!
//! Both passes are strictly sequential: each chi entry depends on the sum
//! of the entries solved before it in the same row, and each xi cell reads
//! every earlier row along its diagonals.
//!
//! Discount samples are assumed strictly positive and decreasing in node
//! order; the scheme does not re-validate them beyond shape checks.

use chh_core::{
    errors::{Error, Result},
    DiscountFactor, Price, Real, Time,
};
use chh_math::{brent, normal_cdf, Matrix};
use chh_termstructures::DiscountCurve;

/// Solver accuracy for every cell-level root-find.
const ACCURACY: Real = 1.0e-11;

/// The standard swap-tenor nodes, in years.
pub const STANDARD_TENORS: [Time; 15] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 12.0, 15.0, 20.0, 25.0, 30.0,
];

/// The standard option-expiry nodes, in years.
pub const STANDARD_EXPIRIES: [Time; 15] = [
    1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 15.0, 20.0, 25.0, 30.0,
];

/// A calibrated CHH volatility surface pair.
///
/// Construction runs the full two-pass scheme; afterwards the instance is
/// immutable and only the derived grids and node configuration can be
/// read. A quoted price that no parameter in the solve bracket can
/// reproduce aborts construction with [`Error::Infeasible`] naming the
/// offending cell; partial calibrations are never returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ChhCalibration {
    tenors: Vec<Time>,
    expiries: Vec<Time>,
    discounts: Vec<DiscountFactor>,
    chi: Matrix,
    v: Matrix,
    xi: Matrix,
}

impl ChhCalibration {
    /// Calibrate on the standard 15-node tenor/expiry grids.
    ///
    /// `price_grid` holds one row per expiry node; rows may be ragged, and
    /// only quoted cells are calibrated. The curve's node samples must
    /// align with the standard grid.
    pub fn new(price_grid: &[Vec<Price>], curve: &DiscountCurve) -> Result<Self> {
        Self::with_nodes(
            price_grid,
            curve,
            STANDARD_TENORS.to_vec(),
            STANDARD_EXPIRIES.to_vec(),
        )
    }

    /// Calibrate on caller-supplied node grids.
    ///
    /// `tenors` and `expiries` must be equal-length ascending sequences,
    /// matched one-to-one by the curve's discount samples and by the rows
    /// of `price_grid`.
    pub fn with_nodes(
        price_grid: &[Vec<Price>],
        curve: &DiscountCurve,
        tenors: Vec<Time>,
        expiries: Vec<Time>,
    ) -> Result<Self> {
        chh_core::ensure!(
            tenors.len() == expiries.len(),
            "tenor and expiry grids differ in length ({} vs {})",
            tenors.len(),
            expiries.len()
        );
        let discounts = curve.discounts().to_vec();
        chh_core::ensure!(
            discounts.len() == tenors.len(),
            "curve has {} discount samples but the node grids have {} entries",
            discounts.len(),
            tenors.len()
        );
        chh_core::ensure!(
            price_grid.len() == discounts.len(),
            "price grid has {} rows but the node grids have {} entries",
            price_grid.len(),
            discounts.len()
        );

        let n = discounts.len();
        let psi = psi_grid(&discounts);
        let mut chi = Matrix::zeros(n, n);
        let mut v = Matrix::zeros(n, n);
        for (j, prices) in price_grid.iter().enumerate() {
            solve_row(j, &psi, prices, &discounts, &mut chi, &mut v)?;
        }
        let xi = solve_xi(&v)?;

        Ok(Self {
            tenors,
            expiries,
            discounts,
            chi,
            v,
            xi,
        })
    }

    /// The cumulative total-variance grid, indexed `[expiry][tenor]`.
    pub fn v(&self) -> &Matrix {
        &self.v
    }

    /// The elementary per-period volatility grid.
    pub fn xi(&self) -> &Matrix {
        &self.xi
    }

    /// The swap-tenor nodes.
    pub fn tenors(&self) -> &[Time] {
        &self.tenors
    }

    /// The option-expiry nodes.
    pub fn expiries(&self) -> &[Time] {
        &self.expiries
    }

    /// The discount samples the calibration ran on.
    pub fn discounts(&self) -> &[DiscountFactor] {
        &self.discounts
    }

    pub(crate) fn chi(&self) -> &Matrix {
        &self.chi
    }
}

/// The forward discount-ratio grid `psi[i][k] = df[k] / df[i]`.
fn psi_grid(discounts: &[DiscountFactor]) -> Matrix {
    let n = discounts.len();
    Matrix::from_fn(n, n, |i, k| discounts[k] / discounts[i])
}

/// Run the chi/v pass for expiry row `j`.
///
/// Solves one cell per quoted price, bounded by the number of valid
/// (below-1) forward ratios in the row; the running chi sum is threaded
/// through explicitly since each cell's price equation depends on it.
fn solve_row(
    j: usize,
    psi: &Matrix,
    prices: &[Price],
    discounts: &[DiscountFactor],
    chi: &mut Matrix,
    v: &mut Matrix,
) -> Result<()> {
    let ratios: Vec<Real> = psi.row(j).into_iter().filter(|&p| p < 1.0).collect();
    let cells = ratios.len().min(prices.len());

    let mut chi_row_sum = 0.0;
    for i in 0..cells {
        let annuity: Real = ratios[..=i].iter().sum();
        let last = ratios[i];

        let wk = solve_cell(|w| w * annuity + last - 1.0, j, i, "par-weight")?;

        let df = discounts[i];
        let price = prices[i];
        let chi_j_k = solve_cell(
            |c| df * (wk * (chi_row_sum + c) + c) - price,
            j,
            i,
            "price",
        )?;

        let v_j_k = solve_cell(
            |x| last * (normal_cdf(x / 2.0) - normal_cdf(-x / 2.0)) - chi_j_k,
            j,
            i,
            "variance",
        )?;

        chi[(j, i)] = chi_j_k;
        v[(j, i)] = v_j_k;
        chi_row_sum += chi_j_k;
    }
    Ok(())
}

/// Run the xi pass over the full variance grid.
///
/// Cells are visited in row-major order so every grid read inside the
/// residual refers to an already-committed value; the trial value for the
/// cell under solve is substituted functionally rather than written into
/// the grid.
fn solve_xi(v: &Matrix) -> Result<Matrix> {
    let n = v.rows();
    let mut xi = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            if v[(i, j)] <= 0.0 {
                continue;
            }
            let target = v[(i, j)] * v[(i, j)];
            let root = solve_cell(
                |trial| diagonal_variance(&xi, i, j, trial) - target,
                i,
                j,
                "volatility consistency",
            )?;
            xi[(i, j)] = root;
        }
    }
    Ok(xi)
}

/// The cumulative variance implied by the elementary grid at cell `(i, j)`,
/// with `trial` standing in for the not-yet-committed cell itself:
/// `Σ_{l<=i} (Σ_{k<=j} xi[l][i+k-l])²`.
fn diagonal_variance(xi: &Matrix, i: usize, j: usize, trial: Real) -> Real {
    (0..=i)
        .map(|l| {
            let inner: Real = (0..=j)
                .map(|k| {
                    let m = i + k - l;
                    if l == i && m == j {
                        trial
                    } else {
                        xi[(l, m)]
                    }
                })
                .sum();
            inner * inner
        })
        .sum()
}

/// Solve one cell equation over `[0, 1]`, translating a missing sign
/// change into the cell-level infeasibility error.
fn solve_cell<F>(f: F, row: usize, column: usize, equation: &str) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    brent(f, 0.0, 1.0, ACCURACY).map_err(|err| match err {
        Error::Precondition(_) => Error::Infeasible {
            row,
            column,
            detail: format!("no root of the {equation} equation in [0, 1]"),
        },
        other => other,
    })
}
