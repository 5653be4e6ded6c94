//! `YieldCurve` — continuously-compounded zero rates on a time grid.

use crate::discount_curve::DiscountCurve;
use crate::forward_curve::ForwardCurve;
use crate::term_structure::{check_grid, InterpolationBuilder, TermStructure};
use chh_core::{errors::Result, Rate, Time};
use chh_math::Interpolation1D;

/// A yield curve defined by zero rates at known times.
///
/// Interpolation between nodes is delegated to the builder chosen at
/// construction (linear, log-linear, previous-value step).
#[derive(Debug)]
pub struct YieldCurve {
    times: Vec<Time>,
    rates: Vec<Rate>,
    interp: Box<dyn Interpolation1D>,
    extrapolate: bool,
}

impl YieldCurve {
    /// Build a zero-rate curve from times and corresponding rates.
    ///
    /// # Arguments
    /// * `times` — ascending, strictly positive year fractions
    /// * `rates` — continuously-compounded zero rates at each time
    /// * `builder` — interpolation strategy
    /// * `extrapolate` — whether evaluation outside the grid is allowed
    pub fn new(
        times: &[Time],
        rates: &[Rate],
        builder: &dyn InterpolationBuilder,
        extrapolate: bool,
    ) -> Result<Self> {
        check_grid(times, rates)?;
        let interp = builder.build(times, rates)?;
        Ok(Self {
            times: times.to_vec(),
            rates: rates.to_vec(),
            interp,
            extrapolate,
        })
    }

    /// The zero rate for maturity `t`.
    pub fn rate(&self, t: Time) -> Result<Rate> {
        self.check_range(t)?;
        Ok(self.interp.operator(t))
    }

    /// The node zero rates.
    pub fn rates(&self) -> &[Rate] {
        &self.rates
    }

    /// Convert to a discount curve, `df_i = exp(-r_i * t_i)` at each node.
    pub fn to_discount_curve(&self, builder: &dyn InterpolationBuilder) -> Result<DiscountCurve> {
        let discounts: Vec<f64> = self
            .times
            .iter()
            .zip(self.rates.iter())
            .map(|(&t, &r)| (-r * t).exp())
            .collect();
        DiscountCurve::new(&self.times, &discounts, builder, self.extrapolate)
    }

    /// Convert to a forward curve of per-period rates.
    ///
    /// `f_0 = r_0`; `f_i = (r_i t_i - r_{i-1} t_{i-1}) / (t_i - t_{i-1})`.
    pub fn to_forward_curve(&self, builder: &dyn InterpolationBuilder) -> Result<ForwardCurve> {
        let mut forwards = vec![0.0; self.times.len()];
        forwards[0] = self.rates[0];
        for i in 1..self.times.len() {
            forwards[i] = (self.rates[i] * self.times[i] - self.rates[i - 1] * self.times[i - 1])
                / (self.times[i] - self.times[i - 1]);
        }
        ForwardCurve::new(&self.times, &forwards, builder, self.extrapolate)
    }
}

impl TermStructure for YieldCurve {
    fn times(&self) -> &[Time] {
        &self.times
    }

    fn allows_extrapolation(&self) -> bool {
        self.extrapolate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_structure::{Linear, Previous};
    use approx::assert_abs_diff_eq;

    const TIMES: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
    const RATES: [f64; 4] = [0.02, 0.025, 0.03, 0.032];

    #[test]
    fn rate_at_nodes() {
        let curve = YieldCurve::new(&TIMES, &RATES, &Linear, true).unwrap();
        for (t, r) in TIMES.iter().zip(RATES.iter()) {
            assert_abs_diff_eq!(curve.rate(*t).unwrap(), *r, epsilon = 1e-15);
        }
    }

    #[test]
    fn previous_interpolation_holds_left_node() {
        let curve = YieldCurve::new(&TIMES, &RATES, &Previous, true).unwrap();
        assert_abs_diff_eq!(curve.rate(1.9).unwrap(), 0.02, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.rate(2.0).unwrap(), 0.025, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.rate(20.0).unwrap(), 0.032, epsilon = 1e-15);
    }

    #[test]
    fn extrapolation_flag_enforced() {
        let curve = YieldCurve::new(&TIMES, &RATES, &Linear, false).unwrap();
        assert!(curve.rate(5.0).is_ok());
        assert!(curve.rate(11.0).is_err());
        assert!(curve.rate(0.5).is_err());
    }

    #[test]
    fn negative_time_rejected() {
        let curve = YieldCurve::new(&TIMES, &RATES, &Linear, true).unwrap();
        assert!(curve.rate(-1.0).is_err());
    }

    #[test]
    fn discount_conversion_matches_closed_form() {
        let curve = YieldCurve::new(&TIMES, &RATES, &Linear, true).unwrap();
        let dc = curve.to_discount_curve(&Previous).unwrap();
        for (t, r) in TIMES.iter().zip(RATES.iter()) {
            assert_abs_diff_eq!(
                dc.discount(*t).unwrap(),
                (-r * t).exp(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn forward_conversion_round_trips() {
        let curve = YieldCurve::new(&TIMES, &RATES, &Linear, true).unwrap();
        let fc = curve.to_forward_curve(&Linear).unwrap();
        let back = fc.to_yield_curve(&Linear).unwrap();
        for (t, r) in TIMES.iter().zip(RATES.iter()) {
            assert_abs_diff_eq!(back.rate(*t).unwrap(), *r, epsilon = 1e-12);
        }
    }

    #[test]
    fn mismatched_lengths_rejected() {
        assert!(YieldCurve::new(&TIMES, &RATES[..3], &Linear, true).is_err());
    }
}
