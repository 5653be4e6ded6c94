//! `ForwardCurve` — per-period forward rates observed at t = 0.

use crate::term_structure::{check_grid, InterpolationBuilder, TermStructure};
use crate::yield_curve::YieldCurve;
use chh_core::{errors::Result, Rate, Time};
use chh_math::Interpolation1D;

/// A curve of per-period forward rates.
///
/// The forward between two arbitrary times is derived from the implied
/// zero rates: `f(t1, t2) = (r2 t2 - r1 t1) / (t2 - t1)`.
#[derive(Debug)]
pub struct ForwardCurve {
    times: Vec<Time>,
    forwards: Vec<Rate>,
    zero_interp: Box<dyn Interpolation1D>,
    extrapolate: bool,
}

impl ForwardCurve {
    /// Build a forward curve from times and corresponding period forwards.
    pub fn new(
        times: &[Time],
        forwards: &[Rate],
        builder: &dyn InterpolationBuilder,
        extrapolate: bool,
    ) -> Result<Self> {
        check_grid(times, forwards)?;
        let zero_rates = implied_zero_rates(times, forwards);
        let zero_interp = builder.build(times, &zero_rates)?;
        Ok(Self {
            times: times.to_vec(),
            forwards: forwards.to_vec(),
            zero_interp,
            extrapolate,
        })
    }

    /// The simple forward rate between `t1` and `t2` (order-insensitive).
    pub fn forward(&self, t1: Time, t2: Time) -> Result<Rate> {
        let (t1, t2) = if t1 > t2 { (t2, t1) } else { (t1, t2) };
        chh_core::ensure!(t2 > t1, "forward rate needs two distinct times, got {t1}");
        self.check_range(t1)?;
        self.check_range(t2)?;
        let r1 = self.zero_interp.operator(t1);
        let r2 = self.zero_interp.operator(t2);
        Ok((r2 * t2 - r1 * t1) / (t2 - t1))
    }

    /// The node forward rates.
    pub fn forwards(&self) -> &[Rate] {
        &self.forwards
    }

    /// Convert to the zero-rate curve implied by the period forwards.
    pub fn to_yield_curve(&self, builder: &dyn InterpolationBuilder) -> Result<YieldCurve> {
        let rates = implied_zero_rates(&self.times, &self.forwards);
        YieldCurve::new(&self.times, &rates, builder, self.extrapolate)
    }
}

impl TermStructure for ForwardCurve {
    fn times(&self) -> &[Time] {
        &self.times
    }

    fn allows_extrapolation(&self) -> bool {
        self.extrapolate
    }
}

/// Accumulate period forwards into zero rates:
/// `r_0 = f_0`; `r_i = (r_{i-1} t_{i-1} + f_i (t_i - t_{i-1})) / t_i`.
fn implied_zero_rates(times: &[Time], forwards: &[Rate]) -> Vec<Rate> {
    let mut rates = vec![0.0; times.len()];
    rates[0] = forwards[0];
    for i in 1..times.len() {
        rates[i] =
            (rates[i - 1] * times[i - 1] + forwards[i] * (times[i] - times[i - 1])) / times[i];
    }
    rates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_structure::Linear;
    use approx::assert_abs_diff_eq;

    const TIMES: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
    const FORWARDS: [f64; 4] = [0.02, 0.03, 0.033, 0.034];

    #[test]
    fn flat_forwards_give_flat_zeros() {
        let curve = ForwardCurve::new(&TIMES, &[0.03; 4], &Linear, true).unwrap();
        let yc = curve.to_yield_curve(&Linear).unwrap();
        for t in TIMES {
            assert_abs_diff_eq!(yc.rate(t).unwrap(), 0.03, epsilon = 1e-14);
        }
    }

    #[test]
    fn forward_between_nodes_recovers_period_rate() {
        let curve = ForwardCurve::new(&TIMES, &FORWARDS, &Linear, true).unwrap();
        // The period forward between adjacent nodes is the node value.
        assert_abs_diff_eq!(curve.forward(1.0, 2.0).unwrap(), 0.03, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.forward(2.0, 5.0).unwrap(), 0.033, epsilon = 1e-12);
    }

    #[test]
    fn forward_is_order_insensitive() {
        let curve = ForwardCurve::new(&TIMES, &FORWARDS, &Linear, true).unwrap();
        assert_abs_diff_eq!(
            curve.forward(5.0, 2.0).unwrap(),
            curve.forward(2.0, 5.0).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn coincident_times_rejected() {
        let curve = ForwardCurve::new(&TIMES, &FORWARDS, &Linear, true).unwrap();
        assert!(curve.forward(2.0, 2.0).is_err());
    }

    #[test]
    fn yield_round_trip() {
        let curve = ForwardCurve::new(&TIMES, &FORWARDS, &Linear, true).unwrap();
        let yc = curve.to_yield_curve(&Linear).unwrap();
        let back = yc.to_forward_curve(&Linear).unwrap();
        for (got, want) in back.forwards().iter().zip(FORWARDS.iter()) {
            assert_abs_diff_eq!(*got, *want, epsilon = 1e-12);
        }
    }
}
