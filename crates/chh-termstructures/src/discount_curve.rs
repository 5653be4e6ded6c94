//! `DiscountCurve` — discount factors on a time grid.
//!
//! The curve stores the raw node discount factors (the calibration reads
//! these by index) and evaluates continuously as `P(t) = exp(-z(t) * t)`,
//! with the zero rate `z` interpolated from the rates implied by the node
//! discounts.

use crate::term_structure::{check_grid, InterpolationBuilder, TermStructure};
use crate::yield_curve::YieldCurve;
use chh_core::{errors::Result, DiscountFactor, Rate, Time};
use chh_math::Interpolation1D;

/// A discount-factor curve.
#[derive(Debug)]
pub struct DiscountCurve {
    times: Vec<Time>,
    discounts: Vec<DiscountFactor>,
    zero_interp: Box<dyn Interpolation1D>,
    extrapolate: bool,
}

impl DiscountCurve {
    /// Build a discount curve from times and corresponding discount factors.
    ///
    /// # Arguments
    /// * `times` — ascending, strictly positive year fractions
    /// * `discounts` — strictly positive discount factors at each time
    /// * `builder` — interpolation strategy for the implied zero rates
    /// * `extrapolate` — whether evaluation outside the grid is allowed
    pub fn new(
        times: &[Time],
        discounts: &[DiscountFactor],
        builder: &dyn InterpolationBuilder,
        extrapolate: bool,
    ) -> Result<Self> {
        check_grid(times, discounts)?;
        chh_core::ensure!(
            discounts.iter().all(|&d| d > 0.0),
            "discount factors must be strictly positive"
        );
        let zero_rates = implied_zero_rates(times, discounts);
        let zero_interp = builder.build(times, &zero_rates)?;
        Ok(Self {
            times: times.to_vec(),
            discounts: discounts.to_vec(),
            zero_interp,
            extrapolate,
        })
    }

    /// The discount factor for time `t`.
    ///
    /// `t = 0` is the identity discount of 1 regardless of the grid.
    pub fn discount(&self, t: Time) -> Result<DiscountFactor> {
        if t == 0.0 {
            return Ok(1.0);
        }
        self.check_range(t)?;
        let z = self.zero_interp.operator(t);
        Ok((-z * t).exp())
    }

    /// The raw node discount factors, aligned with [`TermStructure::times`].
    pub fn discounts(&self) -> &[DiscountFactor] {
        &self.discounts
    }

    /// Convert to the zero-rate curve implied by the node discounts.
    pub fn to_yield_curve(&self, builder: &dyn InterpolationBuilder) -> Result<YieldCurve> {
        let rates = implied_zero_rates(&self.times, &self.discounts);
        YieldCurve::new(&self.times, &rates, builder, self.extrapolate)
    }
}

impl TermStructure for DiscountCurve {
    fn times(&self) -> &[Time] {
        &self.times
    }

    fn allows_extrapolation(&self) -> bool {
        self.extrapolate
    }
}

/// `z_i = -ln(d_i) / t_i` at each node.
fn implied_zero_rates(times: &[Time], discounts: &[DiscountFactor]) -> Vec<Rate> {
    times
        .iter()
        .zip(discounts.iter())
        .map(|(&t, &d)| -d.ln() / t)
        .collect()
}
