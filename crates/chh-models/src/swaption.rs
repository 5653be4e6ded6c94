//! Black-formula swaption pricing.
//!
//! Converts an implied-volatility quote into a price under the same
//! conventions the calibration's price identity assumes. The calibration
//! itself never calls the pricer; it is the upstream tool that turns a
//! quoted volatility surface into the observed price grid.

use chh_core::{errors::Result, Price, Rate, Time, Volatility};
use chh_math::normal_cdf;
use chh_termstructures::DiscountCurve;

/// A European payer swaption quoted in implied Black volatility.
#[derive(Debug, Clone, PartialEq)]
pub struct Swaption {
    /// Fixed rate of the underlying swap.
    pub strike: Rate,
    /// Option expiry, in years.
    pub maturity: Time,
    /// Length of the underlying swap, in years.
    pub tenor: Time,
    /// Implied Black volatility quote.
    pub quote: Volatility,
    /// Forward swap rate observed for (maturity, tenor).
    pub forward_swap: Rate,
}

impl Swaption {
    /// Create a swaption contract; all inputs must be strictly positive.
    pub fn new(
        strike: Rate,
        maturity: Time,
        tenor: Time,
        quote: Volatility,
        forward_swap: Rate,
    ) -> Result<Self> {
        chh_core::ensure!(strike > 0.0, "strike must be positive, got {strike}");
        chh_core::ensure!(maturity > 0.0, "maturity must be positive, got {maturity}");
        chh_core::ensure!(tenor > 0.0, "tenor must be positive, got {tenor}");
        chh_core::ensure!(quote > 0.0, "volatility quote must be positive, got {quote}");
        chh_core::ensure!(
            forward_swap > 0.0,
            "forward swap rate must be positive, got {forward_swap}"
        );
        Ok(Self {
            strike,
            maturity,
            tenor,
            quote,
            forward_swap,
        })
    }

    /// The Black price without the discount factor to expiry.
    pub fn undiscounted_price(&self) -> Price {
        black_swaption_price(self.forward_swap, self.strike, self.quote, self.maturity)
    }

    /// The Black price discounted with `curve`'s factor at expiry.
    pub fn price(&self, curve: &DiscountCurve) -> Result<Price> {
        Ok(curve.discount(self.maturity)? * self.undiscounted_price())
    }
}

/// The undiscounted Black formula `F·Φ(d1) - K·Φ(d2)` with
/// `d1,2 = (ln(F/K) ± σ²T/2) / (σ√T)`.
pub fn black_swaption_price(
    forward: Rate,
    strike: Rate,
    vol: Volatility,
    maturity: Time,
) -> Price {
    let std_dev = vol * maturity.sqrt();
    let d1 = ((forward / strike).ln() + 0.5 * vol * vol * maturity) / std_dev;
    let d2 = d1 - std_dev;
    forward * normal_cdf(d1) - strike * normal_cdf(d2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chh_termstructures::Previous;

    fn sample() -> Swaption {
        Swaption::new(0.03, 1.0, 5.0, 0.2, 0.03).unwrap()
    }

    #[test]
    fn atm_black_value() {
        // F = K: price = F * (Φ(σ√T/2) - Φ(-σ√T/2))
        assert_abs_diff_eq!(
            sample().undiscounted_price(),
            0.002_389_670_24,
            epsilon = 1e-8
        );
    }

    #[test]
    fn price_increases_with_volatility() {
        let low = sample();
        let high = Swaption::new(0.03, 1.0, 5.0, 0.25, 0.03).unwrap();
        assert!(high.undiscounted_price() > low.undiscounted_price());
    }

    #[test]
    fn discounting_applies_the_expiry_factor() {
        let times = [1.0, 2.0, 3.0];
        let discounts = [0.99, 0.97, 0.94];
        let curve = DiscountCurve::new(&times, &discounts, &Previous, true).unwrap();
        let swaption = sample();
        assert_abs_diff_eq!(
            swaption.price(&curve).unwrap(),
            0.99 * swaption.undiscounted_price(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn deep_in_the_money_approaches_intrinsic() {
        let s = Swaption::new(0.01, 1.0, 5.0, 0.05, 0.05).unwrap();
        let price = s.undiscounted_price();
        assert_abs_diff_eq!(price, 0.04, epsilon = 1e-6);
    }

    #[test]
    fn non_positive_inputs_rejected() {
        assert!(Swaption::new(0.0, 1.0, 5.0, 0.2, 0.03).is_err());
        assert!(Swaption::new(0.03, -1.0, 5.0, 0.2, 0.03).is_err());
        assert!(Swaption::new(0.03, 1.0, 5.0, 0.0, 0.03).is_err());
        assert!(Swaption::new(0.03, 1.0, 5.0, 0.2, 0.0).is_err());
    }
}
