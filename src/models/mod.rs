pub mod bs;

/// Standard normal distribution helpers shared by the pricing formulas
pub mod utils {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    /// Standard normal cumulative distribution function.
    ///
    /// Evaluated as `0.5 * erfc(-x / sqrt(2))`, which keeps full relative
    /// precision deep in the lower tail where `1 + erf` would cancel.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }

    /// Standard normal probability density function
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

    /// Calculate log-moneyness: ln(S/K)
    pub fn log_moneyness(spot: f64, strike: f64) -> f64 {
        (spot / strike).ln()
    }

    /// Undiscounted exercise value
    pub fn intrinsic_value(is_call: bool, spot: f64, strike: f64) -> f64 {
        if is_call {
            (spot - strike).max(0.0)
        } else {
            (strike - spot).max(0.0)
        }
    }

}
