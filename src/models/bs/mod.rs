// Closed-form Black-Scholes pricing for European calls and puts on a
// non-dividend-paying underlying. Inputs are not range-checked: T=0,
// sigma=0 or non-positive S/K produce whatever IEEE-754 value the
// arithmetic yields. Callers wanting validation go through `OptionInputs`.

pub mod greeks;

use crate::models::utils::{log_moneyness, norm_cdf};
use crate::types::OptionKind;

/// Standardized variables d1 and d2 of the Black-Scholes formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct D1D2 {
    pub d1: f64,
    pub d2: f64,
}

/// Compute d1 and d2.
///
/// ```text
/// d1 = (ln(S/K) + (r + sigma²/2)·T) / (sigma·√T)
/// d2 = d1 - sigma·√T
/// ```
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> D1D2 {
    let sig_sqrt_t = sigma * T.sqrt();
    let d1 = (log_moneyness(S, K) + (r + 0.5 * sigma * sigma) * T) / sig_sqrt_t;
    D1D2 {
        d1,
        d2: d1 - sig_sqrt_t,
    }
}

/// Price of a European option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_price(kind: OptionKind, S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let D1D2 { d1, d2 } = d1_d2(S, K, T, r, sigma);
    let df = (-r * T).exp();
    match kind {
        OptionKind::Call => S * norm_cdf(d1) - K * df * norm_cdf(d2),
        OptionKind::Put => K * df * norm_cdf(-d2) - S * norm_cdf(-d1),
    }
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    bs_price(OptionKind::Call, S, K, T, r, sigma)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    bs_price(OptionKind::Put, S, K, T, r, sigma)
}
