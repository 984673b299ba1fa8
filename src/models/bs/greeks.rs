//! First and second order sensitivities of the Black-Scholes price.
//!
//! All Greeks are per unit change of the underlying parameter: theta is per
//! year, vega per 1.00 of volatility and rho per 1.00 of rate. Scale by
//! 1/365 or 1/100 at the presentation layer if needed.

use serde::{Deserialize, Serialize};

use super::{d1_d2, D1D2};
use crate::models::utils::{norm_cdf, norm_pdf};
use crate::types::OptionKind;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Greeks {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}

/// Analytic Greeks of a European option.
#[allow(non_snake_case)]
pub fn bs_greeks(kind: OptionKind, S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Greeks {
    let D1D2 { d1, d2 } = d1_d2(S, K, T, r, sigma);
    let sqrt_t = T.sqrt();
    let pdf_d1 = norm_pdf(d1);
    let discounted_strike = K * (-r * T).exp();

    // Shared by calls and puts
    let gamma = pdf_d1 / (S * sigma * sqrt_t);
    let vega = S * pdf_d1 * sqrt_t;
    let decay = -S * pdf_d1 * sigma / (2.0 * sqrt_t);

    match kind {
        OptionKind::Call => Greeks {
            delta: norm_cdf(d1),
            gamma,
            theta: decay - r * discounted_strike * norm_cdf(d2),
            vega,
            rho: T * discounted_strike * norm_cdf(d2),
        },
        OptionKind::Put => Greeks {
            delta: norm_cdf(d1) - 1.0,
            gamma,
            theta: decay + r * discounted_strike * norm_cdf(-d2),
            vega,
            rho: -T * discounted_strike * norm_cdf(-d2),
        },
    }
}
