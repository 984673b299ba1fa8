//! # bs-pricer-lib: Black-Scholes pricing for European options
//!
//! Closed-form valuation of European calls and puts on a non-dividend-paying
//! underlying, plus the analytics usually shown next to a price: Greeks, the
//! intrinsic/time value split and a spot sensitivity ladder.
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer_lib::{price, OptionKind, bs_price};
//!
//! // Option kind given as text, as a caller at an API boundary would
//! let call = price(100.0, 100.0, 240.0 / 365.0, 0.01, 0.30, "call")?;
//! assert!((call - 9.9805).abs() < 1e-4);
//!
//! // Typed form, cannot fail
//! let put = bs_price(OptionKind::Put, 100.0, 100.0, 240.0 / 365.0, 0.01, 0.30);
//! assert!((put - 9.3251).abs() < 1e-4);
//!
//! // Anything other than "call"/"put" is rejected before any arithmetic
//! assert!(price(100.0, 100.0, 1.0, 0.01, 0.30, "straddle").is_err());
//! # Ok::<(), bs_pricer_lib::PricingError>(())
//! ```
//!
//! ## Numeric domain
//!
//! The pricer does not range-check its inputs. `T = 0`, `sigma = 0` or a
//! non-positive spot/strike produce whatever IEEE-754 value falls out of the
//! formula (often NaN or infinity). Use [`analyze`] or
//! [`OptionInputs::validate`] when inputs come from outside.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod analysis;
pub mod error;
pub mod models;
pub mod types;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use analysis::{
    analyze,
    config::{AnalysisConfig, AnalysisFile, SensitivityConfig},
    report::{format_price_line, write_sensitivity_csv},
    sensitivity_ladder, OptionAnalysis, SensitivityPoint,
};
pub use error::{PricingError, Result};
pub use models::bs::{
    bs_call_price, bs_price, bs_put_price, d1_d2,
    greeks::{bs_greeks, Greeks},
    D1D2,
};
pub use models::utils::{norm_cdf, norm_pdf};
pub use types::{OptionInputs, OptionKind};

/// Price a European option with the kind given by name.
///
/// # Arguments
///
/// * `s` - Current underlying price
/// * `k` - Strike price
/// * `t` - Time to maturity in years
/// * `r` - Continuously-compounded risk-free rate
/// * `sigma` - Annualized volatility (e.g. 0.30 for 30%)
/// * `option_kind` - `"call"` or `"put"`, exact lowercase
///
/// # Errors
///
/// [`PricingError::InvalidArgument`] when `option_kind` is anything else.
/// Numeric inputs are never rejected here.
pub fn price(s: f64, k: f64, t: f64, r: f64, sigma: f64, option_kind: &str) -> Result<f64> {
    let kind: OptionKind = option_kind.parse()?;
    Ok(bs_price(kind, s, k, t, r, sigma))
}
