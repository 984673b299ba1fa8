//! Option analysis: price decomposition, Greeks and a spot sensitivity ladder
//!
//! Unlike the bare pricer, this path validates its inputs first and rejects
//! anything outside the model's domain with
//! [`PricingError::InvalidParameters`](crate::PricingError::InvalidParameters).

pub mod config;
pub mod report;

use serde::Serialize;

use crate::error::Result;
use crate::models::bs::greeks::{bs_greeks, Greeks};
use crate::models::bs::{bs_price, d1_d2};
use crate::models::utils::intrinsic_value;
use crate::types::OptionInputs;
use self::config::{AnalysisConfig, SensitivityConfig};

/// Price and intrinsic/time value split at one spot level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityPoint {
    #[serde(rename = "stockPrice")]
    pub spot: f64,
    pub option_price: f64,
    pub intrinsic_value: f64,
    pub time_value: f64,
}

/// Full valuation of one contract
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionAnalysis {
    pub inputs: OptionInputs,
    pub option_price: f64,
    pub intrinsic_value: f64,
    pub time_value: f64,
    pub greeks: Greeks,
    #[serde(rename = "sensitivityData")]
    pub sensitivity: Vec<SensitivityPoint>,
}

/// Validate `inputs`, then price the contract and build its ladder.
pub fn analyze(inputs: &OptionInputs, config: &AnalysisConfig) -> Result<OptionAnalysis> {
    if let Err(e) = inputs.validate() {
        tracing::warn!(error = %e, "rejected analysis inputs");
        return Err(e);
    }
    config.validate()?;

    let OptionInputs {
        spot,
        strike,
        time_to_maturity: t,
        rate,
        volatility,
        kind,
    } = *inputs;

    let option_price = bs_price(kind, spot, strike, t, rate, volatility);
    let intrinsic = intrinsic_value(kind.is_call(), spot, strike);
    let greeks = bs_greeks(kind, spot, strike, t, rate, volatility);

    let d = d1_d2(spot, strike, t, rate, volatility);
    tracing::debug!(%kind, d1 = d.d1, d2 = d.d2, price = option_price, "priced option");

    Ok(OptionAnalysis {
        inputs: *inputs,
        option_price,
        intrinsic_value: intrinsic,
        time_value: option_price - intrinsic,
        greeks,
        sensitivity: sensitivity_ladder(inputs, &config.sensitivity),
    })
}

/// Prices over a grid of spots with every other input held fixed.
///
/// The grid runs from `max(min_spot, lower_factor·S)` to `upper_factor·S` in
/// `steps` equal intervals. Each grid point is computed from its index, so
/// the last point lands exactly on the upper bound.
///
/// The ladder is empty when `upper_factor·S` falls below the `min_spot`
/// floor. `cfg` is not validated here; `steps = 0` is read as a single
/// interval, giving the two end points. Use [`analyze`] for a checked run.
pub fn sensitivity_ladder(inputs: &OptionInputs, cfg: &SensitivityConfig) -> Vec<SensitivityPoint> {
    let lo = cfg.min_spot.max(inputs.spot * cfg.lower_factor);
    let hi = inputs.spot * cfg.upper_factor;
    if hi < lo {
        tracing::debug!(lo, hi, "sensitivity range is empty");
        return Vec::new();
    }
    let steps = cfg.steps.max(1);
    let step = (hi - lo) / steps as f64;
    let is_call = inputs.kind.is_call();

    (0..=steps)
        .map(|i| {
            let spot = if i == steps { hi } else { lo + step * i as f64 };
            let price = bs_price(
                inputs.kind,
                spot,
                inputs.strike,
                inputs.time_to_maturity,
                inputs.rate,
                inputs.volatility,
            );
            let intrinsic = intrinsic_value(is_call, spot, inputs.strike);
            SensitivityPoint {
                spot: round_to(spot, cfg.round_decimals),
                option_price: round_to(price, cfg.round_decimals),
                intrinsic_value: round_to(intrinsic, cfg.round_decimals),
                time_value: round_to(price - intrinsic, cfg.round_decimals),
            }
        })
        .collect()
}

fn round_to(value: f64, decimals: Option<u32>) -> f64 {
    match decimals {
        Some(d) => {
            let scale = 10f64.powi(i32::try_from(d).unwrap_or(i32::MAX));
            let scaled = value * scale;
            // Past f64 range rounding is a no-op
            if scaled.is_finite() {
                scaled.round() / scale
            } else {
                value
            }
        }
        None => value,
    }
}
