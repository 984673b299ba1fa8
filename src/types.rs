use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PricingError, Result};

/// Payoff of a European option.
///
/// Deserialization goes through [`FromStr`], so every input path accepts
/// and rejects the same names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the exact lowercase names are accepted.
impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            other => {
                tracing::warn!(option_kind = other, "rejected option kind");
                Err(PricingError::InvalidArgument(format!(
                    "invalid option type {:?}, use 'call' or 'put'",
                    other
                )))
            }
        }
    }
}

impl TryFrom<String> for OptionKind {
    type Error = PricingError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Inputs for a single Black-Scholes valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionInputs {
    /// Current underlying price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Continuously-compounded risk-free rate (r)
    pub rate: f64,
    /// Annualized volatility as a decimal (sigma)
    pub volatility: f64,
    pub kind: OptionKind,
}

impl OptionInputs {
    pub fn new(
        kind: OptionKind,
        spot: f64,
        strike: f64,
        time_to_maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_maturity,
            rate,
            volatility,
            kind,
        }
    }

    /// Same contract with the other payoff.
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }

    /// Check every input is finite and inside the model's domain.
    ///
    /// Requires S > 0, K > 0, T > 0 and sigma > 0. The rate may take any
    /// finite value, zero and negative included. The first offending field
    /// is reported.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("time_to_maturity", self.time_to_maturity),
            ("volatility", self.volatility),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::InvalidParameters { field, value });
            }
        }
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidParameters {
                field: "rate",
                value: self.rate,
            });
        }
        Ok(())
    }
}
