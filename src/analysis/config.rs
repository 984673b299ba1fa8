use serde::Deserialize;
use std::path::Path;

use crate::error::{PricingError, Result};
use crate::types::{OptionInputs, OptionKind};

/// Largest `round_decimals` accepted; f64 carries no more than this many
/// reliable decimal places for values of order one.
pub const MAX_ROUND_DECIMALS: u32 = 15;

/// Spot grid used by the sensitivity ladder
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensitivityConfig {
    /// Floor for the lowest spot on the grid
    #[serde(default = "default_min_spot")]
    pub min_spot: f64,

    /// Lowest spot as a multiple of the current spot
    #[serde(default = "default_lower_factor")]
    pub lower_factor: f64,

    /// Highest spot as a multiple of the current spot
    #[serde(default = "default_upper_factor")]
    pub upper_factor: f64,

    /// Number of intervals; the ladder holds `steps + 1` points
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Decimal places kept in each point (None = full precision), at most
    /// [`MAX_ROUND_DECIMALS`]
    #[serde(default = "default_round_decimals")]
    pub round_decimals: Option<u32>,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            min_spot: default_min_spot(),
            lower_factor: default_lower_factor(),
            upper_factor: default_upper_factor(),
            steps: default_steps(),
            round_decimals: default_round_decimals(),
        }
    }
}

impl SensitivityConfig {
    /// Dense unrounded grid, suited to plotting
    pub fn fine() -> Self {
        Self {
            steps: 100,
            round_decimals: None,
            ..Self::default()
        }
    }

    /// Coarse grid for quick tables
    pub fn coarse() -> Self {
        Self {
            steps: 10,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(PricingError::Config(
                "sensitivity.steps must be at least 1".to_string(),
            ));
        }
        if !(self.lower_factor.is_finite() && self.upper_factor.is_finite())
            || self.lower_factor <= 0.0
            || self.lower_factor >= self.upper_factor
        {
            return Err(PricingError::Config(format!(
                "sensitivity factors must satisfy 0 < lower < upper (lower={}, upper={})",
                self.lower_factor, self.upper_factor
            )));
        }
        if !self.min_spot.is_finite() || self.min_spot < 0.0 {
            return Err(PricingError::Config(format!(
                "sensitivity.min_spot must be finite and non-negative (got {})",
                self.min_spot
            )));
        }
        if let Some(d) = self.round_decimals {
            if d > MAX_ROUND_DECIMALS {
                return Err(PricingError::Config(format!(
                    "sensitivity.round_decimals must be at most {} (got {})",
                    MAX_ROUND_DECIMALS, d
                )));
            }
        }
        Ok(())
    }
}

/// Settings for [`crate::analysis::analyze`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub sensitivity: SensitivityConfig,
}

impl AnalysisConfig {
    pub fn fine() -> Self {
        Self {
            sensitivity: SensitivityConfig::fine(),
        }
    }

    pub fn coarse() -> Self {
        Self {
            sensitivity: SensitivityConfig::coarse(),
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: AnalysisConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading analysis config");
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.sensitivity.validate()
    }
}

/// A complete analysis request: the contract plus how to analyse it.
///
/// ```toml
/// [inputs]
/// spot = 100.0
/// strike = 105.0
/// timeToMaturity = 0.25
/// rate = 0.05
/// volatility = 0.25
/// kind = "call"
///
/// [analysis.sensitivity]
/// steps = 40
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisFile {
    pub inputs: OptionInputs,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AnalysisFile {
    /// Parse a request and validate its analysis settings.
    ///
    /// An unknown `inputs.kind` is reported as
    /// [`PricingError::InvalidArgument`], the same as [`crate::price`].
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let doc: toml::Table = s.parse()?;
        if let Some(kind) = doc
            .get("inputs")
            .and_then(|inputs| inputs.get("kind"))
            .and_then(|kind| kind.as_str())
        {
            kind.parse::<OptionKind>()?;
        }
        let file: AnalysisFile = toml::Value::Table(doc).try_into()?;
        file.analysis.validate()?;
        Ok(file)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading analysis request");
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

fn default_min_spot() -> f64 {
    1.0
}

fn default_lower_factor() -> f64 {
    0.6
}

fn default_upper_factor() -> f64 {
    1.4
}

fn default_steps() -> usize {
    20
}

fn default_round_decimals() -> Option<u32> {
    Some(2)
}
