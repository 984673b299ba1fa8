/// Errors surfaced by the pricer and the analysis layer.
///
/// The bare pricing formula never fails on numeric input; out-of-domain
/// values flow through as IEEE-754 results. Only the option kind is checked
/// there. Range checks on the inputs happen on the analysis path.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid parameter value: {field}={value}")]
    InvalidParameters { field: &'static str, value: f64 },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<toml::de::Error> for PricingError {
    fn from(e: toml::de::Error) -> Self {
        PricingError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;
