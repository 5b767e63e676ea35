use thiserror::Error;

/// Invalid caller-supplied parameters. Always surfaced at the point of
/// invocation; never silently corrected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid bounds: min {min} must be less than max {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("standard deviation must be non-negative, got {0}")]
    NegativeStdDev(f64),

    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("weighted choice requires at least one option")]
    EmptyOptions,

    #[error("{options} options supplied with {weights} weights")]
    LengthMismatch { options: usize, weights: usize },

    #[error("weight at index {index} must be finite and non-negative, got {weight}")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("total weight must be positive")]
    ZeroTotalWeight,

    #[error("average {average} outside range [{min}, {max}]")]
    AverageOutOfRange { min: f64, max: f64, average: f64 },

    #[error("influence must be within [0, 1], got {0}")]
    InfluenceOutOfRange(f64),

    #[error("reputation must be within [0, 100], got {0}")]
    ReputationOutOfRange(i64),

    #[error("no free name for '{base}' after {suffixes} numeric suffixes")]
    NameSpaceExhausted { base: String, suffixes: u32 },

    #[error("unknown country code '{0}'")]
    UnknownCountry(String),

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

/// Defensive failures inside rejection samplers. Unreachable with valid
/// parameters in practice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("gamma sampler (shape {shape}) rejected {limit} candidates in a row")]
    RejectionLimitExceeded { shape: f64, limit: u32 },
}

/// Either failure a single sampling call can surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

/// Top-level error for generation runs and configuration loading.
#[derive(Debug, Error)]
pub enum GenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error("failed to parse generator configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<SampleError> for GenError {
    fn from(err: SampleError) -> Self {
        match err {
            SampleError::Config(e) => GenError::Config(e),
            SampleError::Sampling(e) => GenError::Sampling(e),
        }
    }
}

/// Ensure `value` is a finite float, naming the offending parameter otherwise.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

/// Ensure `min < max` with both finite.
pub(crate) fn ensure_bounds(min: f64, max: f64) -> Result<(), ConfigError> {
    ensure_finite("min", min)?;
    ensure_finite("max", max)?;
    if min < max {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds { min, max })
    }
}

/// Ensure a shape/rate style parameter is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveParameter { name, value })
    }
}
