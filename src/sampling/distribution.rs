use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ensure_bounds, ensure_finite, ensure_positive};

/// Which algorithm a scalar draw uses, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Distribution {
    Uniform,
    Normal { mean: f64, stddev: f64 },
    Exponential { lambda: f64 },
    Beta { alpha: f64, beta: f64 },
    Gamma { shape: f64, scale: f64 },
}

impl Distribution {
    fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Distribution::Uniform => Ok(()),
            Distribution::Normal { mean, stddev } => {
                ensure_finite("mean", mean)?;
                ensure_finite("stddev", stddev)?;
                if stddev < 0.0 {
                    return Err(ConfigError::NegativeStdDev(stddev));
                }
                Ok(())
            }
            Distribution::Exponential { lambda } => ensure_positive("lambda", lambda),
            Distribution::Beta { alpha, beta } => {
                ensure_positive("alpha", alpha)?;
                ensure_positive("beta", beta)
            }
            Distribution::Gamma { shape, scale } => {
                ensure_positive("shape", shape)?;
                ensure_positive("scale", scale)
            }
        }
    }
}

/// A distribution plus the `[min, max]` window every draw is clamped into.
///
/// Fields are private so the `min < max` invariant cannot be bypassed;
/// deserialization goes through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDistributionSpec", into = "RawDistributionSpec")]
pub struct DistributionSpec {
    distribution: Distribution,
    min: f64,
    max: f64,
}

impl DistributionSpec {
    pub fn new(distribution: Distribution, min: f64, max: f64) -> Result<Self, ConfigError> {
        ensure_bounds(min, max)?;
        distribution.validate()?;
        Ok(Self { distribution, min, max })
    }

    /// Unchecked constructor for built-in defaults written as literals.
    pub(crate) const fn preset(distribution: Distribution, min: f64, max: f64) -> Self {
        Self { distribution, min, max }
    }

    pub fn uniform(min: f64, max: f64) -> Result<Self, ConfigError> {
        Self::new(Distribution::Uniform, min, max)
    }

    pub fn normal(mean: f64, stddev: f64, min: f64, max: f64) -> Result<Self, ConfigError> {
        Self::new(Distribution::Normal { mean, stddev }, min, max)
    }

    pub fn exponential(lambda: f64, min: f64, max: f64) -> Result<Self, ConfigError> {
        Self::new(Distribution::Exponential { lambda }, min, max)
    }

    pub fn beta(alpha: f64, beta: f64, min: f64, max: f64) -> Result<Self, ConfigError> {
        Self::new(Distribution::Beta { alpha, beta }, min, max)
    }

    pub fn gamma(shape: f64, scale: f64, min: f64, max: f64) -> Result<Self, ConfigError> {
        Self::new(Distribution::Gamma { shape, scale }, min, max)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_bounds(self.min, self.max)?;
        self.distribution.validate()
    }

    pub fn distribution(&self) -> Distribution {
        self.distribution
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

#[derive(Serialize, Deserialize)]
struct RawDistributionSpec {
    #[serde(flatten)]
    distribution: Distribution,
    min: f64,
    max: f64,
}

impl TryFrom<RawDistributionSpec> for DistributionSpec {
    type Error = ConfigError;

    fn try_from(raw: RawDistributionSpec) -> Result<Self, Self::Error> {
        DistributionSpec::new(raw.distribution, raw.min, raw.max)
    }
}

impl From<DistributionSpec> for RawDistributionSpec {
    fn from(spec: DistributionSpec) -> Self {
        Self {
            distribution: spec.distribution,
            min: spec.min,
            max: spec.max,
        }
    }
}

/// A sampled scalar together with the [`DistributionSpec`] that produced it. Debugging aid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratedAttribute {
    pub value: f64,
    pub spec: DistributionSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            DistributionSpec::uniform(10.0, 1.0),
            Err(ConfigError::InvalidBounds { min: 10.0, max: 1.0 })
        );
    }

    #[test]
    fn rejects_negative_stddev() {
        assert_eq!(
            DistributionSpec::normal(0.0, -1.0, -5.0, 5.0),
            Err(ConfigError::NegativeStdDev(-1.0))
        );
    }

    #[test]
    fn zero_stddev_allowed() {
        assert!(DistributionSpec::normal(1.0, 0.0, 0.0, 2.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_shape_params() {
        assert!(DistributionSpec::exponential(0.0, 0.0, 1.0).is_err());
        assert!(DistributionSpec::beta(2.0, -1.0, 0.0, 1.0).is_err());
        assert!(DistributionSpec::gamma(0.0, 1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn deserializes_tagged_form() {
        let json = r#"{"kind":"normal","mean":26.0,"stddev":4.0,"min":17.0,"max":38.0}"#;
        let spec: DistributionSpec = serde_json::from_str(json).unwrap();
        assert_eq!(
            spec.distribution(),
            Distribution::Normal { mean: 26.0, stddev: 4.0 }
        );
        assert_eq!(spec.min(), 17.0);
        assert_eq!(spec.max(), 38.0);
    }

    #[test]
    fn deserialization_enforces_bounds() {
        let json = r#"{"kind":"uniform","min":5.0,"max":5.0}"#;
        let result: Result<DistributionSpec, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_back_to_tagged_form() {
        let spec = DistributionSpec::beta(2.0, 5.0, 0.0, 1.0).unwrap();
        let value = serde_json::to_value(spec).unwrap();
        assert_eq!(value["kind"], "beta");
        assert_eq!(value["alpha"], 2.0);
        assert_eq!(value["max"], 1.0);
    }
}
