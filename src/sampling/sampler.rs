use std::f64::consts::TAU;

use crate::error::{
    ConfigError, SampleError, SamplingError, ensure_bounds, ensure_finite, ensure_positive,
};

use super::distribution::{Distribution, DistributionSpec, GeneratedAttribute};
use super::source::SeededRandomSource;
use super::weighted::{self, WeightedOption};

/// Divisor applied to raw exponential draws before mapping into `[min, max]`.
/// Tuned by eye so typical lambdas spread across the window; not derived.
pub const EXPONENTIAL_NORMALIZATION: f64 = 5.0;

/// Consecutive rejections tolerated by the gamma sampler before giving up.
pub const MAX_REJECTION_ITERATIONS: u32 = 10_000;

/// Draws values from the supported distributions.
///
/// Owns its random source and the Box–Muller spare: the second value of each
/// normal pair is held as a standard normal and consumed by the next
/// `sample_normal` call, whatever mean/stddev that call asks for.
#[derive(Debug, Clone)]
pub struct DistributionSampler {
    source: SeededRandomSource,
    spare: Option<f64>,
}

impl DistributionSampler {
    pub fn new(source: SeededRandomSource) -> Self {
        Self { source, spare: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededRandomSource::from_seed(seed))
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    pub fn source_mut(&mut self) -> &mut SeededRandomSource {
        &mut self.source
    }

    pub fn has_spare(&self) -> bool {
        self.spare.is_some()
    }

    pub fn next_uniform(&mut self) -> f64 {
        self.source.next_uniform()
    }

    pub fn next_int(&mut self, bound: u64) -> u64 {
        self.source.next_int(bound)
    }

    /// Standard normal draw via Box–Muller, one pair per two calls.
    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        // 1 - u keeps the log argument in (0, 1].
        let u1 = 1.0 - self.source.next_uniform();
        let u2 = self.source.next_uniform();
        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = TAU * u2;
        self.spare = Some(radius * theta.sin());
        radius * theta.cos()
    }

    pub fn sample_normal(&mut self, mean: f64, stddev: f64) -> Result<f64, ConfigError> {
        ensure_finite("mean", mean)?;
        ensure_finite("stddev", stddev)?;
        if stddev < 0.0 {
            return Err(ConfigError::NegativeStdDev(stddev));
        }
        Ok(mean + stddev * self.standard_normal())
    }

    /// Normal draw clamped into `[min, max]`. Out-of-range tails snap to the
    /// nearest bound; nothing is resampled.
    pub fn sample_bounded_double(
        &mut self,
        mean: f64,
        stddev: f64,
        min: f64,
        max: f64,
    ) -> Result<f64, ConfigError> {
        ensure_bounds(min, max)?;
        let value = self.sample_normal(mean, stddev)?;
        Ok(value.clamp(min, max))
    }

    pub fn sample_bounded_int(
        &mut self,
        mean: f64,
        stddev: f64,
        min: i64,
        max: i64,
    ) -> Result<i64, ConfigError> {
        let value = self.sample_bounded_double(mean, stddev, min as f64, max as f64)?;
        Ok((value.round() as i64).clamp(min, max))
    }

    pub fn sample_uniform(&mut self, min: f64, max: f64) -> Result<f64, ConfigError> {
        ensure_bounds(min, max)?;
        Ok(min + self.source.next_uniform() * (max - min))
    }

    /// Exponential draw squashed into `[min, max]` through
    /// [`EXPONENTIAL_NORMALIZATION`]; anything past the divisor lands on `max`.
    pub fn sample_exponential(&mut self, min: f64, max: f64, lambda: f64) -> Result<f64, ConfigError> {
        ensure_bounds(min, max)?;
        ensure_positive("lambda", lambda)?;
        let u = self.source.next_uniform();
        let raw = -(1.0 - u).ln() / lambda;
        let normalized = (raw / EXPONENTIAL_NORMALIZATION).min(1.0);
        Ok(min + normalized * (max - min))
    }

    /// Gamma(shape, 1) draw.
    ///
    /// Marsaglia–Tsang for `shape >= 1`. Smaller shapes boost to `shape + 1`
    /// and scale by `u^(1/shape)`.
    pub fn sample_gamma(&mut self, shape: f64) -> Result<f64, SampleError> {
        self.gamma_with_limit(shape, MAX_REJECTION_ITERATIONS)
    }

    /// [`sample_gamma`](Self::sample_gamma) with an explicit rejection ceiling.
    pub(crate) fn gamma_with_limit(&mut self, shape: f64, limit: u32) -> Result<f64, SampleError> {
        ensure_positive("shape", shape)?;
        if shape < 1.0 {
            let boosted = self.gamma_with_limit(shape + 1.0, limit)?;
            let u = self.source.next_uniform();
            return Ok(boosted * u.powf(1.0 / shape));
        }

        let d = shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * d).sqrt();
        for _ in 0..limit {
            let x = self.standard_normal();
            let v = 1.0 + c * x;
            if v <= 0.0 {
                continue;
            }
            let v = v * v * v;
            let u = self.source.next_uniform();
            let x2 = x * x;
            if u < 1.0 - 0.0331 * x2 * x2 {
                return Ok(d * v);
            }
            if u > 0.0 && u.ln() < 0.5 * x2 + d * (1.0 - v + v.ln()) {
                return Ok(d * v);
            }
        }

        tracing::warn!(shape, limit, "gamma sampler hit its rejection ceiling");
        Err(SamplingError::RejectionLimitExceeded { shape, limit }.into())
    }

    /// Beta(alpha, beta) draw in `[0, 1]` as the ratio of two gamma draws.
    pub fn sample_beta(&mut self, alpha: f64, beta: f64) -> Result<f64, SampleError> {
        ensure_positive("alpha", alpha)?;
        ensure_positive("beta", beta)?;
        let a = self.sample_gamma(alpha)?;
        let b = self.sample_gamma(beta)?;
        let total = a + b;
        if total > 0.0 {
            Ok((a / total).clamp(0.0, 1.0))
        } else {
            // Both draws underflowed (tiny shapes); neither side dominates.
            Ok(0.5)
        }
    }

    /// Draw from a validated [`DistributionSpec`], clamped to its window.
    pub fn sample(&mut self, spec: &DistributionSpec) -> Result<f64, SampleError> {
        let (min, max) = (spec.min(), spec.max());
        let value = match spec.distribution() {
            Distribution::Uniform => self.sample_uniform(min, max)?,
            Distribution::Normal { mean, stddev } => {
                self.sample_bounded_double(mean, stddev, min, max)?
            }
            Distribution::Exponential { lambda } => self.sample_exponential(min, max, lambda)?,
            Distribution::Beta { alpha, beta } => min + self.sample_beta(alpha, beta)? * (max - min),
            Distribution::Gamma { shape, scale } => scale * self.sample_gamma(shape)?,
        };
        Ok(value.clamp(min, max))
    }

    /// [`sample`](Self::sample) rounded to the nearest integer.
    pub fn sample_int(&mut self, spec: &DistributionSpec) -> Result<i64, SampleError> {
        Ok(self.sample(spec)?.round() as i64)
    }

    pub fn sample_traced(&mut self, spec: &DistributionSpec) -> Result<GeneratedAttribute, SampleError> {
        let value = self.sample(spec)?;
        Ok(GeneratedAttribute { value, spec: *spec })
    }

    pub fn choose_weighted<'a, T>(&mut self, options: &'a [T], weights: &[f64]) -> Result<&'a T, ConfigError> {
        weighted::choose_weighted(&mut self.source, options, weights)
    }

    pub fn choose_option<'a, T>(&mut self, options: &'a [WeightedOption<T>]) -> Result<&'a T, ConfigError> {
        weighted::choose_option(&mut self.source, options)
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, options: &'a [T]) -> Result<&'a T, ConfigError> {
        if options.is_empty() {
            return Err(ConfigError::EmptyOptions);
        }
        let index = self.source.next_int(options.len() as u64) as usize;
        Ok(&options[index])
    }
}
