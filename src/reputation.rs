use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ensure_bounds, ensure_finite};
use crate::sampling::DistributionSampler;

/// Spread of the bounded normal draw around a mapped target.
pub const MAPPING_STDDEV: f64 = 2.5;

/// Share of the range width that full reputation can shift the target by.
const RANGE_SKEW: f64 = 0.8;

/// Perturbation count in the central-limit reputation generator.
const CLT_ITERATIONS: u32 = 12;

/// Prestige of a generated entity, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Reputation(u8);

impl Reputation {
    pub const MIN: Reputation = Reputation(0);
    pub const MAX: Reputation = Reputation(100);

    pub fn new(value: i64) -> Result<Self, ConfigError> {
        if (0..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ConfigError::ReputationOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Reputation as a fraction in `[0, 1]`.
    pub fn fraction(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl TryFrom<i64> for Reputation {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Reputation::new(value)
    }
}

impl From<Reputation> for i64 {
    fn from(r: Reputation) -> Self {
        r.0 as i64
    }
}

/// How reputation drives an integer attribute such as squad size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub min: i64,
    pub max: i64,
    pub average: i64,
    /// 0 ignores reputation entirely, 1 lets it span the full skew.
    pub influence: f64,
}

impl RangeConfig {
    pub fn new(min: i64, max: i64, average: i64, influence: f64) -> Result<Self, ConfigError> {
        let range = Self { min, max, average, influence };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_range(self.min as f64, self.max as f64, self.average as f64, self.influence)
    }
}

/// Floating-point counterpart of [`RangeConfig`], used for scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub influence: f64,
}

impl ScoreRange {
    pub fn new(min: f64, max: f64, average: f64, influence: f64) -> Result<Self, ConfigError> {
        let range = Self { min, max, average, influence };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_range(self.min, self.max, self.average, self.influence)
    }
}

fn validate_range(min: f64, max: f64, average: f64, influence: f64) -> Result<(), ConfigError> {
    ensure_bounds(min, max)?;
    ensure_finite("average", average)?;
    if average < min || average > max {
        return Err(ConfigError::AverageOutOfRange { min, max, average });
    }
    if !(0.0..=1.0).contains(&influence) {
        return Err(ConfigError::InfluenceOutOfRange(influence));
    }
    Ok(())
}

/// Window the central-limit generator draws reputations from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationBounds {
    pub min: i64,
    pub max: i64,
}

impl ReputationBounds {
    pub fn new(min: i64, max: i64) -> Result<Self, ConfigError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Reputation::new(self.min)?;
        Reputation::new(self.max)?;
        ensure_bounds(self.min as f64, self.max as f64)
    }

    /// Window of `spread` either side of `center`, clipped to `[0, 100]`.
    /// Keeps at least one point of width.
    pub fn around(center: Reputation, spread: i64) -> Self {
        let center = center.value() as i64;
        let spread = spread.max(1);
        let mut min = (center - spread).max(0);
        let mut max = (center + spread).min(100);
        if min == max {
            if max < 100 {
                max += 1;
            } else {
                min -= 1;
            }
        }
        Self { min, max }
    }
}

/// Mean of the bounded draw for `reputation` under `range`.
///
/// The factor sits at 0.5 when influence is 0, so the target is exactly the
/// average; at influence 1 it is the reputation fraction itself. The
/// uncentred `factor = rep/100 * influence` would pull every influence-0
/// target half the skew below `average`.
pub fn mapped_target(reputation: Reputation, min: f64, max: f64, average: f64, influence: f64) -> f64 {
    let factor = 0.5 + (reputation.fraction() - 0.5) * influence;
    let adjustment = (factor - 0.5) * (max - min) * RANGE_SKEW;
    average + adjustment
}

/// Map a reputation onto an integer attribute, skewed toward `max` for
/// strong entities and `min` for weak ones.
pub fn map_reputation_to_range(
    sampler: &mut DistributionSampler,
    reputation: Reputation,
    range: &RangeConfig,
) -> Result<i64, ConfigError> {
    range.validate()?;
    let target = mapped_target(
        reputation,
        range.min as f64,
        range.max as f64,
        range.average as f64,
        range.influence,
    );
    sampler.sample_bounded_int(target, MAPPING_STDDEV, range.min, range.max)
}

/// Same mapping as [`map_reputation_to_range`] without rounding.
pub fn map_reputation_to_score(
    sampler: &mut DistributionSampler,
    reputation: Reputation,
    range: &ScoreRange,
) -> Result<f64, ConfigError> {
    range.validate()?;
    let target = mapped_target(reputation, range.min, range.max, range.average, range.influence);
    sampler.sample_bounded_double(target, MAPPING_STDDEV, range.min, range.max)
}

/// Draw a fresh reputation inside `bounds`.
///
/// Sums twelve small uniform perturbations around the midpoint instead of
/// using the Box–Muller path. Pinned sequences depend on this staying a
/// separate consumer of the raw uniform stream.
pub fn generate_reputation(
    sampler: &mut DistributionSampler,
    bounds: &ReputationBounds,
) -> Result<Reputation, ConfigError> {
    bounds.validate()?;
    let (min, max) = (bounds.min as f64, bounds.max as f64);
    let stddev = (max - min) / 4.0;
    let source = sampler.source_mut();

    let mut value = (min + max) / 2.0;
    for _ in 0..CLT_ITERATIONS {
        value += (source.next_uniform() - 0.5) * stddev * 0.5;
    }
    let rounded = (value.clamp(min, max).round() as i64).clamp(bounds.min, bounds.max);
    Reputation::new(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squad_range(influence: f64) -> RangeConfig {
        RangeConfig::new(18, 32, 25, influence).unwrap()
    }

    fn rep(v: i64) -> Reputation {
        Reputation::new(v).unwrap()
    }

    #[test]
    fn reputation_bounds_enforced() {
        assert!(Reputation::new(0).is_ok());
        assert!(Reputation::new(100).is_ok());
        assert_eq!(Reputation::new(101), Err(ConfigError::ReputationOutOfRange(101)));
        assert_eq!(Reputation::new(-1), Err(ConfigError::ReputationOutOfRange(-1)));
    }

    #[test]
    fn reputation_serde_validates() {
        let r: Reputation = serde_json::from_str("85").unwrap();
        assert_eq!(r.value(), 85);
        assert!(serde_json::from_str::<Reputation>("150").is_err());
    }

    #[test]
    fn range_config_validation_explains_failure() {
        assert_eq!(
            RangeConfig::new(18, 32, 40, 0.5),
            Err(ConfigError::AverageOutOfRange { min: 18.0, max: 32.0, average: 40.0 })
        );
        assert_eq!(
            RangeConfig::new(18, 32, 25, 1.5),
            Err(ConfigError::InfluenceOutOfRange(1.5))
        );
        assert!(matches!(
            RangeConfig::new(32, 18, 25, 0.5),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn zero_influence_targets_average() {
        for r in [0, 30, 50, 85, 100] {
            let t = mapped_target(rep(r), 18.0, 32.0, 25.0, 0.0);
            assert!((t - 25.0).abs() < 1e-12);
        }
    }

    #[test]
    fn full_influence_uses_raw_fraction() {
        // factor = 0.85, adjustment = 0.35 * 14 * 0.8
        let t = mapped_target(rep(85), 18.0, 32.0, 25.0, 1.0);
        assert!((t - (25.0 + 0.35 * 14.0 * 0.8)).abs() < 1e-9);
    }

    #[test]
    fn mapping_stays_in_range() {
        let mut s = DistributionSampler::seeded(12345);
        let range = squad_range(0.6);
        for r in 0..=100 {
            let v = map_reputation_to_range(&mut s, rep(r), &range).unwrap();
            assert!((18..=32).contains(&v), "{v} for reputation {r}");
        }
    }

    #[test]
    fn mapping_is_reproducible() {
        let range = squad_range(0.6);
        let mut a = DistributionSampler::seeded(12345);
        let mut b = DistributionSampler::seeded(12345);
        assert_eq!(
            map_reputation_to_range(&mut a, rep(85), &range).unwrap(),
            map_reputation_to_range(&mut b, rep(85), &range).unwrap()
        );
    }

    #[test]
    fn score_mapping_stays_in_range() {
        let mut s = DistributionSampler::seeded(5);
        let range = ScoreRange::new(1.0, 10.0, 6.0, 0.8).unwrap();
        for r in [0, 50, 100] {
            for _ in 0..200 {
                let v = map_reputation_to_score(&mut s, rep(r), &range).unwrap();
                assert!((1.0..=10.0).contains(&v));
            }
        }
    }

    #[test]
    fn generated_reputation_within_bounds_and_centered() {
        let mut s = DistributionSampler::seeded(77);
        let bounds = ReputationBounds::new(40, 80).unwrap();
        let draws: Vec<u8> = (0..2_000)
            .map(|_| generate_reputation(&mut s, &bounds).unwrap().value())
            .collect();
        assert!(draws.iter().all(|&v| (40..=80).contains(&v)));
        let mean = draws.iter().map(|&v| v as f64).sum::<f64>() / draws.len() as f64;
        assert!((mean - 60.0).abs() < 1.0, "mean {mean}");
    }

    #[test]
    fn clt_path_leaves_gaussian_spare_untouched() {
        let mut s = DistributionSampler::seeded(3);
        let bounds = ReputationBounds::new(0, 100).unwrap();
        generate_reputation(&mut s, &bounds).unwrap();
        assert!(!s.has_spare());
    }

    #[test]
    fn bounds_around_clip_to_scale() {
        assert_eq!(ReputationBounds::around(rep(95), 10), ReputationBounds { min: 85, max: 100 });
        assert_eq!(ReputationBounds::around(rep(3), 10), ReputationBounds { min: 0, max: 13 });
        assert_eq!(ReputationBounds::around(rep(100), 0), ReputationBounds { min: 99, max: 100 });
    }
}
