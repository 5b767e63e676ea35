use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GenError};
use crate::reputation::{RangeConfig, ScoreRange};
use crate::sampling::weighted::validate_weights;
use crate::sampling::{Distribution, DistributionSpec, WeightedOption};

use super::attributes::{PitchSurface, Position, PreferredFoot, RoofKind};

/// Highest shirt number a squad can hand out.
const MAX_SHIRT_NUMBER: i64 = 99;

/// Calendar years accepted for `reference_year` and `founded_year`.
const EARLIEST_YEAR: i32 = 1000;
const LATEST_YEAR: i32 = 3000;

/// Oldest a stadium may be, in years.
const MAX_STADIUM_AGE: f64 = 500.0;

const MAX_TEAMS_PER_LEAGUE: u32 = 64;
const MAX_TIERS: u32 = 16;

/// Configuration for league generation.
///
/// Every field has a default, so a JSON document only needs the settings it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// RNG seed. `None` draws a fresh seed per generator instance.
    pub seed: Option<u64>,
    /// Year used to date stadiums.
    pub reference_year: i32,
    pub league: LeagueSettings,
    pub squad_size: RangeConfig,
    pub stadium_capacity: RangeConfig,
    pub atmosphere: ScoreRange,
    pub founded_year: DistributionSpec,
    /// Years between a stadium opening and `reference_year`.
    pub stadium_age: DistributionSpec,
    pub surfaces: Vec<WeightedOption<PitchSurface>>,
    pub roofs: Vec<WeightedOption<RoofKind>>,
    pub player: PlayerSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueSettings {
    pub teams_per_league: u32,
    /// Divisions produced by a full pyramid run.
    pub tiers: u32,
    /// Reputation subtracted from the country's top window per tier below 1.
    pub tier_reputation_step: i64,
    /// Team reputations fall within this distance of the league reputation.
    pub team_reputation_spread: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub age: DistributionSpec,
    pub ability_stddev: f64,
    pub height_stddev: f64,
    /// Weights for outfield and goalkeeper picks after the reserved slots.
    pub positions: Vec<WeightedOption<Position>>,
    /// Leading squad slots always filled by goalkeepers.
    pub min_goalkeepers: u32,
    /// Chance a player comes from another country.
    pub foreign_share: f64,
    pub feet: Vec<WeightedOption<PreferredFoot>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            reference_year: 2025,
            league: LeagueSettings::default(),
            squad_size: RangeConfig { min: 18, max: 32, average: 25, influence: 0.6 },
            stadium_capacity: RangeConfig {
                min: 2_500,
                max: 90_000,
                average: 22_000,
                influence: 0.9,
            },
            atmosphere: ScoreRange { min: 1.0, max: 10.0, average: 6.0, influence: 0.7 },
            founded_year: DistributionSpec::preset(Distribution::Uniform, 1865.0, 2005.0),
            stadium_age: DistributionSpec::preset(
                Distribution::Exponential { lambda: 1.5 },
                0.0,
                110.0,
            ),
            surfaces: vec![
                WeightedOption::new(PitchSurface::Grass, 0.7),
                WeightedOption::new(PitchSurface::Hybrid, 0.22),
                WeightedOption::new(PitchSurface::Artificial, 0.08),
            ],
            roofs: vec![
                WeightedOption::new(RoofKind::Open, 0.55),
                WeightedOption::new(RoofKind::Partial, 0.4),
                WeightedOption::new(RoofKind::Retractable, 0.05),
            ],
            player: PlayerSettings::default(),
        }
    }
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            teams_per_league: 20,
            tiers: 2,
            tier_reputation_step: 15,
            team_reputation_spread: 15,
        }
    }
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            age: DistributionSpec::preset(
                Distribution::Normal { mean: 26.0, stddev: 4.0 },
                16.0,
                39.0,
            ),
            ability_stddev: 8.0,
            height_stddev: 6.0,
            positions: vec![
                WeightedOption::new(Position::Goalkeeper, 0.05),
                WeightedOption::new(Position::Defender, 0.35),
                WeightedOption::new(Position::Midfielder, 0.36),
                WeightedOption::new(Position::Forward, 0.24),
            ],
            min_goalkeepers: 2,
            foreign_share: 0.2,
            feet: vec![
                WeightedOption::new(PreferredFoot::Right, 0.72),
                WeightedOption::new(PreferredFoot::Left, 0.23),
                WeightedOption::new(PreferredFoot::Both, 0.05),
            ],
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidSetting { field, reason: reason.into() }
}

fn weights_of<T>(options: &[WeightedOption<T>]) -> Vec<f64> {
    options.iter().map(|o| o.weight).collect()
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, GenError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, GenError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check every setting, reporting the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let league = &self.league;
        if !(1..=MAX_TEAMS_PER_LEAGUE).contains(&league.teams_per_league) {
            return Err(invalid(
                "league.teams_per_league",
                format!("must be within [1, {MAX_TEAMS_PER_LEAGUE}]"),
            ));
        }
        if !(1..=MAX_TIERS).contains(&league.tiers) {
            return Err(invalid("league.tiers", format!("must be within [1, {MAX_TIERS}]")));
        }
        if !(0..=100).contains(&league.tier_reputation_step) {
            return Err(invalid("league.tier_reputation_step", "must be within [0, 100]"));
        }
        if !(0..=100).contains(&league.team_reputation_spread) {
            return Err(invalid("league.team_reputation_spread", "must be within [0, 100]"));
        }

        self.squad_size.validate()?;
        if self.squad_size.min < 1 || self.squad_size.max > MAX_SHIRT_NUMBER {
            return Err(invalid(
                "squad_size",
                format!("must stay within [1, {MAX_SHIRT_NUMBER}]"),
            ));
        }
        self.stadium_capacity.validate()?;
        if self.stadium_capacity.min < 0 || self.stadium_capacity.max > u32::MAX as i64 {
            return Err(invalid("stadium_capacity", "must be a non-negative seat count"));
        }
        self.atmosphere.validate()?;
        let years = EARLIEST_YEAR..=LATEST_YEAR;
        if !years.contains(&self.reference_year) {
            return Err(invalid(
                "reference_year",
                format!("must be within [{EARLIEST_YEAR}, {LATEST_YEAR}]"),
            ));
        }
        self.founded_year.validate()?;
        if self.founded_year.min() < EARLIEST_YEAR as f64
            || self.founded_year.max() > LATEST_YEAR as f64
        {
            return Err(invalid(
                "founded_year",
                format!("must stay within [{EARLIEST_YEAR}, {LATEST_YEAR}]"),
            ));
        }
        self.stadium_age.validate()?;
        if self.stadium_age.min() < 0.0 || self.stadium_age.max() > MAX_STADIUM_AGE {
            return Err(invalid(
                "stadium_age",
                format!("must stay within [0, {MAX_STADIUM_AGE}] years"),
            ));
        }
        validate_weights(&weights_of(&self.surfaces))?;
        validate_weights(&weights_of(&self.roofs))?;

        let player = &self.player;
        player.age.validate()?;
        if player.age.min() < 0.0 || player.age.max() > u8::MAX as f64 {
            return Err(invalid("player.age", "must fit within [0, 255]"));
        }
        for (field, value) in [
            ("player.ability_stddev", player.ability_stddev),
            ("player.height_stddev", player.height_stddev),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite non-negative number"));
            }
        }
        validate_weights(&weights_of(&player.positions))?;
        validate_weights(&weights_of(&player.feet))?;
        if player.min_goalkeepers as i64 > self.squad_size.min {
            return Err(invalid(
                "player.min_goalkeepers",
                "cannot exceed the smallest squad size",
            ));
        }
        if !(0.0..=1.0).contains(&player.foreign_share) {
            return Err(invalid("player.foreign_share", "must be within [0, 1]"));
        }
        Ok(())
    }
}
