pub mod attributes;
pub mod config;
mod player;
mod stadium;
mod team;

pub use attributes::{
    LeagueAttributes, PitchSurface, PlayerAttributes, Position, PreferredFoot, RoofKind,
    StadiumAttributes, TeamAttributes,
};
pub use config::{GeneratorConfig, LeagueSettings, PlayerSettings};

use crate::error::{ConfigError, GenError};
use crate::model::RecordBuilder;
use crate::names::NameAttemptState;
use crate::reference::{Country, find_country};
use crate::reputation::{ReputationBounds, generate_reputation};
use crate::sampling::{DistributionSampler, SeededRandomSource};

/// Names issued during one generation call, tracked per entity kind.
#[derive(Debug, Default)]
pub struct LeagueNames {
    pub teams: NameAttemptState,
    pub stadiums: NameAttemptState,
    pub players: NameAttemptState,
}

impl LeagueNames {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Reputation window for a 1-based tier: the country's top window lowered
/// by `step` per tier, kept inside `[0, 100]` with at least one point of width.
pub fn tier_bounds(country: &Country, tier: u32, step: i64) -> ReputationBounds {
    let shift = step.saturating_mul(tier.saturating_sub(1) as i64);
    let top = country.top_bounds();
    let min = (top.min - shift).clamp(0, 99);
    let max = (top.max - shift).clamp(min + 1, 100);
    ReputationBounds { min, max }
}

/// Drives a full generation run: country → league → teams → stadium and
/// players. Owns the only sampler, so every entity is finished before the
/// next one draws.
///
/// Not meant to be shared between threads; build one generator per task,
/// each with its own seed.
#[derive(Debug)]
pub struct LeagueGenerator {
    config: GeneratorConfig,
    sampler: DistributionSampler,
}

impl LeagueGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sampler = DistributionSampler::new(SeededRandomSource::new(config.seed));
        tracing::debug!(seed = sampler.seed(), "league generator ready");
        Ok(Self { config, sampler })
    }

    /// Effective seed, including one drawn for an unseeded config.
    pub fn seed(&self) -> u64 {
        self.sampler.seed()
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn sampler_mut(&mut self) -> &mut DistributionSampler {
        &mut self.sampler
    }

    /// Every configured tier of a country, top division first. Names stay
    /// unique across the whole pyramid.
    pub fn generate_pyramid<B: RecordBuilder>(
        &mut self,
        country_code: &str,
        builder: &mut B,
    ) -> Result<Vec<B::League>, GenError> {
        let country = find_country(country_code)?;
        let mut names = LeagueNames::new();
        let mut leagues = Vec::with_capacity(self.config.league.tiers as usize);
        for tier in 1..=self.config.league.tiers {
            leagues.push(self.generate_league_with(country, tier, &mut names, builder)?);
        }
        Ok(leagues)
    }

    pub fn generate_league<B: RecordBuilder>(
        &mut self,
        country_code: &str,
        tier: u32,
        builder: &mut B,
    ) -> Result<B::League, GenError> {
        let country = find_country(country_code)?;
        let mut names = LeagueNames::new();
        self.generate_league_with(country, tier, &mut names, builder)
    }

    pub fn generate_league_with<B: RecordBuilder>(
        &mut self,
        country: &'static Country,
        tier: u32,
        names: &mut LeagueNames,
        builder: &mut B,
    ) -> Result<B::League, GenError> {
        if tier == 0 {
            return Err(ConfigError::InvalidSetting {
                field: "tier",
                reason: "tiers are numbered from 1".to_string(),
            }
            .into());
        }
        let bounds = tier_bounds(country, tier, self.config.league.tier_reputation_step);
        let reputation = generate_reputation(&mut self.sampler, &bounds)?;
        let name = country.league_name(tier);
        tracing::debug!(
            country = country.code,
            tier,
            reputation = reputation.value(),
            league = %name,
            "generating league"
        );

        let team_count = self.config.league.teams_per_league;
        let mut teams = Vec::with_capacity(team_count as usize);
        for _ in 0..team_count {
            teams.push(self.generate_team(country, reputation, names, builder)?);
        }

        let attributes = LeagueAttributes {
            name,
            country_code: country.code.to_string(),
            country_name: country.name.to_string(),
            tier,
            reputation,
        };
        Ok(builder.build_league(attributes, teams))
    }
}
