use crate::error::GenError;
use crate::model::RecordBuilder;
use crate::names::templates;
use crate::reference::Country;
use crate::reputation::{
    Reputation, ReputationBounds, generate_reputation, map_reputation_to_range,
    map_reputation_to_score,
};

use super::attributes::TeamAttributes;
use super::{LeagueGenerator, LeagueNames};

impl LeagueGenerator {
    /// Generate one team with its stadium and squad.
    ///
    /// Order per team: reputation, reputation-driven attributes, name,
    /// stadium, players, then the team record itself.
    pub fn generate_team<B: RecordBuilder>(
        &mut self,
        country: &'static Country,
        league_reputation: Reputation,
        names: &mut LeagueNames,
        builder: &mut B,
    ) -> Result<B::Team, GenError> {
        let Self { config, sampler } = self;
        let culture = country.culture;

        let bounds = ReputationBounds::around(league_reputation, config.league.team_reputation_spread);
        let reputation = generate_reputation(sampler, &bounds)?;

        let squad_size = map_reputation_to_range(sampler, reputation, &config.squad_size)? as u32;
        let capacity = map_reputation_to_range(sampler, reputation, &config.stadium_capacity)? as u32;
        let atmosphere = map_reputation_to_score(sampler, reputation, &config.atmosphere)?;
        let founded_year = sampler.sample_int(&config.founded_year)? as i32;

        let mut city = "";
        let name = names
            .teams
            .resolve(|| {
                city = templates::city(sampler, culture);
                templates::team_name(sampler, culture, city)
            })?
            .name;
        let short_name = templates::short_name(sampler, culture, city);

        let stadium = self.generate_stadium(
            culture,
            city,
            founded_year,
            capacity,
            atmosphere,
            &mut names.stadiums,
            builder,
        )?;

        let mut squad = Vec::with_capacity(squad_size as usize);
        for slot in 0..squad_size {
            squad.push(self.generate_player(country, reputation, slot, &mut names.players, builder)?);
        }

        tracing::debug!(
            team = %name,
            reputation = reputation.value(),
            squad_size,
            capacity,
            "generated team"
        );

        let attributes = TeamAttributes {
            name,
            short_name,
            city: city.to_string(),
            founded_year,
            reputation,
            squad_size,
        };
        Ok(builder.build_team(attributes, stadium, squad))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::generate::GeneratorConfig;
    use crate::model::RecordSet;
    use crate::reference::find_country;

    fn generator(seed: u64) -> LeagueGenerator {
        LeagueGenerator::new(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn team_attributes_within_configured_ranges() {
        let mut g = generator(12345);
        let eng = find_country("ENG").unwrap();
        let mut names = LeagueNames::new();
        let mut records = RecordSet::new();
        let league_rep = Reputation::new(80).unwrap();

        for _ in 0..10 {
            let team = g.generate_team(eng, league_rep, &mut names, &mut records).unwrap();
            let a = &team.attributes;
            assert!((65..=95).contains(&a.reputation.value()), "{}", a.reputation.value());
            assert!((18..=32).contains(&a.squad_size));
            assert_eq!(team.squad.len(), a.squad_size as usize);
            assert!((1865..=2005).contains(&a.founded_year));
            assert!(team.stadium.attributes.opened_year >= a.founded_year);
            assert!((2_500..=90_000).contains(&team.stadium.attributes.capacity));
            assert_eq!(team.stadium.attributes.city, a.city);
            assert!(a.name.contains(&a.city), "{} / {}", a.name, a.city);
        }
    }

    #[test]
    fn team_names_unique_within_run() {
        let mut g = generator(4);
        let jpn = find_country("JPN").unwrap();
        let mut names = LeagueNames::new();
        let mut records = RecordSet::new();
        let rep = Reputation::new(50).unwrap();

        let teams: Vec<String> = (0..80)
            .map(|_| {
                g.generate_team(jpn, rep, &mut names, &mut records)
                    .unwrap()
                    .attributes
                    .name
            })
            .collect();
        let unique: HashSet<&String> = teams.iter().collect();
        assert_eq!(unique.len(), teams.len());
    }
}
