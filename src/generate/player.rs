use crate::error::GenError;
use crate::model::RecordBuilder;
use crate::names::{NameAttemptState, PersonName, templates};
use crate::reference::{COUNTRIES, Country};
use crate::reputation::Reputation;

use super::LeagueGenerator;
use super::attributes::{PlayerAttributes, Position};

/// Below this age a player's current ability trails the team level.
const PEAK_DEVELOPMENT_AGE: f64 = 24.0;

/// Ability points lost per year short of [`PEAK_DEVELOPMENT_AGE`].
const YOUTH_ABILITY_PENALTY: f64 = 2.0;

/// Players this old or older have no growth headroom left.
const GROWTH_CUTOFF_AGE: f64 = 30.0;

/// Years over which growth headroom tapers to zero.
const GROWTH_WINDOW_YEARS: f64 = 13.0;

const MIN_HEIGHT_CM: i64 = 160;
const MAX_HEIGHT_CM: i64 = 205;

impl LeagueGenerator {
    /// Generate the player in squad slot `slot` (0-based).
    pub fn generate_player<B: RecordBuilder>(
        &mut self,
        country: &'static Country,
        team_reputation: Reputation,
        slot: u32,
        names: &mut NameAttemptState,
        builder: &mut B,
    ) -> Result<B::Player, GenError> {
        let Self { config, sampler } = self;
        let settings = &config.player;

        let position = if slot < settings.min_goalkeepers {
            Position::Goalkeeper
        } else {
            *sampler.choose_option(&settings.positions)?
        };

        let share = settings.foreign_share;
        let foreign = *sampler.choose_weighted(&[false, true], &[1.0 - share, share])?;
        let nationality = if foreign {
            let others: Vec<&'static Country> =
                COUNTRIES.iter().filter(|c| c.code != country.code).collect();
            *sampler.pick(&others)?
        } else {
            country
        };

        let age = sampler.sample_int(&settings.age)?.clamp(0, u8::MAX as i64) as u8;

        let youth_penalty = (PEAK_DEVELOPMENT_AGE - age as f64).max(0.0) * YOUTH_ABILITY_PENALTY;
        let ability = sampler.sample_bounded_int(
            team_reputation.value() as f64 - youth_penalty,
            settings.ability_stddev,
            1,
            100,
        )? as u8;

        let growth = ((GROWTH_CUTOFF_AGE - age as f64) / GROWTH_WINDOW_YEARS).clamp(0.0, 1.0);
        let headroom = sampler.sample_beta(2.0, 5.0)? * (100 - ability) as f64 * growth;
        let potential = (ability as f64 + headroom).round().clamp(ability as f64, 100.0) as u8;

        let height_cm = sampler.sample_bounded_int(
            position.mean_height_cm(),
            settings.height_stddev,
            MIN_HEIGHT_CM,
            MAX_HEIGHT_CM,
        )? as u16;
        let preferred_foot = *sampler.choose_option(&settings.feet)?;

        let culture = nationality.culture;
        let mut picked: Option<PersonName> = None;
        let display_name = names
            .resolve(|| {
                let name = templates::person_name(sampler, culture);
                let full = name.full();
                picked = Some(name);
                full
            })?
            .name;
        let (first_name, last_name) = picked.map(|n| (n.first, n.last)).unwrap_or_default();

        Ok(builder.build_player(PlayerAttributes {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            display_name,
            nationality: nationality.code.to_string(),
            age,
            position,
            ability,
            potential,
            height_cm,
            preferred_foot,
            shirt_number: (slot + 1).min(99) as u8,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::GeneratorConfig;
    use crate::model::{Player, RecordSet};
    use crate::reference::find_country;

    fn squad(config: GeneratorConfig, country: &str, reputation: i64, size: u32) -> Vec<Player> {
        let mut g = LeagueGenerator::new(config).unwrap();
        let country = find_country(country).unwrap();
        let rep = Reputation::new(reputation).unwrap();
        let mut names = NameAttemptState::new();
        let mut records = RecordSet::new();
        (0..size)
            .map(|slot| {
                g.generate_player(country, rep, slot, &mut names, &mut records)
                    .unwrap()
            })
            .collect()
    }

    fn seeded(seed: u64) -> GeneratorConfig {
        GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn leading_slots_are_goalkeepers() {
        let players = squad(seeded(1), "ITA", 60, 25);
        assert_eq!(players[0].attributes.position, Position::Goalkeeper);
        assert_eq!(players[1].attributes.position, Position::Goalkeeper);
        assert_eq!(players[0].attributes.shirt_number, 1);
        assert_eq!(players[24].attributes.shirt_number, 25);
    }

    #[test]
    fn attributes_within_bounds() {
        for p in squad(seeded(2), "ESP", 75, 200) {
            let a = &p.attributes;
            assert!((16..=39).contains(&a.age), "age {}", a.age);
            assert!((1..=100).contains(&a.ability));
            assert!(a.potential >= a.ability && a.potential <= 100);
            assert!((160..=205).contains(&a.height_cm));
            assert!(a.display_name.starts_with(&format!("{} {}", a.first_name, a.last_name)));
        }
    }

    #[test]
    fn no_foreigners_when_share_is_zero() {
        let mut config = seeded(3);
        config.player.foreign_share = 0.0;
        for p in squad(config, "NED", 50, 100) {
            assert_eq!(p.attributes.nationality, "NED");
        }
    }

    #[test]
    fn all_foreign_when_share_is_one() {
        let mut config = seeded(3);
        config.player.foreign_share = 1.0;
        for p in squad(config, "NED", 50, 100) {
            assert_ne!(p.attributes.nationality, "NED");
        }
    }

    #[test]
    fn stronger_team_has_stronger_players() {
        let mean = |players: &[Player]| {
            players.iter().map(|p| p.attributes.ability as f64).sum::<f64>() / players.len() as f64
        };
        let weak = squad(seeded(4), "FRA", 30, 200);
        let strong = squad(seeded(4), "FRA", 85, 200);
        assert!(mean(&weak) + 30.0 < mean(&strong));
    }

    #[test]
    fn goalkeepers_taller_on_average() {
        let mut config = seeded(5);
        config.player.min_goalkeepers = 0;
        config.player.positions = vec![
            crate::sampling::WeightedOption::new(Position::Goalkeeper, 1.0),
            crate::sampling::WeightedOption::new(Position::Midfielder, 1.0),
        ];
        let players = squad(config, "GER", 60, 400);
        let mean_height = |pos: Position| {
            let hs: Vec<f64> = players
                .iter()
                .filter(|p| p.attributes.position == pos)
                .map(|p| p.attributes.height_cm as f64)
                .collect();
            hs.iter().sum::<f64>() / hs.len() as f64
        };
        assert!(mean_height(Position::Goalkeeper) > mean_height(Position::Midfielder) + 5.0);
    }
}
