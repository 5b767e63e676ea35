use crate::error::ConfigError;
use crate::reputation::ReputationBounds;

use super::cultures::Culture;

/// Static metadata for a country that can host a league pyramid.
#[derive(Debug)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub culture: Culture,
    /// Reputation window of the top tier; lower tiers step down from it.
    pub top_reputation: (i64, i64),
    /// Division names by tier, strongest first.
    pub league_names: &'static [&'static str],
}

impl Country {
    pub fn top_bounds(&self) -> ReputationBounds {
        ReputationBounds {
            min: self.top_reputation.0,
            max: self.top_reputation.1,
        }
    }

    /// Division name for a 1-based tier. Tiers past the table fall back to a
    /// numbered division.
    pub fn league_name(&self, tier: u32) -> String {
        match self.league_names.get(tier.saturating_sub(1) as usize) {
            Some(name) => (*name).to_string(),
            None => format!("{} Division {}", self.name, tier),
        }
    }
}

pub const COUNTRIES: &[Country] = &[
    Country {
        code: "ENG",
        name: "England",
        culture: Culture::English,
        top_reputation: (70, 95),
        league_names: &["Premier Division", "Championship", "League One", "League Two"],
    },
    Country {
        code: "ESP",
        name: "Spain",
        culture: Culture::Spanish,
        top_reputation: (68, 95),
        league_names: &["Primera División", "Segunda División", "Primera Federación"],
    },
    Country {
        code: "ITA",
        name: "Italy",
        culture: Culture::Italian,
        top_reputation: (65, 92),
        league_names: &["Serie A", "Serie B", "Serie C"],
    },
    Country {
        code: "GER",
        name: "Germany",
        culture: Culture::German,
        top_reputation: (65, 93),
        league_names: &["Bundesliga", "2. Bundesliga", "3. Liga"],
    },
    Country {
        code: "FRA",
        name: "France",
        culture: Culture::French,
        top_reputation: (60, 90),
        league_names: &["Ligue 1", "Ligue 2", "National"],
    },
    Country {
        code: "POR",
        name: "Portugal",
        culture: Culture::Portuguese,
        top_reputation: (55, 85),
        league_names: &["Primeira Liga", "Liga Portugal 2"],
    },
    Country {
        code: "BRA",
        name: "Brazil",
        culture: Culture::Portuguese,
        top_reputation: (55, 85),
        league_names: &["Série A", "Série B", "Série C"],
    },
    Country {
        code: "NED",
        name: "Netherlands",
        culture: Culture::Dutch,
        top_reputation: (50, 82),
        league_names: &["Eredivisie", "Eerste Divisie"],
    },
    Country {
        code: "JPN",
        name: "Japan",
        culture: Culture::Japanese,
        top_reputation: (40, 70),
        league_names: &["J1 League", "J2 League", "J3 League"],
    },
];

/// Look up a country by its three-letter code (case-insensitive).
pub fn find_country(code: &str) -> Result<&'static Country, ConfigError> {
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| ConfigError::UnknownCountry(code.to_string()))
}
