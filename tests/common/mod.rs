use league_gen::{GeneratorConfig, League, LeagueGenerator, RecordSet};

pub const SCENARIO_SEED: u64 = 12345;

pub fn config_with_seed(seed: u64, teams: u32) -> GeneratorConfig {
    let mut config = GeneratorConfig {
        seed: Some(seed),
        ..GeneratorConfig::default()
    };
    config.league.teams_per_league = teams;
    config
}

pub fn generate_league(seed: u64, country: &str, teams: u32) -> League {
    let mut generator = LeagueGenerator::new(config_with_seed(seed, teams)).unwrap();
    generator
        .generate_league(country, 1, &mut RecordSet::new())
        .unwrap()
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
