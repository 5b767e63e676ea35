use crate::reference::Culture;
use crate::sampling::DistributionSampler;

/// Uniform pick from a static table. An empty table yields an empty string.
fn pick(sampler: &mut DistributionSampler, items: &[&'static str]) -> &'static str {
    let index = sampler.next_int(items.len() as u64) as usize;
    items.get(index).copied().unwrap_or("")
}

/// Upper-cased first three letters of `city`, ignoring spaces and punctuation.
fn abbreviate(city: &str) -> String {
    city.chars()
        .filter(|c| c.is_alphabetic())
        .take(3)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Substitute `{city}`, `{city3}` and `{surname}` placeholders.
pub fn fill(pattern: &str, city: &str, surname: &str) -> String {
    pattern
        .replace("{city3}", &abbreviate(city))
        .replace("{city}", city)
        .replace("{surname}", surname)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: &'static str,
    pub last: &'static str,
}

impl PersonName {
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

pub fn person_name(sampler: &mut DistributionSampler, culture: Culture) -> PersonName {
    let table = culture.names();
    let first = pick(sampler, table.first_names);
    let last = pick(sampler, table.surnames);
    PersonName { first, last }
}

pub fn city(sampler: &mut DistributionSampler, culture: Culture) -> &'static str {
    pick(sampler, culture.names().cities)
}

pub fn team_name(sampler: &mut DistributionSampler, culture: Culture, city: &str) -> String {
    let pattern = pick(sampler, culture.names().team_patterns);
    fill(pattern, city, "")
}

pub fn short_name(sampler: &mut DistributionSampler, culture: Culture, city: &str) -> String {
    let pattern = pick(sampler, culture.names().short_name_patterns);
    fill(pattern, city, "")
}

/// Ground name; `{surname}` patterns honour a local figure of the culture.
pub fn stadium_name(sampler: &mut DistributionSampler, culture: Culture, city: &str) -> String {
    let table = culture.names();
    let pattern = pick(sampler, table.stadium_patterns);
    let surname = pick(sampler, table.surnames);
    fill(pattern, city, surname)
}
