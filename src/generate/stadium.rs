use crate::error::GenError;
use crate::model::RecordBuilder;
use crate::names::{NameAttemptState, templates};
use crate::reference::Culture;

use super::LeagueGenerator;
use super::attributes::StadiumAttributes;

impl LeagueGenerator {
    /// Generate a team's home ground. Capacity and atmosphere come from the
    /// team's reputation mapping; the ground never predates the club.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_stadium<B: RecordBuilder>(
        &mut self,
        culture: Culture,
        city: &str,
        founded_year: i32,
        capacity: u32,
        atmosphere: f64,
        names: &mut NameAttemptState,
        builder: &mut B,
    ) -> Result<B::Stadium, GenError> {
        let Self { config, sampler } = self;

        let surface = *sampler.choose_option(&config.surfaces)?;
        let roof = *sampler.choose_option(&config.roofs)?;
        let age = sampler.sample_int(&config.stadium_age)? as i32;
        let opened_year = config.reference_year.saturating_sub(age).max(founded_year);

        let name = names
            .resolve(|| templates::stadium_name(sampler, culture, city))?
            .name;

        Ok(builder.build_stadium(StadiumAttributes {
            name,
            city: city.to_string(),
            capacity,
            atmosphere,
            surface,
            roof,
            opened_year,
        }))
    }
}
