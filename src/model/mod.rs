//! Records produced from generated attributes.
//!
//! [`RecordBuilder`] is the seam to whatever domain model a caller uses: the
//! generator only hands over attribute bundles and never validates or stores
//! the records itself. [`RecordSet`] is the built-in implementation.

pub mod records;

pub use records::{League, Player, RecordSet, Stadium, Team};

use crate::generate::{LeagueAttributes, PlayerAttributes, StadiumAttributes, TeamAttributes};

/// Constructs domain records from generated attribute bundles.
///
/// Called in generation order: each team's stadium and players are built
/// before the team, and all teams before their league.
pub trait RecordBuilder {
    type League;
    type Team;
    type Player;
    type Stadium;

    fn build_stadium(&mut self, attributes: StadiumAttributes) -> Self::Stadium;

    fn build_player(&mut self, attributes: PlayerAttributes) -> Self::Player;

    fn build_team(
        &mut self,
        attributes: TeamAttributes,
        stadium: Self::Stadium,
        squad: Vec<Self::Player>,
    ) -> Self::Team;

    fn build_league(&mut self, attributes: LeagueAttributes, teams: Vec<Self::Team>) -> Self::League;
}
