use serde::{Deserialize, Serialize};

use crate::generate::{LeagueAttributes, PlayerAttributes, StadiumAttributes, TeamAttributes};

use super::RecordBuilder;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stadium {
    pub id: u64,
    #[serde(flatten)]
    pub attributes: StadiumAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    #[serde(flatten)]
    pub attributes: PlayerAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    #[serde(flatten)]
    pub attributes: TeamAttributes,
    pub stadium: Stadium,
    pub squad: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: u64,
    #[serde(flatten)]
    pub attributes: LeagueAttributes,
    pub teams: Vec<Team>,
}

impl League {
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.teams.iter().flat_map(|t| t.squad.iter())
    }
}

/// Builds plain serializable records, numbering them from a single
/// monotonic counter so no two records of any kind share an id.
#[derive(Debug)]
pub struct RecordSet {
    next_id: u64,
}

impl RecordSet {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn starting_from(start: u64) -> Self {
        Self { next_id: start }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder for RecordSet {
    type League = League;
    type Team = Team;
    type Player = Player;
    type Stadium = Stadium;

    fn build_stadium(&mut self, attributes: StadiumAttributes) -> Stadium {
        Stadium { id: self.next_id(), attributes }
    }

    fn build_player(&mut self, attributes: PlayerAttributes) -> Player {
        Player { id: self.next_id(), attributes }
    }

    fn build_team(&mut self, attributes: TeamAttributes, stadium: Stadium, squad: Vec<Player>) -> Team {
        Team {
            id: self.next_id(),
            attributes,
            stadium,
            squad,
        }
    }

    fn build_league(&mut self, attributes: LeagueAttributes, teams: Vec<Team>) -> League {
        League {
            id: self.next_id(),
            attributes,
            teams,
        }
    }
}
