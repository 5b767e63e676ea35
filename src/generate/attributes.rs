use serde::{Deserialize, Serialize};

use crate::reputation::Reputation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

string_enum!(Position {
    Goalkeeper => "goalkeeper",
    Defender => "defender",
    Midfielder => "midfielder",
    Forward => "forward",
});

impl Position {
    /// Mean height in centimetres for the position.
    pub fn mean_height_cm(self) -> f64 {
        match self {
            Position::Goalkeeper => 190.0,
            Position::Defender => 184.0,
            Position::Midfielder => 178.0,
            Position::Forward => 181.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PreferredFoot {
    Right,
    Left,
    Both,
}

string_enum!(PreferredFoot {
    Right => "right",
    Left => "left",
    Both => "both",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PitchSurface {
    Grass,
    Hybrid,
    Artificial,
}

string_enum!(PitchSurface {
    Grass => "grass",
    Hybrid => "hybrid",
    Artificial => "artificial",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RoofKind {
    Open,
    Partial,
    Retractable,
}

string_enum!(RoofKind {
    Open => "open",
    Partial => "partial",
    Retractable => "retractable",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueAttributes {
    pub name: String,
    pub country_code: String,
    pub country_name: String,
    /// 1 is the top division.
    pub tier: u32,
    pub reputation: Reputation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAttributes {
    pub name: String,
    pub short_name: String,
    pub city: String,
    pub founded_year: i32,
    pub reputation: Reputation,
    pub squad_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StadiumAttributes {
    pub name: String,
    pub city: String,
    pub capacity: u32,
    /// Crowd atmosphere score within the configured score range.
    pub atmosphere: f64,
    pub surface: PitchSurface,
    pub roof: RoofKind,
    pub opened_year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub first_name: String,
    pub last_name: String,
    /// Unique within the generated league; may carry a numeric suffix.
    pub display_name: String,
    pub nationality: String,
    pub age: u8,
    pub position: Position,
    pub ability: u8,
    pub potential: u8,
    pub height_cm: u16,
    pub preferred_foot: PreferredFoot,
    pub shirt_number: u8,
}
