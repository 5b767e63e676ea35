use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::generate::{LeagueAttributes, PlayerAttributes, StadiumAttributes, TeamAttributes};
use crate::model::League;

#[derive(Serialize)]
struct LeagueRow<'a> {
    id: u64,
    #[serde(flatten)]
    attributes: &'a LeagueAttributes,
}

#[derive(Serialize)]
struct TeamRow<'a> {
    id: u64,
    league_id: u64,
    stadium_id: u64,
    #[serde(flatten)]
    attributes: &'a TeamAttributes,
}

#[derive(Serialize)]
struct StadiumRow<'a> {
    id: u64,
    team_id: u64,
    #[serde(flatten)]
    attributes: &'a StadiumAttributes,
}

#[derive(Serialize)]
struct PlayerRow<'a> {
    id: u64,
    team_id: u64,
    #[serde(flatten)]
    attributes: &'a PlayerAttributes,
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Flush generated leagues to JSONL files in the given output directory.
///
/// Creates the output directory if it does not exist. Writes 4 files, each
/// row carrying the ids of its parents:
/// - `leagues.jsonl`
/// - `teams.jsonl` (`league_id`, `stadium_id`)
/// - `stadiums.jsonl` (`team_id`)
/// - `players.jsonl` (`team_id`)
pub fn flush_to_jsonl(leagues: &[League], output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    write_jsonl(
        &output_dir.join("leagues.jsonl"),
        leagues.iter().map(|l| LeagueRow {
            id: l.id,
            attributes: &l.attributes,
        }),
    )?;

    let teams = || leagues.iter().flat_map(|l| l.teams.iter().map(move |t| (l, t)));

    write_jsonl(
        &output_dir.join("teams.jsonl"),
        teams().map(|(l, t)| TeamRow {
            id: t.id,
            league_id: l.id,
            stadium_id: t.stadium.id,
            attributes: &t.attributes,
        }),
    )?;
    write_jsonl(
        &output_dir.join("stadiums.jsonl"),
        teams().map(|(_, t)| StadiumRow {
            id: t.stadium.id,
            team_id: t.id,
            attributes: &t.stadium.attributes,
        }),
    )?;
    write_jsonl(
        &output_dir.join("players.jsonl"),
        teams().flat_map(|(_, t)| {
            t.squad.iter().map(move |p| PlayerRow {
                id: p.id,
                team_id: t.id,
                attributes: &p.attributes,
            })
        }),
    )?;

    tracing::debug!(dir = %output_dir.display(), leagues = leagues.len(), "flushed leagues to jsonl");
    Ok(())
}
