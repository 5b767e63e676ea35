mod common;

use std::collections::HashSet;

use common::{config_with_seed, read_lines};
use league_gen::flush::flush_to_jsonl;
use league_gen::{LeagueGenerator, RecordSet};

#[test]
fn flush_produces_valid_jsonl_files() {
    let mut config = config_with_seed(42, 4);
    config.league.tiers = 2;
    let mut generator = LeagueGenerator::new(config).unwrap();
    let leagues = generator.generate_pyramid("ENG", &mut RecordSet::new()).unwrap();
    let dir = tempfile::tempdir().unwrap();

    flush_to_jsonl(&leagues, dir.path()).unwrap();

    let leagues_path = dir.path().join("leagues.jsonl");
    let teams_path = dir.path().join("teams.jsonl");
    let stadiums_path = dir.path().join("stadiums.jsonl");
    let players_path = dir.path().join("players.jsonl");

    assert!(leagues_path.exists());
    assert!(teams_path.exists());
    assert!(stadiums_path.exists());
    assert!(players_path.exists());

    let league_lines = read_lines(&leagues_path);
    let team_lines = read_lines(&teams_path);
    let stadium_lines = read_lines(&stadiums_path);
    let player_lines = read_lines(&players_path);

    let player_count: usize = leagues.iter().map(|l| l.players().count()).sum();
    assert_eq!(league_lines.len(), 2, "expected 2 leagues");
    assert_eq!(team_lines.len(), 8, "expected 8 teams");
    assert_eq!(stadium_lines.len(), 8, "expected one stadium per team");
    assert_eq!(player_lines.len(), player_count);

    for line in &league_lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("id").is_some());
        assert!(v.get("name").is_some());
        assert_eq!(v["country_code"], "ENG");
        assert!(v.get("teams").is_none(), "league rows should not nest teams");
    }

    let league_ids: HashSet<u64> = leagues.iter().map(|l| l.id).collect();
    let mut team_ids = HashSet::new();
    let mut stadium_refs = HashSet::new();
    for line in &team_lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(league_ids.contains(&v["league_id"].as_u64().unwrap()));
        assert!(v.get("squad").is_none());
        team_ids.insert(v["id"].as_u64().unwrap());
        stadium_refs.insert(v["stadium_id"].as_u64().unwrap());
    }

    for line in &stadium_lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(team_ids.contains(&v["team_id"].as_u64().unwrap()));
        assert!(stadium_refs.contains(&v["id"].as_u64().unwrap()));
        assert!(v["capacity"].as_u64().unwrap() >= 2_500);
    }

    for line in &player_lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(team_ids.contains(&v["team_id"].as_u64().unwrap()));
        assert!(v["position"].is_string());
        let ability = v["ability"].as_u64().unwrap();
        let potential = v["potential"].as_u64().unwrap();
        assert!(potential >= ability);
    }
}

#[test]
fn flush_creates_missing_output_dir() {
    let mut generator = LeagueGenerator::new(config_with_seed(7, 2)).unwrap();
    let league = generator.generate_league("JPN", 1, &mut RecordSet::new()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out").join("jpn");

    flush_to_jsonl(std::slice::from_ref(&league), &nested).unwrap();

    assert_eq!(read_lines(&nested.join("leagues.jsonl")).len(), 1);
    assert_eq!(read_lines(&nested.join("teams.jsonl")).len(), 2);
}

#[test]
fn flushed_rows_round_trip_attributes() {
    let mut generator = LeagueGenerator::new(config_with_seed(21, 3)).unwrap();
    let league = generator.generate_league("BRA", 1, &mut RecordSet::new()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    flush_to_jsonl(std::slice::from_ref(&league), dir.path()).unwrap();

    let rows = read_lines(&dir.path().join("teams.jsonl"));
    for (row, team) in rows.iter().zip(&league.teams) {
        let v: serde_json::Value = serde_json::from_str(row).unwrap();
        assert_eq!(v["id"].as_u64().unwrap(), team.id);
        assert_eq!(v["name"], team.attributes.name.as_str());
        assert_eq!(v["reputation"].as_u64().unwrap(), team.attributes.reputation.value() as u64);
        assert_eq!(v["squad_size"].as_u64().unwrap(), team.squad.len() as u64);
    }
}
