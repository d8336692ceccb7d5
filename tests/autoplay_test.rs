//! Tests for unattended matches and their JSON summary.

use tictactoe_engine::FirstMover;
use tictactoe_match::{GameConfig, autoplay};

#[test]
fn test_summary_serializes_to_json() {
    let config = GameConfig::from_toml("target_wins = 2\nseed = 17").unwrap();
    let summary = autoplay(&config, 4).unwrap();

    let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["seed"], 17);
    assert_eq!(json["matches"], 4);
    let human = json["human_match_wins"].as_u64().unwrap();
    let computer = json["computer_match_wins"].as_u64().unwrap();
    assert_eq!(human + computer, 4);
}

#[test]
fn test_heuristic_beats_random_over_many_matches() {
    let config = GameConfig::default()
        .with_overrides(Some(1), Some(FirstMover::Alternate), Some(2024))
        .unwrap();
    let summary = autoplay(&config, 200).unwrap();
    assert!(summary.computer_match_wins > summary.human_match_wins);
}

#[test]
fn test_unseeded_run_reports_its_seed() {
    let config = GameConfig::from_toml("target_wins = 1").unwrap();
    let first = autoplay(&config, 2).unwrap();

    let replay = GameConfig::from_toml(&format!("target_wins = 1\nseed = {}", first.seed)).unwrap();
    assert_eq!(autoplay(&replay, 2).unwrap(), first);
}
