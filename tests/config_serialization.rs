//! Tests for loading and saving the self-play configuration

use std::fs;

use tempfile::TempDir;
use tictactoe_minimax::{
    Error, Player,
    cli::config::{OpponentKind, PlayConfig},
};

#[test]
fn test_config_save_load_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("play.json");

    let mut config = PlayConfig {
        games: 12,
        opponent: OpponentKind::Optimal,
        optimal_player: Player::O,
        max_depth: Some(4),
        ..PlayConfig::default()
    };
    config.common.seed = Some(42);
    config.common.progress = false;

    config.save(&path).expect("Failed to save config");
    assert!(path.exists(), "Saved file should exist");

    let loaded = PlayConfig::load(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
}

#[test]
fn test_config_file_uses_flat_common_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("play.json");
    fs::write(&path, r#"{ "seed": 3, "verbose": true, "optimal_player": "O" }"#).unwrap();

    let loaded = PlayConfig::load(&path).unwrap();
    assert_eq!(loaded.common.seed, Some(3));
    assert!(loaded.common.verbose);
    assert_eq!(loaded.optimal_player, Player::O);
    assert_eq!(loaded.games, PlayConfig::default().games);
}

#[test]
fn test_missing_file_reports_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = PlayConfig::load(&temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("read config"));
}

#[test]
fn test_malformed_json_reports_serialization_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, "{ games: ").unwrap();

    let err = PlayConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_zero_games_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("zero.json");
    fs::write(&path, r#"{ "games": 0 }"#).unwrap();

    let err = PlayConfig::load(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}
