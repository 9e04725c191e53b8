use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use castle_defender::config::Config;
use castle_defender::error::GameError;
use castle_defender::input::{action_for_key, Action};
use crossterm::event::KeyCode;

// ── Config ────────────────────────────────────────────────────────────────────

#[test]
fn empty_config_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.frame_interval(), Duration::from_micros(16_660));
    assert_eq!(config.seed, None);
}

#[test]
fn partial_config_overrides_only_given_keys() {
    let config = Config::from_toml_str("seed = 7\nlog_level = \"debug\"").unwrap();
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.log_file, PathBuf::from("castle_defender.log"));
}

#[test]
fn non_positive_frame_interval_is_rejected() {
    let err = Config::from_toml_str("frame_interval_ms = 0.0").unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
    let err = Config::from_toml_str("frame_interval_ms = -5.0").unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn unknown_key_is_a_parse_error() {
    let err = Config::from_toml_str("enemy_speed = 9").unwrap_err();
    assert!(matches!(err, GameError::ConfigParse(_)));
}

#[test]
fn load_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "frame_interval_ms = 33.0").unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.frame_interval(), Duration::from_millis(33));
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    match Config::load(&path) {
        Err(GameError::ConfigRead { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected read error, got {:?}", other),
    }
}

// ── Key mapping ───────────────────────────────────────────────────────────────

#[test]
fn key_aliases_map_to_actions() {
    for code in [KeyCode::Char('w'), KeyCode::Char('W'), KeyCode::Up, KeyCode::Char(' ')] {
        assert_eq!(action_for_key(code), Some(Action::Fire));
    }
    for code in [KeyCode::Char('a'), KeyCode::Char('A'), KeyCode::Left] {
        assert_eq!(action_for_key(code), Some(Action::Left));
    }
    for code in [KeyCode::Char('d'), KeyCode::Char('D'), KeyCode::Right] {
        assert_eq!(action_for_key(code), Some(Action::Right));
    }
    assert_eq!(action_for_key(KeyCode::Enter), Some(Action::Confirm));
}

#[test]
fn unmapped_keys_are_dropped() {
    for code in [KeyCode::Char('x'), KeyCode::Down, KeyCode::Tab, KeyCode::Char('s')] {
        assert_eq!(action_for_key(code), None);
    }
}
