//! Tests for AppConfig loading.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use tutorial_games::AppConfig;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.log_file(), &PathBuf::from("tutorial_games.log"));
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.tick_millis(), 100);
    assert_eq!(config.catalog(), &None);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = AppConfig::from_toml_str("log_filter = \"debug,tutorial_tictactoe=trace\"\n")
        .expect("Parse failed");
    assert_eq!(config.log_filter(), "debug,tutorial_tictactoe=trace");
    assert_eq!(*config.tick_millis(), 100);
}

#[test]
fn test_load_explicit_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("tutorial_games.toml");
    fs::write(
        &path,
        r#"
log_file = "/tmp/games.log"
tick_millis = 50
catalog = "animals.toml"
"#,
    )
    .expect("Failed to write TOML");

    let config = AppConfig::load(Some(&path)).expect("Load failed");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/games.log"));
    assert_eq!(*config.tick_millis(), 50);
    assert_eq!(config.catalog(), &Some(PathBuf::from("animals.toml")));
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_error() {
    let err = AppConfig::from_toml_str("tick_millis = \"soon\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_log_file_override() {
    let config = AppConfig::default().with_log_file("other.log");
    assert_eq!(config.log_file(), &PathBuf::from("other.log"));
}
