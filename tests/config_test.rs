//! Tests for loading configuration files.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_timetravel::AppConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "log_file = \"game.log\"\nshow_cell_numbers = false").expect("write");

    let config = AppConfig::load_or_default(file.path()).expect("config");
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert!(!*config.show_cell_numbers());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "log_filter = [").expect("write");

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
}

#[test]
fn test_unreadable_path_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A directory exists but cannot be read as a file.
    let err = AppConfig::load_or_default(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"), "{err}");
}
