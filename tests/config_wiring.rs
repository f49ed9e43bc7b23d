//! Integration tests for config wiring
//!
//! These tests verify that the config file and the `USAGI_FILE` variable
//! decide which task file a session opens.

use clap::Parser;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use usagi::cli::{open_session, Cli};
use usagi::config::{get_app_dir, Config};

fn setup_temp_home() -> tempfile::TempDir {
    let temp = tempfile::TempDir::new().unwrap();
    std::env::set_var("HOME", temp.path());
    std::env::remove_var("XDG_CONFIG_HOME");
    std::env::remove_var("XDG_DATA_HOME");
    std::env::remove_var("USAGI_FILE");
    temp
}

fn write_config(content: &str) {
    let dir = get_app_dir().unwrap();
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
#[serial]
fn test_missing_config_uses_defaults() {
    let _temp = setup_temp_home();

    let config = Config::load().unwrap();
    assert_eq!(config.upcoming.default_days, 7);
    assert!(config.storage.data_file.is_none());
}

#[test]
#[serial]
fn test_config_data_file_with_home_expansion() {
    let temp = setup_temp_home();
    write_config(
        r#"
        [storage]
        data_file = "~/notes/tasks.txt"

        [upcoming]
        default_days = 3
    "#,
    );

    let config = Config::load().unwrap();
    assert_eq!(config.upcoming.default_days, 3);
    assert_eq!(
        config.data_file(None),
        temp.path().join("notes").join("tasks.txt")
    );
}

#[test]
#[serial]
fn test_invalid_config_is_reported() {
    let _temp = setup_temp_home();
    write_config("[upcoming]\ndefault_days = \"soon\"\n");

    let err = Config::load().unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
#[serial]
fn test_usagi_file_env_selects_task_file() {
    let temp = setup_temp_home();
    let path = temp.path().join("from-env.txt");
    fs::write(&path, "T | 0 | from env\n").unwrap();
    std::env::set_var("USAGI_FILE", &path);

    let cli = Cli::try_parse_from(["usagi", "list"]).unwrap();
    assert_eq!(cli.file, Some(path.clone()));

    let session = open_session(&cli).unwrap();
    assert_eq!(session.storage().path(), path.as_path());
    assert_eq!(session.tasks().get(1).unwrap().title(), "from env");

    std::env::remove_var("USAGI_FILE");
}

#[test]
#[serial]
fn test_file_flag_overrides_config() {
    let temp = setup_temp_home();
    write_config(
        r#"
        [storage]
        data_file = "/nonexistent/config-tasks.txt"
    "#,
    );
    let flag_path: PathBuf = temp.path().join("flag.txt");

    let cli = Cli::try_parse_from(["usagi", "--file", flag_path.to_str().unwrap(), "list"])
        .unwrap();
    let session = open_session(&cli).unwrap();
    assert_eq!(session.storage().path(), flag_path.as_path());
    assert!(session.tasks().is_empty());
}
