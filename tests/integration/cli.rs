//! Tests for the sortviz binary's command line
//!
//! Only paths that exit before the TUI starts are exercised here.

use assert_cmd::Command;
use predicates::prelude::*;
use sortviz::config::EXAMPLE_CONFIG;
use sortviz::Config;
use std::io::Write;
use tempfile::NamedTempFile;

fn sortviz() -> Command {
    Command::cargo_bin("sortviz").expect("binary should build")
}

#[test]
fn test_help_lists_options() {
    sortviz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--size"))
        .stdout(predicate::str::contains("--speed"))
        .stdout(predicate::str::contains("--seed"));
}

#[test]
fn test_size_out_of_range() {
    sortviz()
        .args(["--size", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--size"));
}

#[test]
fn test_speed_out_of_range() {
    sortviz()
        .args(["--speed", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--speed"));
}

#[test]
fn test_print_config() {
    sortviz()
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[visualizer]"))
        .stdout(predicate::str::contains("[colors]"));
}

/// The example shipped with the binary is itself a valid config
#[test]
fn test_example_config_loads() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(EXAMPLE_CONFIG.as_bytes()).unwrap();

    let config = Config::load_from(file.path()).unwrap();
    let defaults = Config::default();
    assert_eq!(config.visualizer, defaults.visualizer);
    assert_eq!(config.palette, defaults.palette);
}
