//! CLI binary integration tests.
//!
//! These tests exercise argument handling and configuration tooling only;
//! nothing here performs a network call.

use assert_cmd::Command;
use predicates::prelude::*;

fn haikugen() -> Command {
    Command::cargo_bin("haikugen").unwrap()
}

#[test]
fn help_lists_subcommands() {
    haikugen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("haikugen"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_prints_name() {
    haikugen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("haikugen"));
}

#[test]
fn generate_rejects_empty_topic_without_calling_out() {
    haikugen()
        .args(["generate", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a topic for your haiku"));
}

#[test]
fn generate_rejects_whitespace_topic() {
    haikugen()
        .args(["generate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a topic for your haiku"));
}

#[test]
fn config_validate_fails_for_missing_file() {
    haikugen()
        .args(["config", "validate", "--config", "/nonexistent/haikugen.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn config_validate_reports_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[backend\nmodel = ").unwrap();

    haikugen()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation"));
}

#[test]
fn config_init_then_validate_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    haikugen()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    haikugen()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# existing\n").unwrap();

    haikugen()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_show_uses_defaults_when_file_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    haikugen()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("bedrock-runtime"));
}

#[test]
fn json_mode_emits_structured_validation_error() {
    haikugen()
        .args(["--json", "generate", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a topic for your haiku"));
}
