//! CLI integration tests.
//!
//! Each test isolates its config via ACTIVA_CONFIG_DIR; network-dependent
//! paths point at a closed local port so failures are fast and
//! deterministic.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Nothing listens here; connections are refused immediately.
const DEAD_SERVER: &str = "http://127.0.0.1:1";

fn activa(config_dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("activa").unwrap();
    cmd.env("ACTIVA_CONFIG_DIR", config_dir.path());
    cmd.env_remove("ACTIVA_TOKEN");
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    activa(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("recommendations"))
        .stdout(predicate::str::contains("prefs"));
}

#[test]
fn short_query_answers_without_a_server() {
    let dir = TempDir::new().unwrap();
    activa(&dir)
        .args(["--server", DEAD_SERVER, "search", "f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no matches"));
}

#[test]
fn search_requires_query_or_interactive() {
    let dir = TempDir::new().unwrap();
    activa(&dir)
        .args(["--server", DEAD_SERVER, "search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive"));
}

#[test]
fn recommendations_degrade_when_server_is_down() {
    let dir = TempDir::new().unwrap();
    activa(&dir)
        .args(["--server", DEAD_SERVER, "recommendations"])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning:"))
        .stdout(predicate::str::contains("no recommendations"));
}

#[test]
fn activities_fail_with_context_when_server_is_down() {
    let dir = TempDir::new().unwrap();
    activa(&dir)
        .args(["--server", DEAD_SERVER, "activities"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to fetch activities"));
}

#[test]
fn logout_clears_only_the_token() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "server = \"http://example.invalid\"\ntoken = \"tok-123\"\n",
    )
    .unwrap();

    activa(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("token cleared"));

    let content = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(!content.contains("tok-123"));
    assert!(
        content.contains("example.invalid"),
        "server setting should survive logout: {content}"
    );
}

#[test]
fn malformed_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "server = [not toml").unwrap();

    activa(&dir)
        .arg("logout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed config"));
}
