//! End-to-end tests for the tsci-update binary
//!
//! These tests run the compiled binary. They set the skip environment
//! variable so no test ever reaches the real npm registry.

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("tsci-update").expect("binary should build")
}

#[test]
fn test_version_flag() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tsci-update"));
}

#[test]
fn test_help_mentions_flags() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--package"))
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--yes"));
}

#[test]
fn test_skip_env_short_circuits() {
    bin()
        .env("TSCI_SKIP_CLI_UPDATE", "true")
        .assert()
        .success()
        .stdout(predicate::str::contains("Update check skipped by environment."));
}

#[test]
fn test_skip_env_quiet_prints_nothing() {
    bin()
        .env("TSCI_SKIP_CLI_UPDATE", "true")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_timeout_is_rejected() {
    bin()
        .env("TSCI_SKIP_CLI_UPDATE", "true")
        .args(["--timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout must be at least 1 second"));
}
