#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! once assert_cmd 2.1 is the floor

use assert_cmd::Command;
use predicates::prelude::*;

fn spotctl() -> Command {
    let mut cmd = Command::cargo_bin("spotctl").unwrap();
    cmd.env_remove("SPOTINST_TOKEN")
        .env_remove("SPOTINST_ACCOUNT")
        .env_remove("SPOTINST_CLOUD_PROVIDER")
        .env("SPOTINST_CREDENTIALS_FILE", "/nonexistent/spotctl/credentials");
    cmd
}

#[test]
fn test_cli_help() {
    spotctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ocean"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_cli_version() {
    spotctl()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("spotctl"));
}

#[test]
fn test_create_cluster_help_lists_flags() {
    spotctl()
        .args(["create", "cluster", "kubernetes", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--spot-percentage"))
        .stdout(predicate::str::contains("--fallback-ondemand"))
        .stdout(predicate::str::contains("--enable-auto-scaler-autoconfig"));
}

#[test]
fn test_invalid_command() {
    spotctl()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_delete_cluster_requires_id() {
    spotctl()
        .args(["delete", "cluster", "kubernetes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cluster-id is required"));
}

#[test]
fn test_unknown_output_format() {
    spotctl()
        .args(["get", "cluster", "kubernetes", "--output", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format: xml"));
}

#[test]
fn test_unknown_cloud_provider() {
    spotctl()
        .args(["--cloud-provider", "oracle", "get", "cluster", "kubernetes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown cloud provider: oracle"));
}

#[test]
fn test_invalid_spot_percentage() {
    spotctl()
        .args([
            "create",
            "cluster",
            "kubernetes",
            "--name",
            "foo",
            "--spot-percentage",
            "150",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid spot-percentage"));
}

#[test]
fn test_missing_credentials() {
    spotctl()
        .args(["get", "cluster", "kubernetes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("credentials"));
}
