use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("lafires").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LA fires relief API"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("lafires").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_shelters_help() {
    let mut cmd = Command::cargo_bin("lafires").unwrap();
    cmd.arg("shelters")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("distance"));
}
