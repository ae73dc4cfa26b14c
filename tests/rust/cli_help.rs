use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_prints_help() {
    let mut cmd = Command::cargo_bin("practime").expect("binary not found");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("practime"))
        .stdout(predicate::str::contains("calc"))
        .stdout(predicate::str::contains("sweep"));
}
