use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn cli_init_writes_config_once() {
    let dir = tempdir().expect("create tempdir");

    let mut cmd = Command::cargo_bin("practime").expect("binary not found");
    cmd.current_dir(dir.path()).arg("init");
    cmd.assert().success();
    assert!(dir.path().join("practime.json").exists());

    let mut again = Command::cargo_bin("practime").expect("binary not found");
    again.current_dir(dir.path()).arg("init");
    again
        .assert()
        .failure()
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn cli_uses_config_defaults() {
    let dir = tempdir().expect("create tempdir");
    std::fs::write(
        dir.path().join("practime.toml"),
        "[practice]\nstart_tempo = 100\nend_tempo = 101\nstep_size = 5\n\n[report]\nformat = \"json\"\n",
    )
    .expect("write config");

    let mut cmd = Command::cargo_bin("practime").expect("binary not found");
    let output = cmd
        .current_dir(dir.path())
        .arg("calc")
        .output()
        .expect("run practime");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["stepCount"], 0);
    assert_eq!(json["actualEndTempo"], 100.0);
}
