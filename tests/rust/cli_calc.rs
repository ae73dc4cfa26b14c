use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const SCENARIO: [&str; 12] = [
    "--start", "60", "--end", "120", "--step", "10", "--beats", "4", "--reps", "2", "--sets", "3",
];

fn practime(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("practime").expect("binary not found");
    cmd.current_dir(dir);
    cmd
}

#[test]
fn cli_calc_prints_summary() {
    let dir = tempdir().expect("create tempdir");
    practime(dir.path())
        .arg("calc")
        .args(SCENARIO)
        .assert()
        .success()
        .stdout(predicate::str::contains("Steps: 6"))
        .stdout(predicate::str::contains("Exact: 1m 58.06s"))
        .stdout(predicate::str::contains("Error rate: +1.34%"));
}

#[test]
fn cli_calc_json_output() {
    let dir = tempdir().expect("create tempdir");
    let output = practime(dir.path())
        .arg("calc")
        .args(SCENARIO)
        .arg("--json")
        .output()
        .expect("run practime");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(json["stepCount"], 6);
    assert_eq!(json["timeConstant"], 480.0);
    let exact = json["exactSeconds"].as_f64().unwrap();
    assert!((exact - 118.062_337_662_337_65).abs() < 1e-9);
}

#[test]
fn cli_calc_rejects_zero_step() {
    let dir = tempdir().expect("create tempdir");
    practime(dir.path())
        .args(["calc", "--step", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("NonPositiveStep"));
}

#[test]
fn cli_calc_rejects_zero_tempo() {
    let dir = tempdir().expect("create tempdir");
    practime(dir.path())
        .args(["calc", "--start=0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("NonPositiveTempo"));
}

#[test]
fn cli_schedule_lists_every_step() {
    let dir = tempdir().expect("create tempdir");
    let output = practime(dir.path())
        .arg("schedule")
        .args(SCENARIO)
        .arg("--json")
        .output()
        .expect("run practime");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let steps = json.as_array().expect("array of steps");
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[6]["tempo"], 120.0);
}

#[test]
fn cli_sweep_reports_each_step_size() {
    let dir = tempdir().expect("create tempdir");
    practime(dir.path())
        .args(["sweep", "--start", "60", "--end", "120", "--steps", "10", "0", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NonPositiveStep"))
        .stdout(predicate::str::contains("12 steps"));
}
