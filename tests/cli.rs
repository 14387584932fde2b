use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const SHOTS: &str = r#"{
  "player": "Test Player",
  "match_id": 7,
  "shots": [
    {"id": "s1", "location": [100.0, 36.0], "shot_end_location": [120.0, 38.0, 1.0], "shot_outcome": "Goal", "shot_statsbomb_xg": 0.42},
    {"id": "s2", "location": [92.0, 50.0], "shot_end_location": [118.0, 45.0], "shot_outcome": "Blocked", "shot_statsbomb_xg": 0.05}
  ]
}"#;

fn write_payload(dir: &Path) -> PathBuf {
    let p = dir.join("shots.json");
    fs::write(&p, SHOTS).unwrap();
    p
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("pitchviz").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pitchviz"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn render_writes_svg() {
    let dir = tempdir().unwrap();
    let input = write_payload(dir.path());
    let out = dir.path().join("shots.svg");
    let mut cmd = Command::cargo_bin("pitchviz").unwrap();
    cmd.args(["render", "--kind", "shots", "--orientation", "vertical", "--click", "1", "--labels"])
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Drew 2 of 2 events"));
    assert!(fs::read_to_string(&out).unwrap().contains("<svg"));
}

#[test]
fn goal_view_reports_skipped_shots() {
    let dir = tempdir().unwrap();
    let input = write_payload(dir.path());
    let out = dir.path().join("goal.png");
    let mut cmd = Command::cargo_bin("pitchviz").unwrap();
    cmd.args(["render", "--orientation", "goal-view"])
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Drew 1 of 2 events"));
    assert!(out.exists());
}

#[test]
fn click_out_of_range_fails() {
    let dir = tempdir().unwrap();
    let input = write_payload(dir.path());
    let mut cmd = Command::cargo_bin("pitchviz").unwrap();
    cmd.args(["render", "--click", "3"])
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("x.svg"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn stats_prints_summary() {
    let dir = tempdir().unwrap();
    let input = write_payload(dir.path());
    let mut cmd = Command::cargo_bin("pitchviz").unwrap();
    cmd.args(["stats", "--kind", "shots"]).arg("--input").arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Goals"))
        .stdout(predicate::str::contains("50.0%"));
}

#[test]
fn export_infers_format_from_extension() {
    let dir = tempdir().unwrap();
    let input = write_payload(dir.path());
    let out = dir.path().join("markers.json");
    let mut cmd = Command::cargo_bin("pitchviz").unwrap();
    cmd.args(["export"])
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out);
    cmd.assert().success();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 2);
}
