//! Integration tests for the teambalance binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const ROSTER: &str = indoc! {r#"
    {
      "teams": [],
      "members": [
        {"name": "Ana", "score": 9},
        {"name": "Ben", "score": 8},
        {"name": "Cleo", "score": 7},
        {"name": "Dan", "score": 6},
        {"name": "Eve", "score": 5},
        {"name": "Finn", "score": 5},
        {"name": "Gus", "score": 4},
        {"name": "Hana", "score": 3},
        {"name": "Ivo", "score": 2},
        {"name": "Jae", "score": 1},
        {"name": "Kai", "score": 10}
      ]
    }
"#};

const TEN: &str = "Ana,Ben,Cleo,Dan,Eve,Finn,Gus,Hana,Ivo,Jae";

fn teambalance(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("teambalance").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn json_stdout(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

#[test]
fn test_inline_members_json() {
    let dir = TempDir::new().unwrap();
    let output = teambalance(&dir)
        .args([
            "balance", "-m", "A=1", "-m", "B=2", "-m", "C=3", "-m", "D=10", "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json = json_stdout(&output);
    let team_1: Vec<_> = json["teams"][0]["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(team_1, vec!["A", "D"]);
    assert_eq!(json["difference"], 6);
    assert_eq!(json["combinations_evaluated"], 6);
}

#[test]
fn test_nothing_to_balance_fails() {
    let dir = TempDir::new().unwrap();
    assert_fails_with(teambalance(&dir).arg("balance"), "Nothing to balance");
}

#[test]
fn test_select_save_show_regenerate_reset() {
    let dir = TempDir::new().unwrap();
    let roster_path = dir.path().join("teams.json");
    fs::write(&roster_path, ROSTER).unwrap();

    teambalance(&dir)
        .args(["balance", "--select", TEN, "--save", "--format", "json"])
        .assert()
        .success();

    let stored: Value = serde_json::from_str(&fs::read_to_string(&roster_path).unwrap()).unwrap();
    assert_eq!(stored["teams"].as_array().unwrap().len(), 2);
    assert_eq!(stored["teams"][0].as_array().unwrap().len(), 5);
    assert_eq!(stored["members"].as_array().unwrap().len(), 11);

    let shown = teambalance(&dir)
        .args(["show", "--format", "json"])
        .output()
        .unwrap();
    assert!(shown.status.success());
    assert_eq!(json_stdout(&shown)["teams"], stored["teams"]);

    let regenerated = teambalance(&dir)
        .args(["regenerate", "--format", "json"])
        .output()
        .unwrap();
    assert!(regenerated.status.success());
    // 50 total points split evenly
    assert_eq!(json_stdout(&regenerated)["difference"], 0);

    teambalance(&dir).arg("reset").assert().success();
    let cleared: Value = serde_json::from_str(&fs::read_to_string(&roster_path).unwrap()).unwrap();
    assert!(cleared["teams"].as_array().unwrap().is_empty());
}

#[test]
fn test_selection_over_capacity_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("teams.json"), ROSTER).unwrap();

    assert_fails_with(
        teambalance(&dir).args(["balance", "--select", &format!("{TEN},Kai")]),
        "Selection is full",
    );
}

#[test]
fn test_partial_selection_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("teams.json"), ROSTER).unwrap();

    assert_fails_with(
        teambalance(&dir).args(["balance", "--select", "Ana,Ben"]),
        "Selection incomplete: 2 of 10",
    );
}

#[test]
fn test_config_capacity_is_honoured() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("teams.json"), ROSTER).unwrap();
    fs::write(
        dir.path().join(".teambalance.toml"),
        "[selection]\ncapacity = 4\n\n[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let output = teambalance(&dir)
        .args(["balance", "--select", "Ana,Ben,Cleo,Dan"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    // {Ana, Dan} = 15 vs {Ben, Cleo} = 15
    assert_eq!(json_stdout(&output)["difference"], 0);
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    teambalance(&dir).arg("init").assert().success();
    assert!(dir.path().join(".teambalance.toml").exists());

    assert_fails_with(teambalance(&dir).arg("init"), "already exists");
    teambalance(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_output_file_markdown() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("report.md");
    teambalance(&dir)
        .args(["balance", "-m", "A=5", "-m", "B=7", "--format", "markdown", "--output"])
        .arg(&report)
        .assert()
        .success();

    let text = fs::read_to_string(&report).unwrap();
    assert!(text.contains("# Balanced Teams"));
    assert!(text.contains("**Score difference:** 2"));
}

#[test]
fn test_zero_timeout_points_at_time_budget() {
    let dir = TempDir::new().unwrap();
    assert_fails_with(
        teambalance(&dir).args(["balance", "-m", "A=5", "-m", "B=7", "--timeout-ms", "0"]),
        "--timeout-ms",
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_output_write_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = teambalance(&dir)
        .args(["balance", "-m", "A=5", "-m", "B=7", "--format", "json", "--output", "/dev/full"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

fn assert_fails_with(cmd: &mut Command, needle: &str) {
    let output = cmd.output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "command unexpectedly succeeded");
    assert!(stderr.contains(needle), "stderr did not mention {needle:?}: {stderr}");
}
