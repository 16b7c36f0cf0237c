//! Quality gate configuration, end to end.
//!
//! Loader precedence is unit tested in speako-core; these tests check that
//! gate keys reach the commands through the binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

#[test]
fn gate_keys_reported_by_info() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".speako.toml"),
        "min_clarity_score = 70\nmax_wer = 0.25\nmin_cefr_level = \"B2\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["min_clarity_score"], 70);
    assert_eq!(json["config"]["max_wer"], 0.25);
    assert_eq!(json["config"]["min_cefr_level"], "B2");
}

#[test]
fn env_overrides_gate_keys() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".speako.yaml"), "max_wer: 0.5\n").unwrap();

    let output = cmd()
        .env("SPEAKO_MAX_WER", "0.1")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["max_wer"], 0.1);
}

#[test]
fn disable_input_limit_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("speako.json"),
        r#"{"disable_input_limit": true}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_bytes"].is_null());
}

#[test]
fn discovered_config_gates_wer_command() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".speako.toml"), "max_wer = 0.1\n").unwrap();
    fs::write(tmp.path().join("ref.txt"), "one two three four").unwrap();
    fs::write(tmp.path().join("hyp.txt"), "one two three five").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "wer", "ref.txt", "hyp.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WER 0.250"));

    // The flag overrides the config value.
    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "wer",
            "ref.txt",
            "hyp.txt",
            "--max-wer",
            "0.3",
        ])
        .assert()
        .success();
}

#[test]
fn gate_keys_found_from_subdirectory() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join(".git")).unwrap();
    fs::write(
        tmp.path().join("speako.yaml"),
        "min_cefr_level: C1\nmax_wer: 0.05\n",
    )
    .unwrap();
    let sessions = tmp.path().join("sessions").join("week1");
    fs::create_dir_all(&sessions).unwrap();

    let json = info_json(&sessions);
    assert_eq!(json["config"]["min_cefr_level"], "C1");
    assert_eq!(json["config"]["max_wer"], 0.05);
}

#[test]
fn explicit_config_overrides_discovered_gate() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".speako.toml"), "max_wer = 0.5\n").unwrap();
    let strict = tmp.path().join("strict.toml");
    fs::write(&strict, "max_wer = 0.0\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            strict.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["max_wer"], 0.0);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("strict.toml"), "{reported}");
}

#[test]
fn config_level_gates_metrics_command() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".speako.toml"), "min_cefr_level = \"B2\"\n").unwrap();
    fs::write(tmp.path().join("talk.txt"), "Hello there. I like it.").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "metrics", "talk.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is estimated at A1 (minimum: B2)"));

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "metrics",
            "talk.txt",
            "--min-level",
            "a1",
        ])
        .assert()
        .success();
}

#[test]
fn config_clarity_gates_analyze_command() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("speako.json"), r#"{"min_clarity_score": 100}"#).unwrap();
    let text = "I think, um, maybe we could kind of try it, uh, next week or so, \
                I guess, if the team is sort of ready for it.";
    fs::write(tmp.path().join("talk.txt"), text).unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "analyze", "talk.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is below minimum 100"));
}

#[test]
fn invalid_cefr_level_in_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".speako.toml"), "min_cefr_level = \"D9\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}
