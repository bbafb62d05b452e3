//! End-to-end tests for the pipeline-reporter binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn reporter_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pipeline-reporter").unwrap();
    cmd.current_dir(dir.path())
        .env("CI_PIPELINE_ID", "4711")
        .env("CI_COMMIT_SHA", "c0ffee00c0ffee00")
        .env("CI_COMMIT_REF_NAME", "main")
        .env_remove("SLACK_WEBHOOK_URL")
        .env_remove("PIPELINE_NAME")
        .env_remove("RUST_LOG");
    cmd
}

fn read_json(dir: &TempDir, name: &str) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(dir.path().join(name)).unwrap()).unwrap()
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let dir = TempDir::new().unwrap();
    reporter_cmd(&dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_junit_artifact() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("unit-results.xml"),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuite name="unit" tests="3" failures="1" errors="1" skipped="0" time="2.5">
    <testcase name="ok" classname="com.example.A" time="1.0"/>
    <testcase name="bad" classname="com.example.A" time="1.0"><failure>assert</failure></testcase>
    <testcase name="boom" classname="com.example.B" time="0.5"><error>crash</error></testcase>
</testsuite>"#,
    )
    .unwrap();

    reporter_cmd(&dir)
        .arg("unit-results.xml")
        .assert()
        .success()
        .stdout(predicate::str::contains("unit-results-report.json"));

    let report = read_json(&dir, "unit-results-report.json");
    assert_eq!(report["pipeline_id"], "4711");
    assert_eq!(report["summary"]["total_tests"], 3);
    assert_eq!(report["summary"]["passed"], 1);
    assert_eq!(report["summary"]["failed"], 2);
    assert_eq!(report["tests"]["unit_tests"]["test_cases"][1]["status"], "failed");
    assert_eq!(report["tests"]["unit_tests"]["test_cases"][2]["error"], "crash");
    assert_eq!(report["tests"]["integration_tests"], serde_json::json!({}));
}

#[test]
fn test_device_log_artifact() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("cuttlefish.log"),
        "Test results for FooTest: OK\nTest results for BarTest: FAILURES\nTest results for BazTest: ?\n",
    )
    .unwrap();

    reporter_cmd(&dir).arg("cuttlefish.log").assert().success();

    let report = read_json(&dir, "cuttlefish-report.json");
    assert_eq!(report["tests"]["integration_tests"]["total_tests"], 3);
    assert_eq!(report["summary"]["passed"], 1);
    assert_eq!(report["summary"]["failed"], 1);
}

#[test]
fn test_performance_artifact() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("performance.txt"),
        "TotalTime: 100\nTotalTime: 200\nTotalTime: 300\n",
    )
    .unwrap();

    reporter_cmd(&dir).arg("performance.txt").assert().success();

    let report = read_json(&dir, "performance-report.json");
    let perf = &report["tests"]["performance_tests"];
    assert_eq!(perf["avg_startup_time"], 200.0);
    assert_eq!(perf["max_startup_time"], 300);
    assert_eq!(perf["min_startup_time"], 100);
    assert_eq!(report["summary"]["total_tests"], 0);
}

#[test]
fn test_unparsable_artifact_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.xml"), "<testsuite>").unwrap();

    reporter_cmd(&dir)
        .arg("broken.xml")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error parsing"));

    let report = read_json(&dir, "broken-report.json");
    assert_eq!(report["tests"]["unit_tests"], serde_json::json!({}));
}

#[test]
fn test_generate_final_report() {
    let dir = TempDir::new().unwrap();

    reporter_cmd(&dir)
        .arg("--generate-final-report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final pipeline report generated"));

    let report = read_json(&dir, "final-pipeline-report.json");
    assert_eq!(report["branch"], "main");
    assert_eq!(report["summary"]["total_tests"], 0);

    let metrics = read_json(&dir, "pipeline_metrics.json");
    assert_eq!(metrics["pipeline_success_rate"], 0.0);

    let html = fs::read_to_string(dir.path().join("final-pipeline-report.html")).unwrap();
    assert!(html.contains("Commit: c0ffee00"));
}

#[test]
fn test_send_to_slack_without_report() {
    let dir = TempDir::new().unwrap();

    reporter_cmd(&dir)
        .arg("--send-to-slack")
        .assert()
        .success()
        .stdout(predicate::str::contains("No final report found"));
}

#[test]
fn test_send_to_slack_without_webhook() {
    let dir = TempDir::new().unwrap();
    reporter_cmd(&dir).arg("--generate-final-report").assert().success();

    reporter_cmd(&dir)
        .arg("--send-to-slack")
        .assert()
        .success()
        .stderr(predicate::str::contains("No Slack webhook URL provided"));
}
