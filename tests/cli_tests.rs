//! Integration tests for the tracequery CLI
//!
//! These tests run the tracequery binary against small edge lists.

mod common;

use common::{tracequery, with_sample, SAMPLE_TRACES};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    tracequery()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: tracequery"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("cheapest"));
}

#[test]
fn test_version_flag() {
    tracequery()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tracequery"));
}

// ============================================================================
// Standard report
// ============================================================================

#[test]
fn test_standard_report_from_stdin() {
    with_sample()
        .assert()
        .success()
        .stdout("9\n5\n13\n22\nNO SUCH TRACE\n2\n3\n9\n9\n7\n");
}

#[test]
fn test_report_subcommand_matches_default() {
    with_sample()
        .arg("report")
        .assert()
        .success()
        .stdout("9\n5\n13\n22\nNO SUCH TRACE\n2\n3\n9\n9\n7\n");
}

#[test]
fn test_standard_report_from_multiline_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("traces.txt");
    fs::write(&input, "AB5, BC4, CD8\nDC8, DE6,\nAD5, CE2, EB3, AE7\n").unwrap();

    tracequery()
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("9\n5\n13\n22\nNO SUCH TRACE\n"));
}

#[test]
fn test_input_from_environment() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("traces.txt");
    fs::write(&input, SAMPLE_TRACES).unwrap();

    tracequery()
        .env("TRACEQUERY_INPUT", &input)
        .args(["cheapest", "B", "B"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_report_json_format() {
    let output = with_sample()
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["query"], "cost of route A-B-C");
    assert_eq!(entries[0]["result"], 9);
    assert!(entries[4]["result"].is_null());
    assert_eq!(entries[9]["kind"], "count-under-cost");
    assert_eq!(entries[9]["result"], 7);
}

#[test]
fn test_report_records_format() {
    with_sample()
        .args(["--format", "records"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Q 5 kind=cost query=\"cost of route A-E-D\" result=none",
        ))
        .stdout(predicate::str::contains(
            "Q 8 kind=cheapest query=\"cheapest route A->C\" result=9",
        ));
}

#[test]
fn test_report_with_plan_file() {
    let dir = tempdir().unwrap();
    let plan = dir.path().join("plan.toml");
    fs::write(
        &plan,
        r#"
[[query]]
kind = "count-at-depth"
start = "A"
target = "C"
depth = 4

[[query]]
kind = "cost"
route = "A-E-D"
"#,
    )
    .unwrap();

    with_sample()
        .args(["report", "--plan"])
        .arg(&plan)
        .assert()
        .success()
        .stdout("3\nNO SUCH TRACE\n");
}

// ============================================================================
// Single queries
// ============================================================================

#[test]
fn test_cost_subcommand() {
    with_sample()
        .args(["cost", "A-E-B-C-D"])
        .assert()
        .success()
        .stdout("22\n");

    with_sample()
        .args(["cost", "AED"])
        .assert()
        .success()
        .stdout("NO SUCH TRACE\n");
}

#[test]
fn test_count_subcommands() {
    with_sample()
        .args(["count-returning", "C", "--max-depth", "3"])
        .assert()
        .success()
        .stdout("2\n");

    with_sample()
        .args(["count-at-depth", "A", "C", "--depth", "4"])
        .assert()
        .success()
        .stdout("3\n");

    with_sample()
        .args(["count-under-cost", "C", "C", "--limit", "30"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_cheapest_subcommand() {
    with_sample()
        .args(["cheapest", "A", "C"])
        .assert()
        .success()
        .stdout("9\n");
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_duplicate_trace_exit_code_3() {
    tracequery()
        .write_stdin("AB5, AB9")
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains("duplicate trace AB"));
}

#[test]
fn test_zero_cost_exit_code_3() {
    tracequery()
        .write_stdin("AB5, BC0")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid cost 0 for trace BC"));
}

#[test]
fn test_empty_input_exit_code_3() {
    tracequery()
        .write_stdin("")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no traces found"));
}

#[test]
fn test_unknown_start_node_exit_code_3() {
    with_sample()
        .args(["cheapest", "Z", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node: Z"));
}

#[test]
fn test_invalid_node_argument_exit_code_2() {
    with_sample()
        .args(["cheapest", "a", "B"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_route_exit_code_2() {
    with_sample()
        .args(["cost", "A-b-C"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid node"));
}

#[test]
fn test_missing_input_file_exit_code_1() {
    let dir = tempdir().unwrap();
    tracequery()
        .arg("--input")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .code(1);
}

#[test]
fn test_json_error_envelope() {
    tracequery()
        .args(["--format", "json"])
        .write_stdin("AB5, AB9")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"duplicate_edge\""));
}

#[test]
fn test_quiet_suppresses_error_message() {
    tracequery()
        .arg("--quiet")
        .write_stdin("AB5, AB9")
        .assert()
        .code(3)
        .stderr("");
}
