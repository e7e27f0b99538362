//! End-to-end tests for the socksum binary
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const SNAPSHOT: &str = "\
sockets: used 290
TCP: inuse 28 orphan 1 tw 10 alloc 32 mem 4
UDP: inuse 5 mem 3
UDPLITE: inuse 0
RAW: inuse 2
FRAG: inuse 0 memory 0
";

fn snapshot_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn socksum() -> Command {
    Command::cargo_bin("socksum").unwrap()
}

#[test]
fn raw_mode_passes_source_through_unchanged() {
    let file = snapshot_file(SNAPSHOT);

    // ERROR threshold keeps narration off stdout so only the report remains.
    socksum()
        .arg("--source")
        .arg(file.path())
        .args(["--log-level", "ERROR"])
        .assert()
        .success()
        .stdout(SNAPSHOT.to_string());
}

#[test]
fn json_mode_emits_the_fixed_shape() {
    let file = snapshot_file("sockets: used 12\nTCP: inuse 3 orphan 0 tw 0 alloc 3 mem 50\n");

    let assert = socksum()
        .arg("--source")
        .arg(file.path())
        .args(["--log-level", "ERROR", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["SocketsUsed"], "12");
    assert_eq!(value["TCP"]["inuse"], "3");
    assert_eq!(value["TCP"]["time_wait"], "0");
    assert_eq!(value["UDP"]["inuse"], "N/A");
    assert_eq!(value["UDPLITE"]["inuse"], "N/A");
    assert_eq!(value["RAW"]["inuse"], "N/A");
    assert_eq!(value["FRAG"]["memory"], "N/A");
}

#[test]
fn missing_source_fails_before_parsing() {
    socksum()
        .args(["--source", "/nonexistent/sockstat", "--json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found or not readable"));
}

#[test]
fn empty_source_is_fatal() {
    let file = snapshot_file("");

    socksum()
        .arg("--source")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No data received"));
}

#[test]
fn help_prints_usage_and_exits_zero() {
    socksum()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn unknown_flag_prints_usage_and_exits_nonzero() {
    socksum()
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_log_level_value_exits_nonzero() {
    socksum()
        .arg("--log-level")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn invalid_log_level_warns_and_falls_back() {
    let file = snapshot_file(SNAPSHOT);

    socksum()
        .arg("--source")
        .arg(file.path())
        .args(["--log-level", "verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Using default: INFO"))
        .stdout(predicate::str::contains("sockets: used 290"));
}

#[test]
fn info_narration_reaches_stdout_not_stderr() {
    let file = snapshot_file(SNAPSHOT);

    socksum()
        .arg("--source")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading socket statistics"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn output_flag_writes_report_to_file() {
    let file = snapshot_file(SNAPSHOT);
    let out_dir = tempfile::tempdir().unwrap();
    let out_path = out_dir.path().join("report.json");

    socksum()
        .arg("--source")
        .arg(file.path())
        .args(["--log-level", "ERROR", "--json"])
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["SocketsUsed"], "290");
    assert_eq!(value["FRAG"]["memory"], "0");
}
