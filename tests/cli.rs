use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

fn cmd() -> Command {
    Command::cargo_bin("grload").unwrap()
}

#[test]
fn literal_wkt_prints_transcript() {
    cmd()
        .arg("POINT(1 2)")
        .assert()
        .success()
        .stdout(contains("-- 1 WKT+ *APrjPC --\nPOINT(1 2)\n"));
}

#[test]
fn wkb_literal_is_base64_in_transcript() {
    cmd()
        .args(["--prj", "EPSG:4326", "0101000000000000000000F03F0000000000000040"])
        .assert()
        .success()
        .stdout(contains("-- 1 WKB+ EPSG:4326 [.base64] --"))
        .stdout(contains("AQEAAAAAAAAAAADwPwAAAAAAAABA"));
}

#[test]
fn bad_hex_fails_fast() {
    cmd()
        .arg("01ZZ")
        .assert()
        .failure()
        .stderr(contains("invalid hex payload"));
}

#[test]
fn self_test_file_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.txt");
    fs::write(&path, "# points\nPOINT(1 2)\n\n!0100ZZ\n0xDEADBEEF\n").unwrap();

    cmd()
        .arg("--test")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Test   2 0100ZZ"))
        .stdout(contains("(failed as expected)"))
        .stdout(contains(" RUN: 3\nPASS: 3\nFAIL: 0"))
        .stdout(contains("-- 1").not());
}

#[test]
fn self_test_failure_sets_exit_code() {
    cmd()
        .args(["--test", "!POINT(1 2)"])
        .assert()
        .failure()
        .stdout(contains("FAIL (expected to fail)"))
        .stderr(contains("1 of 1 tests failed"));
}

#[test]
fn stop_on_failure_skips_remaining_sources() {
    let dir = tempfile::tempdir().unwrap();
    let transcript = dir.path().join("out.txt");

    cmd()
        .args(["--test", "--stop-on-failure", "0011", "01Z", "POINT(3 4)"])
        .arg("-o")
        .arg(&transcript)
        .assert()
        .failure()
        .stdout(contains("POINT(3 4)").not())
        .stderr(contains("Stopped on first failure"));

    let written = fs::read_to_string(&transcript).unwrap();
    assert!(written.contains("-- 1 WKB+"));
    assert!(!written.contains("POINT(3 4)"));
}

#[test]
fn directory_sources_and_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let cases = dir.path().join("cases");
    fs::create_dir(&cases).unwrap();
    fs::write(cases.join("a.txt"), "POINT(1 2)\n").unwrap();
    fs::write(cases.join("b.txt"), "{\"type\":\"Point\",\"coordinates\":[1,2]}\n!01Q\n").unwrap();
    let report = dir.path().join("report.json");

    cmd()
        .arg("--test")
        .arg("--report")
        .arg(&report)
        .arg(&cases)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["RUN"], 3);
    assert_eq!(json["PASS"], 3);
    assert_eq!(json["FAIL"], 0);
}

#[test]
fn stop_on_failure_requires_test() {
    cmd().args(["--stop-on-failure", "POINT(1 2)"]).assert().failure();
}
