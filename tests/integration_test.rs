//! Integration tests for the charge summation CLI.
//!
//! These tests run the actual binary against files in `tests/data`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given arguments and return stdout
fn run_summation(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("charge-summation").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_valid_charges() {
    let output = run_summation(&[&test_data_path("charges_valid.txt")]);
    assert_eq!(
        output,
        "The size of the file is 31; the summation is $1118.00.\nNo parse errors occurred.\n"
    );
}

#[test]
fn test_charges_with_errors() {
    let output = run_summation(&[&test_data_path("charges_errors.txt")]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        vec![
            "The size of the file is 51; the summation is $50.00.",
            "Parse errors occurred at the following locations - ",
            "Location: 2",
            "Location: 4",
        ]
    );
}

#[test]
fn test_empty_file() {
    let output = run_summation(&[&test_data_path("empty.txt")]);
    assert!(output.starts_with("The size of the file is 0; the summation is $0.00."));
    assert!(output.contains("No parse errors occurred."));
}

#[test]
fn test_csv_output() {
    let output = run_summation(&[&test_data_path("charges_errors.txt"), "--csv"]);
    assert_eq!(output, "bytes_read,sum,errors\n51,50.00,2;4\n");
}

#[test]
fn test_buffer_size_limits_input() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "$1.00$2.00$3.00").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    let output = run_summation(&[path, "--buffer-size", "10", "--csv"]);
    assert_eq!(output, "bytes_read,sum,errors\n10,3.00,\n");
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("charge-summation").unwrap();
    cmd.arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("was not found"));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("charge-summation").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"));
}

#[test]
fn test_unknown_option_error() {
    let mut cmd = Command::cargo_bin("charge-summation").unwrap();
    cmd.args([test_data_path("charges_valid.txt").as_str(), "--verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument '--verbose'"));
}

#[test]
fn test_descriptions_after_amounts_are_ignored() {
    let output = run_summation(&[&test_data_path("charges_described.txt"), "--csv"]);
    assert_eq!(output, "bytes_read,sum,errors\n30,17.34,\n");
}

#[test]
fn test_strict_rejects_descriptions() {
    let output = run_summation(&[
        &test_data_path("charges_described.txt"),
        "--csv",
        "--strict",
    ]);
    assert_eq!(output, "bytes_read,sum,errors\n30,0.00,1;2\n");
}
