//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `numrs` binary to verify that
//! argument parsing, help text, and error handling work end-to-end.

use assert_cmd::Command;
use numrs::NdArray;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("numrs").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("numrs"));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_on_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("values.txt");
    std::fs::write(&path, "1 2 3\n4 5 6\n").unwrap();

    cmd()
        .args(["stats", path.to_str().unwrap(), "--sep", "space", "--dtype", "i32"])
        .args(["--shape", "2,3", "--axis", "col"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sum: [[6, 15]]"))
        .stdout(predicate::str::contains("max: [[3, 6]]"));
}

#[test]
fn stats_on_binary_dump() {
    let dir = tempfile::tempdir().unwrap();
    let written = NdArray::from_vec(vec![5.0f64, 3.0, 1.0, 4.0, 2.0])
        .dump(dir.path().join("values"))
        .unwrap();

    cmd()
        .args(["stats", written.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("median: [[3.0000]]"))
        .stdout(predicate::str::contains("sum: [[15.0000]]"));
}

#[test]
fn stats_nonexistent_file_errors() {
    cmd()
        .args(["stats", "/nonexistent/values.bin"])
        .assert()
        .failure();
}

#[test]
fn stats_rejects_unknown_dtype() {
    cmd()
        .args(["stats", "values.bin", "--dtype", "c64"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("c64"));
}

// ---------------------------------------------------------------------------
// convert
// ---------------------------------------------------------------------------

#[test]
fn convert_text_to_binary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("values.txt");
    std::fs::write(&input, "7\t8\t9").unwrap();
    let output = dir.path().join("values");

    cmd()
        .args(["convert", input.to_str().unwrap(), output.to_str().unwrap()])
        .args(["--dtype", "i64", "--from-sep", "tab"])
        .assert()
        .success();

    let loaded: NdArray<i64> = numrs::load(dir.path().join("values.bin")).unwrap();
    assert_eq!(loaded.to_vec(), vec![7, 8, 9]);
}
