//! Command-line behaviour: input fallback, diagnostics, output formats.
//!
//! Every test runs the binary inside a scratch directory so a stray
//! `input.txt` in the working tree cannot change the result.

use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::process;
use tempfile::TempDir;

fn giftshop(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("giftshop").expect("binary should build");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_input_file_uses_default_input() {
    let dir = tempfile::tempdir().unwrap();

    giftshop(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The file input.txt does not exist, so we will use the default input.",
        ))
        .stdout(predicate::str::contains("Part 1: sum of invalid IDs is 1227775554"))
        .stdout(predicate::str::contains("Part 2: sum of invalid IDs is 4174379265"));
}

#[test]
fn empty_input_file_uses_default_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), "  \n").unwrap();

    giftshop(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("is empty, so we will use the default input."))
        .stdout(predicate::str::contains("Part 1: sum of invalid IDs is 1227775554"));
}

#[test]
fn reads_input_file_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), "110-112,\n121210-121214\n").unwrap();

    giftshop(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("The file input.txt has been read successfully."))
        .stdout(predicate::str::contains("Part 1: sum of invalid IDs is 0"))
        .stdout(predicate::str::contains("Part 2: sum of invalid IDs is 121323"));
}

#[test]
fn malformed_ranges_are_reported_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ranges.txt"), "11-11, abc-def, 50-hashdahs").unwrap();

    giftshop(&dir)
        .args(["--input", "ranges.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Part 1: sum of invalid IDs is 11"))
        .stdout(predicate::str::contains("Part 2: sum of invalid IDs is 11"))
        .stderr(predicate::str::contains("abc-def"))
        .stderr(predicate::str::contains("50-hashdahs"));
}

#[test]
fn input_notice_precedes_skipped_token_warnings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ranges.txt"), "11-11, abc-def").unwrap();

    // Both streams share one file so the write order is preserved
    let combined_path = dir.path().join("combined.log");
    let combined = fs::File::create(&combined_path).unwrap();
    let status = process::Command::cargo_bin("giftshop")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["--input", "ranges.txt"])
        .stdout(combined.try_clone().unwrap())
        .stderr(combined)
        .status()
        .unwrap();
    assert!(status.success());

    let output = fs::read_to_string(&combined_path).unwrap();
    let notice = output.find("The file ranges.txt has been read successfully.").unwrap();
    let warning = output.find("abc-def").unwrap();
    let report = output.find("Part 1: sum of invalid IDs is 11").unwrap();
    assert!(notice < warning, "notice should come first:\n{output}");
    assert!(warning < report, "warning should precede the report:\n{output}");
}

#[test]
fn reads_ranges_from_stdin() {
    let dir = tempfile::tempdir().unwrap();

    giftshop(&dir)
        .args(["--input", "-"])
        .write_stdin("12-10")
        .assert()
        .success()
        .stdout(predicate::str::contains("Part 1: sum of invalid IDs is 11"))
        .stdout(predicate::str::contains("Part 2: sum of invalid IDs is 11"));
}

#[test]
fn json_output_is_machine_readable() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), "10-13, 1210-1215, 100-105, junk").unwrap();

    let output = giftshop(&dir)
        .args(["--output-format", "json", "--parallel"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["totals"]["double_repetition"], 1223);
    assert_eq!(value["origin"]["kind"], "file");
    assert_eq!(value["stats"]["ranges_scanned"], 3);
    assert_eq!(value["skipped"][0]["token"], "junk");
}

#[test]
fn unknown_output_format_falls_back_to_text() {
    let dir = tempfile::tempdir().unwrap();

    giftshop(&dir)
        .args(["--output-format", "xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Part 1: sum of invalid IDs is 1227775554"))
        .stderr(predicate::str::contains("unknown output format 'xml'"));
}

#[test]
fn config_file_sets_input_and_fallback() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("giftshop.yaml"),
        "input_file: missing.txt\nfallback_input: \"12-10\"\n",
    )
    .unwrap();

    giftshop(&dir)
        .args(["--config", "giftshop.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The file missing.txt does not exist"))
        .stdout(predicate::str::contains("Part 1: sum of invalid IDs is 11"));
}

#[test]
fn print_config_emits_yaml() {
    let dir = tempfile::tempdir().unwrap();

    giftshop(&dir)
        .args(["--print-config", "--parallel", "--input", "ranges.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("input_file: ranges.txt"))
        .stdout(predicate::str::contains("parallel: true"));
}

#[test]
fn unreadable_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("input.txt")).unwrap();

    giftshop(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn profile_prints_step_summary() {
    let dir = tempfile::tempdir().unwrap();

    giftshop(&dir)
        .arg("--profile")
        .assert()
        .success()
        .stderr(predicate::str::contains("Performance Summary:"))
        .stderr(predicate::str::contains("Load input"))
        .stderr(predicate::str::contains("Scan ranges"))
        .stderr(predicate::str::contains("Total"));
}
