use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn line_histogram() -> Command {
    Command::new(env!("CARGO_BIN_EXE_line_histogram"))
}

#[test]
fn in_place_rewrites_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "a\na\na\nb\nb\n").unwrap();

    line_histogram().arg("--in-place").arg(&path).assert().success().stdout("");

    assert_eq!(fs::read_to_string(&path).unwrap(), "3 a\n2 b\n");
}

#[test]
fn in_place_with_regions_keeps_surrounding_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");
    let text = "head\r\nx\r\ny\r\nx\r\ntail\r\n";
    fs::write(&path, text).unwrap();

    let start = text.find("x").unwrap();
    let end = text.find("tail").unwrap();
    line_histogram()
        .arg("-i")
        .arg(format!("--region={start}..{end}"))
        .arg(&path)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&path).unwrap(), "head\r\n2 x\r\n1 y\r\ntail\r\n");
}

#[test]
fn output_flag_leaves_source_alone() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "k\nk\n").unwrap();

    line_histogram()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&input).unwrap(), "k\nk\n");
    assert_eq!(fs::read_to_string(&output).unwrap(), "2 k\n");
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.txt");

    line_histogram()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn in_place_on_stdin_is_rejected() {
    line_histogram()
        .arg("--in-place")
        .write_stdin("a\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--in-place needs a file"));
}

#[test]
fn failed_region_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keep.txt");
    fs::write(&path, "a\nb\n").unwrap();

    line_histogram()
        .args(["-i", "-r", "0..100"])
        .arg(&path)
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
}
