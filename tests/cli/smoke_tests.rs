use assert_cmd::Command;
use predicates::prelude::*;

fn line_histogram() -> Command {
    Command::new(env!("CARGO_BIN_EXE_line_histogram"))
}

#[test]
fn shows_help() {
    line_histogram()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("line_histogram"))
        .stdout(predicate::str::contains("--region"));
}

#[test]
fn shows_version() {
    line_histogram()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn transforms_stdin_to_stdout() {
    line_histogram()
        .write_stdin("b\na\nb\n")
        .assert()
        .success()
        .stdout("2 b\n1 a\n");
}

#[test]
fn keeps_crlf_and_missing_trailing_break() {
    line_histogram()
        .arg("-")
        .write_stdin("x\r\ny\r\nx")
        .assert()
        .success()
        .stdout("2 x\r\n1 y");
}

#[test]
fn empty_input_gives_empty_output() {
    line_histogram().write_stdin("").assert().success().stdout("");
}

#[test]
fn pads_counts_to_widest() {
    let input = "hot\n".repeat(11) + "cold\n";
    line_histogram()
        .write_stdin(input)
        .assert()
        .success()
        .stdout("11 hot\n 1 cold\n");
}

#[test]
fn regions_only_touch_selected_text() {
    // "keep\n" is bytes 0..5, the rest is the selection.
    line_histogram()
        .args(["--region", "5.."])
        .write_stdin("keep\nz\ny\nz\n")
        .assert()
        .success()
        .stdout("keep\n2 z\n1 y\n");
}

#[test]
fn overlapping_regions_fail_without_output() {
    line_histogram()
        .args(["-r", "0..4,2..6"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("overlap"));
}

#[test]
fn region_past_end_fails() {
    line_histogram()
        .args(["-r", "0..99"])
        .write_stdin("short\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("past the document length"));
}

#[test]
fn malformed_region_is_a_usage_error() {
    line_histogram()
        .args(["--region", "1-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected START..END"));
}

#[test]
fn invalid_utf8_is_reported() {
    line_histogram()
        .write_stdin(vec![0x61u8, 0xff, 0x0a])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    line_histogram()
        .arg("-v")
        .env_remove("LINE_HISTOGRAM_LOG")
        .write_stdin("q\nq\n")
        .assert()
        .success()
        .stdout("2 q\n")
        .stderr(predicate::str::contains("distinct"));
}

#[test]
fn quiet_suppresses_logs() {
    line_histogram()
        .arg("-q")
        .env_remove("LINE_HISTOGRAM_LOG")
        .write_stdin("q\nq\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
