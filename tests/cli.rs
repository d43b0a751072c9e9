use std::{
    fs,
    io::Write,
    process::{Command, Output, Stdio},
};

fn reckon(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reckon")).args(args)
                                              .env_remove("RUST_LOG")
                                              .output()
                                              .expect("spawn reckon")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_each_result() {
    let output = reckon(&["1 + 2 * 3", "(0.5 + 1.5) / 4"]);
    assert!(output.status.success(), "reckon failed: {}", stderr(&output));
    assert_eq!(stdout(&output), "1 + 2 * 3 = 7\n(0.5 + 1.5) / 4 = 0.5\n");
}

#[test]
fn precision_formats_results() {
    let output = reckon(&["--precision", "2", "--", "1/3", "-(2+3)"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1/3 = 0.33\n-(2+3) = -5.00\n");
}

#[test]
fn failure_sets_exit_status_and_continues() {
    let output = reckon(&["1/0", "1+1"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1+1 = 2\n");
    assert_eq!(stderr(&output), "1/0: Error at position 1: Division by zero.\n");
}

#[test]
fn abort_stops_at_first_failure() {
    let output = reckon(&["--abort", "1/0", "1+1"]);
    assert!(!output.status.success());
    assert!(!stdout(&output).contains("1+1"));
    assert!(stderr(&output).contains("Division by zero"));
}

#[test]
fn lenient_and_permissive_flags() {
    let strict = reckon(&["12.5.7"]);
    assert_eq!(strict.status.code(), Some(1));

    let lenient = reckon(&["--lenient", "12.5.7"]);
    assert!(lenient.status.success());
    assert_eq!(stdout(&lenient), "12.5.7 = 12.5\n");

    let rejected = reckon(&["--lenient", "3*."]);
    assert_eq!(rejected.status.code(), Some(1));

    let permissive = reckon(&["--permissive", "3*.", "12.5.7"]);
    assert!(permissive.status.success());
    assert_eq!(stdout(&permissive), "3*. = 0\n12.5.7 = 12.5\n");
}

#[test]
fn file_mode_skips_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expressions.txt");
    fs::write(&path, "1 + 2\n\n   \n2 * 3\n").unwrap();

    let output = reckon(&["--file", path.to_str().unwrap()]);
    assert!(output.status.success(), "reckon failed: {}", stderr(&output));
    assert_eq!(stdout(&output), "1 + 2 = 3\n2 * 3 = 6\n");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let output = reckon(&["--file", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to read the input file"));
}

#[test]
fn reads_standard_input_when_no_arguments() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_reckon")).env_remove("RUST_LOG")
                                                              .stdin(Stdio::piped())
                                                              .stdout(Stdio::piped())
                                                              .stderr(Stdio::piped())
                                                              .spawn()
                                                              .expect("spawn reckon");
    child.stdin
         .take()
         .unwrap()
         .write_all(b"4 - 1\n\n10 / 4\n")
         .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "reckon failed: {}", stderr(&output));
    assert_eq!(stdout(&output), "4 - 1 = 3\n10 / 4 = 2.5\n");
}
