// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Tests of the `calc` binary: arguments, stdin/file input and exit status.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn calc(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_calc"))
        .args(args)
        .env_remove("CALC_LOG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start calc");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

/// Write `contents` to a fresh file under the target temp dir.
fn script(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn interactive_session_shows_prompts() {
    let output = calc(&[], "1 + 1\nlet sq(x) = x*x;\nsq(3)\n");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "> =    2\n> Defined sq\n> =    9\n> \n"
    );
}

#[test]
fn quiet_flag_hides_prompts() {
    let output = calc(&["--quiet"], "2 * 21\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "=   42\n");
}

#[test]
fn diagnostics_go_to_stderr() {
    let output = calc(&["-q"], "nope(1)\n1 +\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "=    0\n");
    assert_eq!(
        stderr(&output),
        "1: error: call to undefined function nope\n\
         2: error: syntax error: expected expression, found end of line\n"
    );
}

#[test]
fn runs_a_file() {
    let path = script("runs_a_file.calc", "x = 2\nx * 8\n");
    let output = calc(&[path.to_str().unwrap()], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "=    2\n=   16\n");
}

#[test]
fn debug_flag_dumps_trees() {
    let path = script("debug_flag.calc", "-4\n");
    let output = calc(&["--debug", path.to_str().unwrap()], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "unop M\n  number    4\n=   -4\n");
}

#[test]
fn missing_file_fails() {
    let output = calc(&["/definitely/not/here.calc"], "");
    assert!(!output.status.success());
    assert!(
        stderr(&output).starts_with("error: cannot read '/definitely/not/here.calc'"),
        "{}",
        stderr(&output)
    );
}

#[test]
fn unknown_option_fails_with_usage() {
    let output = calc(&["--frobnicate"], "");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown option '--frobnicate'"));
    assert!(stdout(&output).contains("Usage: calc"));
}

#[test]
fn help_and_version() {
    let help = calc(&["--help"], "");
    assert!(help.status.success());
    assert!(stdout(&help).contains("--quiet"));

    let version = calc(&["-V"], "");
    assert!(version.status.success());
    assert_eq!(
        stdout(&version),
        format!("calc {}\n", env!("CARGO_PKG_VERSION"))
    );
}
