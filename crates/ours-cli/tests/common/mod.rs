//! Shared test harness for ours-cli integration tests.
//!
//! Runs the compiled `ours` binary against fixture files in temporary
//! directories and captures stdout/stderr/exit code.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Captured output from running a command.
pub struct CommandResult {
    pub stdout: Vec<u8>,
    pub stderr: String,
    pub exit_code: i32,
}

/// Discover the path to the compiled `ours` binary.
pub fn ours_bin() -> PathBuf {
    let mut path = std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf();
    path.push("ours");
    path
}

/// Run the `ours` binary in `dir` with the given arguments and stdin bytes.
pub fn ours(dir: &Path, args: &[&str], stdin: &[u8]) -> CommandResult {
    let mut child = Command::new(ours_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ours");

    child
        .stdin
        .as_mut()
        .expect("stdin not piped")
        .write_all(stdin)
        .expect("failed to write stdin");

    let output = child.wait_with_output().expect("failed to wait for ours");
    CommandResult {
        stdout: output.stdout,
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}
