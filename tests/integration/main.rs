mod check_test;
mod scramble_test;
mod solve_test;

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub const GOAL_BOARD: &str = "1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 15 -\n";
pub const ONE_MOVE_BOARD: &str = "1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 - 15\n";
pub const SWAPPED_BOARD: &str = "1 2 3 4\n5 6 7 8\n9 10 11 12\n13 15 14 -\n";

pub fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_slidesolve"))
}

/// Run the binary with `args`, feeding `stdin` to it.
pub fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(binary())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute slidesolve");

    // The binary may exit before reading stdin (e.g. on a bad flag)
    let _ = child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes());

    child.wait_with_output().expect("Failed to wait on slidesolve")
}

pub fn run(args: &[&str]) -> Output {
    Command::new(binary())
        .args(args)
        .output()
        .expect("Failed to execute slidesolve")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse the "Total cost: N" line out of a solve run
pub fn total_cost(output: &Output) -> Option<u32> {
    stdout(output)
        .lines()
        .find_map(|line| line.strip_prefix("Total cost: "))
        .and_then(|cost| cost.trim().parse().ok())
}
