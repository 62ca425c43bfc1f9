use crate::{
    run, run_with_stdin, stderr, stdout, total_cost, GOAL_BOARD, ONE_MOVE_BOARD, SWAPPED_BOARD,
};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_solve_goal_board() {
    let output = run_with_stdin(&["solve", "-j", "1"], GOAL_BOARD);

    assert!(
        output.status.success(),
        "Command failed: {:?}\nstderr: {}",
        output.status,
        stderr(&output)
    );
    assert!(stdout(&output).contains("Found a solution!"));
    assert_eq!(total_cost(&output), Some(0));
}

#[test]
fn test_solve_one_move_board() {
    let output = run_with_stdin(&["solve", "-"], ONE_MOVE_BOARD);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(total_cost(&output), Some(1));
}

#[test]
fn test_solve_from_file() {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("one_move_board.txt");
    fs::write(&path, ONE_MOVE_BOARD).unwrap();

    let output = run(&["solve", "-j", "2", path.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(total_cost(&output), Some(1));
}

#[test]
fn test_solve_unsolvable_board() {
    let output = run_with_stdin(&["solve"], SWAPPED_BOARD);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("No solution found"));
    assert_eq!(total_cost(&output), None);
}

#[test]
fn test_solve_without_parity_check_hits_limit() {
    let output = run_with_stdin(
        &[
            "solve",
            "--no-solvability-check",
            "--max-expansions",
            "500",
            "-j",
            "2",
        ],
        SWAPPED_BOARD,
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("limit reached"));
}

#[test]
fn test_worker_counts_agree() {
    let scramble = run(&["scramble", "--moves", "20", "--seed", "17"]);
    assert!(scramble.status.success());
    let board = stdout(&scramble);

    let single = run_with_stdin(&["solve", "-j", "1"], &board);
    let multi = run_with_stdin(&["solve", "-j", "4"], &board);

    assert!(single.status.success(), "stderr: {}", stderr(&single));
    assert!(multi.status.success(), "stderr: {}", stderr(&multi));
    assert!(total_cost(&single).is_some());
    assert_eq!(total_cost(&single), total_cost(&multi));
}

#[test]
fn test_verbose_prints_statistics() {
    let output = run_with_stdin(&["solve", "-v", "-j", "1"], ONE_MOVE_BOARD);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("States expanded: 1"));
    assert!(out.contains("Workers: 1"));
}

#[test]
fn test_progress_lines() {
    let output = run_with_stdin(&["solve", "-j", "1", "--progress", "1"], ONE_MOVE_BOARD);

    assert!(output.status.success());
    assert!(stderr(&output).contains("[worker 0] 1 expanded"));
}

#[test]
fn test_weighted_manhattan() {
    let output = run_with_stdin(&["solve", "--weight", "10"], ONE_MOVE_BOARD);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(total_cost(&output), Some(1));
}

#[test]
fn test_oversized_weight_rejected() {
    let output = run_with_stdin(&["solve", "--weight", "4000000000"], ONE_MOVE_BOARD);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--weight 4000000000 is too large"));
}

#[test]
fn test_weight_rejected_for_misplaced() {
    let output = run_with_stdin(
        &["solve", "--heuristic", "misplaced", "--weight", "3"],
        ONE_MOVE_BOARD,
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--weight"));
}

#[test]
fn test_parse_errors_exit_with_failure() {
    let cases = [
        ("1 2 3", "expected 16 tokens"),
        ("1 2 3 4 5 6 7 8 9 10 11 12 13 14 x -", "neither a tile number"),
        ("1 2 3 4 5 6 7 8 9 10 11 12 13 14 16 -", "expected 1..=15"),
        ("1 1 3 4 5 6 7 8 9 10 11 12 13 14 15 -", "appears more than once"),
    ];

    for (board, message) in cases {
        let output = run_with_stdin(&["solve"], board);
        assert_eq!(output.status.code(), Some(1), "board: {}", board);
        let err = stderr(&output);
        assert!(err.contains("Invalid board"), "stderr: {}", err);
        assert!(err.contains(message), "stderr: {}", err);
    }
}

#[test]
fn test_missing_file() {
    let output = run(&["solve", "/nonexistent/board.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to read board file"));
}
