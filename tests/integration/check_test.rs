use crate::{run_with_stdin, stdout, GOAL_BOARD, SWAPPED_BOARD};

#[test]
fn test_check_goal() {
    let output = run_with_stdin(&["check"], GOAL_BOARD);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Inversions: 0"));
    assert!(out.contains("Blank row: 3"));
    assert!(out.contains("Solvable"));
}

#[test]
fn test_check_swapped_tiles() {
    let output = run_with_stdin(&["check"], SWAPPED_BOARD);

    assert_eq!(output.status.code(), Some(2));
    let out = stdout(&output);
    assert!(out.contains("Inversions: 1"));
    assert!(out.contains("Unsolvable"));
}

#[test]
fn test_check_rejects_bad_input() {
    let output = run_with_stdin(&["check"], "not a board");

    assert_eq!(output.status.code(), Some(1));
}
