use crate::{run, run_with_stdin, stdout};

#[test]
fn test_scramble_is_reproducible() {
    let first = run(&["scramble", "--moves", "30", "--seed", "42"]);
    let second = run(&["scramble", "--moves", "30", "--seed", "42"]);

    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
    assert_eq!(stdout(&first).split_whitespace().count(), 16);
}

#[test]
fn test_scramble_output_is_solvable() {
    for seed in ["1", "2", "3"] {
        let scramble = run(&["scramble", "--moves", "50", "--seed", seed]);
        assert!(scramble.status.success());

        let check = run_with_stdin(&["check"], &stdout(&scramble));
        assert!(check.status.success(), "seed {}", seed);
        assert!(stdout(&check).contains("Solvable"));
    }
}

#[test]
fn test_scramble_zero_moves_is_goal() {
    let output = run(&["scramble", "--moves", "0"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 -"
    );
}
