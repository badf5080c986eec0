use assert_cmd::prelude::*;
use std::process::Command;

// stderr is not asserted anywhere - the logger writes timing there

#[test]
fn run_solvable_level() {
    let output = r"Solving levels/simplest.txt...
Solution: R
Moves: 1
Pushes: 1
Replay check: valid solution
States created total: 2
Unique visited total: 2
Reached duplicates total: 0
Created but not reached total: 0

Depth          Created        Unique         Duplicates     Unknown (not reached)
0:             1              1              0              0
1:             1              1              0              0
";

    Command::main_binary()
        .unwrap()
        .arg("levels/simplest.txt")
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn run_unsolvable_level() {
    let output = r"Solving levels/no-solution.txt...
No solution
States created total: 1
Unique visited total: 1
Reached duplicates total: 0
Created but not reached total: 0

Depth          Created        Unique         Duplicates     Unknown (not reached)
0:             1              1              0              0
";

    Command::main_binary()
        .unwrap()
        .arg("levels/no-solution.txt")
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn run_with_exhausted_budget() {
    let output = r"Solving levels/simplest.txt...
Search budget exceeded
States created total: 1
Unique visited total: 1
Reached duplicates total: 0
Created but not reached total: 0

Depth          Created        Unique         Duplicates     Unknown (not reached)
0:             1              1              0              0
";

    Command::main_binary()
        .unwrap()
        .arg("--max-nodes")
        .arg("0")
        .arg("levels/simplest.txt")
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn run_solved_level_prints_empty_solution() {
    // note the trailing space after "Solution:" - the sequence is empty
    let output = "Solving levels/solved.txt...\nSolution: \nMoves: 0
Pushes: 0
Replay check: valid solution
States created total: 1
Unique visited total: 1
Reached duplicates total: 0
Created but not reached total: 0

Depth          Created        Unique         Duplicates     Unknown (not reached)
0:             1              1              0              0
";

    Command::main_binary()
        .unwrap()
        .arg("levels/solved.txt")
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn run_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("levels/does-not-exist.txt")
        .assert()
        .failure();
}

#[test]
fn run_bad_budget_value() {
    Command::main_binary()
        .unwrap()
        .arg("--max-nodes")
        .arg("lots")
        .arg("levels/simplest.txt")
        .assert()
        .failure();
}
