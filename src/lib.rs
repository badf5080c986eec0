// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod level;
pub mod moves;
pub mod solution_formatter;
pub mod solver;
pub mod validator;

mod data;
mod fs;
mod map;
mod parser;
mod state;
mod vec2d;

pub use crate::parser::ParserErr;

use std::error::Error;

use crate::level::Level;
use crate::moves::Moves;
use crate::solver::{SolverErr, SolverOk};
use crate::validator::Verdict;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    /// Runs the search, optionally bounded to expanding at most `budget`
    /// states.
    fn solve(&self, budget: Option<u64>) -> Result<SolverOk, SolverErr>;
}

pub trait Validate {
    /// Replays `moves` from the initial state, independently of how they
    /// were produced.
    fn validate(&self, moves: &Moves) -> Result<Verdict, SolverErr>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::solver::Outcome;

    #[test]
    fn bundled_levels_solve_and_replay() {
        let solvable = [
            "levels/simplest.txt",
            "levels/one-way.txt",
            "levels/two-boxes.txt",
            "levels/microban-1.txt",
            "levels/solved.txt",
            "levels/enclosed.txt",
        ];
        for path in &solvable {
            let level = path.load_level().unwrap();
            let solution = level.solve(None).unwrap();
            match solution.outcome {
                Outcome::Solved(ref moves) => {
                    // whatever the search produced must replay cleanly
                    assert_eq!(
                        level.validate(moves).unwrap(),
                        Verdict::ValidSolution,
                        "replay failed for {}",
                        path
                    );
                }
                ref other => panic!("{} should be solvable, got {:?}", path, other),
            }
        }
    }

    #[test]
    fn bundled_unsolvable_level() {
        let level = "levels/no-solution.txt".load_level().unwrap();
        assert_eq!(level.solve(None).unwrap().outcome, Outcome::NoSolution);
    }

    #[test]
    fn solving_twice_gives_identical_sequences() {
        let level = "levels/microban-1.txt".load_level().unwrap();
        let first = level.solve(None).unwrap();
        let second = level.solve(None).unwrap();
        assert_eq!(first.outcome, second.outcome);
    }
}
