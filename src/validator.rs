use std::fmt::{self, Display, Formatter};

use crate::level::Level;
use crate::moves::Moves;
use crate::solver::puzzle::{Puzzle, SokobanPuzzle};
use crate::solver::{process_level, SolverErr};
use crate::state::State;
use crate::Validate;

/// What replaying a move sequence from the initial state showed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    ValidSolution,
    /// Every move was legal but the final state is not solved.
    ValidButIncomplete,
    /// The move at this index is not legal in the state reached so far.
    IllegalMoveAt(usize),
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Verdict::ValidSolution => write!(f, "valid solution"),
            Verdict::ValidButIncomplete => {
                write!(f, "legal moves but the final state is not solved")
            }
            Verdict::IllegalMoveAt(index) => write!(f, "illegal move at index {}", index),
        }
    }
}

impl Validate for Level {
    fn validate(&self, moves: &Moves) -> Result<Verdict, SolverErr> {
        let processed = process_level(self)?;
        let puzzle = SokobanPuzzle::new(&processed.map);
        Ok(replay(&puzzle, &processed.state, moves))
    }
}

/// Replays `moves` one by one, asking the move generator whether each is
/// legal rather than just applying it mechanically - a step letter where a
/// push actually happens (or the other way around) is rejected too.
pub(crate) fn replay(puzzle: &SokobanPuzzle<'_>, initial: &State, moves: &Moves) -> Verdict {
    let mut state = initial.clone();
    for (index, &mov) in moves.iter().enumerate() {
        if !puzzle.actions(&state).contains(&mov) {
            return Verdict::IllegalMoveAt(index);
        }
        state = puzzle.result(&state, mov);
    }
    if puzzle.is_goal(&state) {
        Verdict::ValidSolution
    } else {
        Verdict::ValidButIncomplete
    }
}
