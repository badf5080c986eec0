mod a_star;
pub(crate) mod puzzle;

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use log::debug;

use crate::data::{MapCell, Pos};
use crate::level::Level;
use crate::map::GoalMap;
use crate::moves::Moves;
use crate::state::State;
use crate::Solve;

use self::a_star::SearchOutcome;
use self::puzzle::SokobanPuzzle;

pub use self::a_star::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    IncompleteBorder,
    UnreachableBoxes,
    UnreachableGoals,
    BoxesGoals,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::IncompleteBorder => write!(f, "Incomplete border"),
            SolverErr::UnreachableBoxes => write!(
                f,
                "Unreachable boxes - some boxes are not on goal but can't be reached"
            ),
            SolverErr::UnreachableGoals => write!(
                f,
                "Unreachable goals - some goals don't have a box but can't be reached"
            ),
            SolverErr::BoxesGoals => write!(f, "Different number of reachable boxes and goals"),
        }
    }
}

impl Error for SolverErr {}

/// How one search call ended. All three are ordinary results - only a
/// malformed level is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Moves),
    NoSolution,
    BudgetExceeded,
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
}

impl SolverOk {
    fn new(outcome: Outcome, stats: Stats) -> Self {
        Self { outcome, stats }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved(ref moves) => writeln!(f, "Solved: {} moves", moves.move_cnt())?,
            Outcome::NoSolution => writeln!(f, "No solution")?,
            Outcome::BudgetExceeded => writeln!(f, "Budget exceeded")?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, budget: Option<u64>) -> Result<SolverOk, SolverErr> {
        debug!("processing level");
        let processed = process_level(self)?;
        debug!("processed level");

        let puzzle = SokobanPuzzle::new(&processed.map);
        let (outcome, stats) = a_star::search(&puzzle, &processed.state, budget);
        let outcome = match outcome {
            SearchOutcome::Solved(actions) => Outcome::Solved(Moves::new(actions)),
            SearchOutcome::Exhausted => Outcome::NoSolution,
            SearchOutcome::OutOfBudget => Outcome::BudgetExceeded,
        };
        Ok(SolverOk::new(outcome, stats))
    }
}

/// Level sanity checks and normalization shared by solving and validation.
///
/// Flood-fills from the player to make sure the level is closed (otherwise
/// position arithmetic could leave the grid), rewrites unreachable floor to
/// walls, drops box/goal pairs sealed away from the player and checks the
/// remaining counts match.
pub(crate) fn process_level(level: &Level) -> Result<Level, SolverErr> {
    let grid = &level.map.grid;
    let mut to_visit = vec![level.state.player_pos];
    let mut visited = grid.create_scratchpad(false);

    while let Some(cur) = to_visit.pop() {
        visited[cur] = true;

        let (r, c) = (i32::from(cur.r), i32::from(cur.c));
        let neighbors = [(r + 1, c), (r - 1, c), (r, c + 1), (r, c - 1)];
        for &(nr, nc) in &neighbors {
            // this is the only place that needs to check bounds (using
            // signed types) - everything after is surrounded by walls
            if nr < 0 || nc < 0 || nr >= i32::from(grid.rows()) || nc >= i32::from(grid.cols()) {
                // we got out of bounds without hitting a wall
                return Err(SolverErr::IncompleteBorder);
            }

            let new_pos = Pos::new(nr as u8, nc as u8);
            if !visited[new_pos] && grid[new_pos] != MapCell::Wall {
                to_visit.push(new_pos);
            }
        }
    }

    // make sure all relevant game elements are reachable
    let mut reachable_boxes = Vec::new();
    for &pos in &level.state.boxes {
        if visited[pos] {
            reachable_boxes.push(pos);
        } else if !level.map.has_goal(pos) {
            return Err(SolverErr::UnreachableBoxes);
        }
    }
    let mut reachable_goals = Vec::new();
    for &pos in &level.map.goals {
        if visited[pos] {
            reachable_goals.push(pos);
        } else if !level.state.has_box(pos) {
            return Err(SolverErr::UnreachableGoals);
        }
    }

    if reachable_boxes.len() != reachable_goals.len() {
        return Err(SolverErr::BoxesGoals);
    }

    // make sure all unreachable cells are walls so code that iterates
    // through non-walls can skip the visited-check
    let mut processed_grid = grid.clone();
    for r in 0..processed_grid.rows() {
        for c in 0..processed_grid.cols() {
            let pos = Pos::new(r, c);
            if !visited[pos] {
                processed_grid[pos] = MapCell::Wall;
            }
        }
    }

    Ok(Level::new(
        GoalMap::new(processed_grid, reachable_goals),
        State::new(level.state.player_pos, reachable_boxes),
    ))
}
