use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::map::{GoalMap, MapFormatter};
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::state::State;

/// A parsed level - immutable map plus the starting state.
#[derive(Clone)]
pub struct Level {
    pub(crate) map: GoalMap,
    pub(crate) state: State,
}

impl Level {
    pub(crate) fn new(map: GoalMap, state: State) -> Self {
        Level { map, state }
    }

    /// Renders the board after each move of `moves` (after each push only
    /// unless `include_steps`).
    pub fn format_solution<'a>(&'a self, moves: &'a Moves, include_steps: bool) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.map, &self.state, moves, include_steps)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(&self.map, &self.state))
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
