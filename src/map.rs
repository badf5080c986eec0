use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Contents {
    Empty,
    Box,
    Player,
}

/// The fixed part of a level - walls and goals never change while solving.
#[derive(Clone)]
pub(crate) struct GoalMap {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) goals: Vec<Pos>,
}

impl GoalMap {
    pub(crate) fn new(grid: Vec2d<MapCell>, mut goals: Vec<Pos>) -> Self {
        // sorted so comparing against a state's sorted boxes is set equality
        goals.sort_unstable();
        GoalMap { grid, goals }
    }

    pub(crate) fn has_goal(&self, pos: Pos) -> bool {
        self.goals.binary_search(&pos).is_ok()
    }

    pub(crate) fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, state)
    }

    fn write_with_state(&self, state: &State, f: &mut Formatter<'_>) -> fmt::Result {
        let mut state_grid = self.grid.create_scratchpad(Contents::Empty);
        for &b in &state.boxes {
            state_grid[b] = Contents::Box;
        }
        state_grid[state.player_pos] = Contents::Player;

        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                let pos = Pos::new(r, c);
                Self::write_cell(self.grid[pos], state_grid[pos], f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        match (cell, contents) {
            (MapCell::Wall, _) => write!(f, "#"),
            (MapCell::Empty, Contents::Empty) => write!(f, " "),
            (MapCell::Empty, Contents::Box) => write!(f, "$"),
            (MapCell::Empty, Contents::Player) => write!(f, "@"),
            (MapCell::Goal, Contents::Empty) => write!(f, "."),
            (MapCell::Goal, Contents::Box) => write!(f, "X"),
            (MapCell::Goal, Contents::Player) => write!(f, "+"),
        }
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

pub(crate) struct MapFormatter<'a> {
    map: &'a GoalMap,
    state: &'a State,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(map: &'a GoalMap, state: &'a State) -> Self {
        Self { map, state }
    }
}

impl Display for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.map.write_with_state(self.state, f)
    }
}

impl Debug for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::level::Level;

    #[test]
    fn formatting_level() {
        let text = "\
#####
#@$.#
#####
";
        let level: Level = text.parse().unwrap();
        assert_eq!(level.to_string(), text);
    }

    #[test]
    fn formatting_composed_cells() {
        let text = "\
######
#+X$.#
######
";
        let level: Level = text.parse().unwrap();
        assert_eq!(level.to_string(), text);
    }

    #[test]
    fn formatting_map_without_state() {
        let text = "\
#####
#@$.#
#####
";
        let level: Level = text.parse().unwrap();
        assert_eq!(level.map.to_string(), "#####\n#  .#\n#####\n");
    }
}
