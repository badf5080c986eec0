use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::data::{MapCell, Pos, MAX_SIZE};
use crate::level::Level;
use crate::map::GoalMap;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    TooLarge,
    MultiplePlayers,
    NoPlayer,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Map larger than 255 rows/columns"),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
        }
    }
}

impl std::error::Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the level format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format):
/// `#` wall, `@` player, `$` box, `.` goal, `X`/`*` box on goal, `+` player
/// on goal, space (or `-`/`_`) floor.
///
/// Rows shorter than the widest row are right-padded with walls. That is a
/// deliberate normalization, not an error - plenty of level files in the
/// wild have ragged borders.
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n');

    let mut grid = Vec::new();
    let mut goals = Vec::new();
    let mut boxes = Vec::new();
    let mut player_pos = None;

    for (r, line) in level.lines().enumerate() {
        if r >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        let mut line_cells = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            if c >= MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let pos = Pos::new(r as u8, c as u8);

            let cell = match cur_char {
                '#' => MapCell::Wall,
                '@' => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                    MapCell::Empty
                }
                '+' => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                    goals.push(pos);
                    MapCell::Goal
                }
                '$' => {
                    boxes.push(pos);
                    MapCell::Empty
                }
                'X' | '*' => {
                    boxes.push(pos);
                    goals.push(pos);
                    MapCell::Goal
                }
                '.' => {
                    goals.push(pos);
                    MapCell::Goal
                }
                ' ' | '-' | '_' => MapCell::Empty,
                _ => return Err(ParserErr::Pos(r, c)),
            };
            line_cells.push(cell);
        }
        grid.push(line_cells);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;

    let max_cols = grid.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut padded = 0;
    for row in &mut grid {
        if row.len() < max_cols {
            row.resize(max_cols, MapCell::Wall);
            padded += 1;
        }
    }
    if padded > 0 {
        debug!("padded {} ragged rows with walls", padded);
    }

    let grid = Vec2d::new(&grid);
    Ok(Level::new(
        GoalMap::new(grid, goals),
        State::new(player_pos, boxes),
    ))
}
