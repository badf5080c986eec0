use std::hash::Hash;

use crate::data::{MapCell, DIRECTIONS};
use crate::map::GoalMap;
use crate::moves::Move;
use crate::state::State;

/// The capability set the search driver needs from a puzzle. Everything is
/// a pure function of the state and whatever immutable context the
/// implementor carries - the driver never sees the map itself.
pub(crate) trait Puzzle {
    type State: Clone + Eq + Hash;
    type Action: Copy;

    /// Legal actions from `state`, in a fixed order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state `action` leads to. Only defined for actions returned by
    /// [`actions`](Puzzle::actions) for this exact state.
    fn result(&self, state: &Self::State, action: Self::Action) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated remaining cost. Must be zero exactly on goal states.
    fn heuristic(&self, state: &Self::State) -> u32;
}

/// Classic Sokoban rules over a [`GoalMap`] passed in as explicit context,
/// so solving is reentrant and testable without any shared globals.
pub(crate) struct SokobanPuzzle<'a> {
    map: &'a GoalMap,
}

impl<'a> SokobanPuzzle<'a> {
    pub(crate) fn new(map: &'a GoalMap) -> Self {
        SokobanPuzzle { map }
    }
}

impl Puzzle for SokobanPuzzle<'_> {
    type State = State;
    type Action = Move;

    fn actions(&self, state: &State) -> Vec<Move> {
        let mut moves = Vec::new();
        for &dir in &DIRECTIONS {
            let dest = state.player_pos + dir;
            if self.map.grid[dest] == MapCell::Wall {
                continue;
            }
            if state.has_box(dest) {
                // pushing relocates the box one cell further in the same
                // direction, so that cell must be free as well
                let push_dest = dest + dir;
                if self.map.grid[push_dest] != MapCell::Wall && !state.has_box(push_dest) {
                    moves.push(Move::new(dir, true));
                }
            } else {
                moves.push(Move::new(dir, false));
            }
        }
        moves
    }

    fn result(&self, state: &State, mov: Move) -> State {
        let new_player_pos = state.player_pos + mov.dir;
        let mut new_boxes = state.boxes.clone();
        if mov.is_push {
            let i = new_boxes
                .binary_search(&new_player_pos)
                .expect("push move must have a box in front of the player");
            new_boxes[i] = new_player_pos + mov.dir;
        }
        State::new(new_player_pos, new_boxes)
    }

    fn is_goal(&self, state: &State) -> bool {
        // both sides are canonically sorted, so this is set equality
        state.boxes == self.map.goals
    }

    /// Sum of Manhattan distances after greedily zipping boxes that are not
    /// on a goal with goals that have no box, both in row-major order.
    ///
    /// This is not a minimum-cost assignment, so the estimate can exceed
    /// the true remaining cost and solutions are not guaranteed to be
    /// move-optimal.
    fn heuristic(&self, state: &State) -> u32 {
        let mut free_goals = self
            .map
            .goals
            .iter()
            .filter(|&&goal| !state.has_box(goal));

        let mut total = 0;
        for &box_pos in state.boxes.iter().filter(|&&b| !self.map.has_goal(b)) {
            let &goal = free_goals
                .next()
                .expect("as many unfilled goals as misplaced boxes");
            total += box_pos.dist(goal);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dir;
    use crate::level::Level;

    fn parse(text: &str) -> Level {
        text.parse().unwrap()
    }

    #[test]
    fn walk_and_push_disambiguation() {
        let level = parse(
            r"
#####
#@$ #
#   #
#####
",
        );
        let puzzle = SokobanPuzzle::new(&level.map);
        let actions = puzzle.actions(&level.state);
        // up and left are walls, down is a walk, right pushes the box
        assert_eq!(
            actions,
            vec![Move::new(Dir::Down, false), Move::new(Dir::Right, true)]
        );
    }

    #[test]
    fn push_blocked_by_wall_and_box() {
        let level = parse(
            r"
######
#@$$ #
#    #
##$###
######
",
        );
        let puzzle = SokobanPuzzle::new(&level.map);
        let actions = puzzle.actions(&level.state);
        // right would push one box into another, so only the walk remains
        assert_eq!(actions, vec![Move::new(Dir::Down, false)]);

        // the box below is wedged against the bottom wall
        let down = puzzle.result(&level.state, actions[0]);
        let beside_box = puzzle.result(&down, Move::new(Dir::Right, false));
        assert!(!puzzle
            .actions(&beside_box)
            .contains(&Move::new(Dir::Down, true)));
    }

    #[test]
    fn pushing_relocates_exactly_one_box() {
        let level = parse(
            r"
######
#@$ .#
# $  #
######
",
        );
        let puzzle = SokobanPuzzle::new(&level.map);
        let push = Move::new(Dir::Right, true);
        assert!(puzzle.actions(&level.state).contains(&push));

        let next = puzzle.result(&level.state, push);
        assert_eq!(next.boxes.len(), level.state.boxes.len());
        assert!(next.has_box(crate::data::Pos::new(1, 3)));
        assert!(next.has_box(crate::data::Pos::new(2, 2)));
        assert_eq!(next.player_pos, crate::data::Pos::new(1, 2));
    }

    #[test]
    fn goal_test_is_order_independent() {
        let level = parse(
            r"
######
#@X X#
######
",
        );
        let puzzle = SokobanPuzzle::new(&level.map);
        assert!(puzzle.is_goal(&level.state));

        use crate::data::Pos;
        let shuffled = State::new(
            level.state.player_pos,
            vec![Pos::new(1, 4), Pos::new(1, 2)],
        );
        assert!(puzzle.is_goal(&shuffled));
    }

    #[test]
    fn heuristic_zero_exactly_on_goal_states() {
        let solved = parse(
            r"
######
#@X X#
######
",
        );
        let puzzle = SokobanPuzzle::new(&solved.map);
        assert_eq!(puzzle.heuristic(&solved.state), 0);

        let unsolved = parse(
            r"
######
#@$ .#
######
",
        );
        let puzzle = SokobanPuzzle::new(&unsolved.map);
        assert!(!puzzle.is_goal(&unsolved.state));
        assert!(puzzle.heuristic(&unsolved.state) > 0);
    }

    #[test]
    fn heuristic_ignores_boxes_already_home() {
        let level = parse(
            r"
#######
#@X$ .#
#######
",
        );
        let puzzle = SokobanPuzzle::new(&level.map);
        // only the misplaced box at distance 2 counts
        assert_eq!(puzzle.heuristic(&level.state), 2);
    }
}
