use crate::data::Pos;

/// One point in the puzzle's state space. Never mutated - every move
/// produces a new `State`.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub(crate) struct State {
    pub(crate) player_pos: Pos,
    pub(crate) boxes: Vec<Pos>,
}

impl State {
    pub(crate) fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        // sort to detect equal states when we reorder boxes
        boxes.sort_unstable();
        State { player_pos, boxes }
    }

    pub(crate) fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_order_does_not_matter() {
        let a = State::new(Pos::new(1, 1), vec![Pos::new(2, 3), Pos::new(1, 5)]);
        let b = State::new(Pos::new(1, 1), vec![Pos::new(1, 5), Pos::new(2, 3)]);
        assert_eq!(a, b);

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let hash = |state: &State| {
            let mut hasher = DefaultHasher::new();
            state.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn box_lookup() {
        let state = State::new(Pos::new(0, 0), vec![Pos::new(2, 3), Pos::new(1, 5)]);
        assert!(state.has_box(Pos::new(1, 5)));
        assert!(!state.has_box(Pos::new(1, 4)));
    }
}
