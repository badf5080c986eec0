use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::debug;
use separator::Separatable;
use typed_arena::Arena;

use crate::solver::puzzle::Puzzle;

/// Created / visited / duplicate counts per depth.
#[derive(Clone, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats {
            created_states: vec![],
            visited_states: vec![],
            duplicate_states: vec![],
        }
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> u64 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_unique_visited(&mut self, depth: u32) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let mut new_depth = false;

        // while because some depths might be skipped when reaching duplicates
        while depth as usize >= counts.len() {
            counts.push(0);
            new_depth = true;
        }
        counts[depth as usize] += 1;
        new_depth
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / unique visited / reached duplicates:")?;
        write!(
            f,
            "{:<16}{:<17}{}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            duplicates.separated_string()
        )?;
        writeln!(
            f,
            "Created but not reached total: {}",
            left.separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "Depth          Created        Unique         Duplicates     Unknown (not reached)"
        )?;
        // created_states is always the longest vec
        for depth in 0..self.created_states.len() {
            let created = self.created_states[depth];
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            let left = created - visited - duplicates;
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                left.separated_string()
            )?;
        }
        Ok(())
    }
}

/// One discovered state with enough bookkeeping to reconstruct the path.
/// Lives in the search call's arena; `prev` references form a tree rooted
/// at the start node.
pub(crate) struct SearchNode<'a, P: Puzzle> {
    pub(crate) state: P::State,
    action: Option<P::Action>,
    prev: Option<&'a SearchNode<'a, P>>,
    pub(crate) dist: u32,
    h: u32,
    /// Insertion order - the secondary heap key, so ties on `f` are always
    /// broken the same way on every run and every platform.
    seq: u64,
}

impl<'a, P: Puzzle> SearchNode<'a, P> {
    fn new(
        state: P::State,
        action: Option<P::Action>,
        prev: Option<&'a SearchNode<'a, P>>,
        dist: u32,
        h: u32,
        seq: u64,
    ) -> Self {
        SearchNode {
            state,
            action,
            prev,
            dist,
            h,
            seq,
        }
    }

    fn f(&self) -> u32 {
        self.dist + self.h
    }
}

impl<P: Puzzle> PartialEq for SearchNode<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.f() == other.f() && self.seq == other.seq
    }
}

impl<P: Puzzle> Eq for SearchNode<'_, P> {}

impl<P: Puzzle> PartialOrd for SearchNode<'_, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Puzzle> Ord for SearchNode<'_, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f()
            .cmp(&other.f())
            .then(self.seq.cmp(&other.seq))
    }
}

pub(crate) enum SearchOutcome<A> {
    Solved(Vec<A>),
    Exhausted,
    OutOfBudget,
}

/// Best-first search driven purely through the [`Puzzle`] capability set.
///
/// `budget` bounds the number of expanded states; hitting it is reported
/// separately from exhausting the space since a solution might still exist.
/// The goal test runs before the budget check so a goal popped on the last
/// allowed node still counts as solved.
pub(crate) fn search<P: Puzzle>(
    puzzle: &P,
    start: &P::State,
    budget: Option<u64>,
) -> (SearchOutcome<P::Action>, Stats) {
    let arena: Arena<SearchNode<'_, P>> = Arena::new();
    let mut stats = Stats::new();
    let mut to_visit = BinaryHeap::new();
    let mut closed = FnvHashSet::default();
    let mut next_seq = 0;
    let mut expanded = 0;

    let start_node = &*arena.alloc(SearchNode::new(
        start.clone(),
        None,
        None,
        0,
        puzzle.heuristic(start),
        next_seq,
    ));
    next_seq += 1;
    stats.add_created(start_node.dist);
    to_visit.push(Reverse(start_node));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if closed.contains(&cur_node.state) {
            stats.add_reached_duplicate(cur_node.dist);
            continue;
        }
        if stats.add_unique_visited(cur_node.dist) {
            debug!("visited new depth: {}", cur_node.dist);
        }

        if puzzle.is_goal(&cur_node.state) {
            debug!("solved, reconstructing the path");
            return (SearchOutcome::Solved(reconstruct_actions(cur_node)), stats);
        }

        if let Some(max_expanded) = budget {
            if expanded >= max_expanded {
                debug!("budget of {} expansions exceeded", max_expanded);
                return (SearchOutcome::OutOfBudget, stats);
            }
        }
        expanded += 1;
        closed.insert(cur_node.state.clone());

        for action in puzzle.actions(&cur_node.state) {
            let neighbor_state = puzzle.result(&cur_node.state, action);
            if closed.contains(&neighbor_state) {
                continue;
            }
            let h = puzzle.heuristic(&neighbor_state);
            let next_node = &*arena.alloc(SearchNode::new(
                neighbor_state,
                Some(action),
                Some(cur_node),
                cur_node.dist + 1,
                h,
                next_seq,
            ));
            next_seq += 1;
            stats.add_created(next_node.dist);
            to_visit.push(Reverse(next_node));
        }
    }

    (SearchOutcome::Exhausted, stats)
}

fn reconstruct_actions<P: Puzzle>(final_node: &SearchNode<'_, P>) -> Vec<P::Action> {
    let mut actions = Vec::new();
    let mut node = final_node;
    while let (Some(action), Some(prev)) = (node.action, node.prev) {
        actions.push(action);
        node = prev;
    }
    actions.reverse();
    actions
}
