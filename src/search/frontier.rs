//! Open set: states waiting to be expanded, cheapest total cost first
//!
//! A binary heap provides the ordering and a content-keyed index records the
//! path cost of the live entry for every board. Replacing an entry with a
//! cheaper path pushes a fresh heap entry and leaves the old one behind as
//! stale; stale entries are dropped when they surface in `extract_min`.

use crate::board::{BoardState, Tiles};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Outcome of offering a state to the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// No state with this content was queued
    Inserted,
    /// A queued state with this content had a longer path and was replaced
    Improved { previous: u32 },
    /// A queued state with this content already has an equal or shorter path
    Rejected { existing: u32 },
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        !matches!(self, Admission::Rejected { .. })
    }
}

#[derive(Debug)]
struct FrontierEntry {
    total_cost: u32,
    path_cost: u32,
    sequence: u64,
    state: BoardState,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: lowest f wins, then deepest g, then oldest entry
        other
            .total_cost
            .cmp(&self.total_cost)
            .then_with(|| self.path_cost.cmp(&other.path_cost))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Priority queue of board states ordered by ascending total cost
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    index: FxHashMap<Tiles, u32>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `state`, replacing a queued state with the same tiles only if
    /// `state` reaches them along a strictly shorter path.
    pub fn insert(&mut self, state: BoardState) -> Admission {
        let admission = match self.index.get(state.tiles()) {
            None => Admission::Inserted,
            Some(&existing) if existing <= state.path_cost() => {
                return Admission::Rejected { existing };
            }
            Some(&previous) => Admission::Improved { previous },
        };

        self.index.insert(*state.tiles(), state.path_cost());
        self.heap.push(FrontierEntry {
            total_cost: state.total_cost(),
            path_cost: state.path_cost(),
            sequence: self.next_sequence,
            state,
        });
        self.next_sequence += 1;
        admission
    }

    /// Remove and return the state with the smallest total cost.
    ///
    /// `None` means the frontier is exhausted.
    pub fn extract_min(&mut self) -> Option<BoardState> {
        while let Some(entry) = self.heap.pop() {
            if self.index.get(entry.state.tiles()) == Some(&entry.path_cost) {
                self.index.remove(entry.state.tiles());
                return Some(entry.state);
            }
        }
        None
    }

    /// Path cost of the queued state with the same tiles, if any
    pub fn find_cost(&self, tiles: &Tiles) -> Option<u32> {
        self.index.get(tiles).copied()
    }

    /// Total cost of the entry `extract_min` would return next
    pub fn peek_total_cost(&mut self) -> Option<u32> {
        while let Some(entry) = self.heap.peek() {
            if self.index.get(entry.state.tiles()) == Some(&entry.path_cost) {
                return Some(entry.total_cost);
            }
            self.heap.pop();
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of live (non-stale) entries
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }
}
