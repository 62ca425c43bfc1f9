//! Closed set: every board configuration the search has claimed, keyed by tiles

use crate::board::{BoardState, Tiles};
use rustc_hash::FxHashMap;

/// Result of claiming a state in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// First time these tiles were seen
    New,
    /// Seen before along a longer path; the state must be (re)queued
    Improved { previous: u32 },
    /// Seen before along an equal or shorter path; discard the state
    Known { existing: u32 },
}

impl Claim {
    pub fn is_claimed(&self) -> bool {
        !matches!(self, Claim::Known { .. })
    }
}

/// Set of visited boards with the shortest path cost known for each
#[derive(Debug, Default)]
pub struct VisitedRegistry {
    entries: FxHashMap<Tiles, u32>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, state: &BoardState) -> bool {
        self.entries.contains_key(state.tiles())
    }

    /// Record `state`. Returns `true` if its tiles were not present yet.
    ///
    /// Inserting the same tiles again keeps a single entry holding the
    /// smaller path cost.
    pub fn insert(&mut self, state: &BoardState) -> bool {
        match self.entries.get_mut(state.tiles()) {
            Some(best) => {
                *best = (*best).min(state.path_cost());
                false
            }
            None => {
                self.entries.insert(*state.tiles(), state.path_cost());
                true
            }
        }
    }

    /// Test-and-record in one step: claims the tiles unless they are already
    /// known along a path no longer than `state`'s.
    pub fn claim(&mut self, state: &BoardState) -> Claim {
        match self.entries.get_mut(state.tiles()) {
            Some(best) if *best <= state.path_cost() => Claim::Known { existing: *best },
            Some(best) => {
                let previous = *best;
                *best = state.path_cost();
                Claim::Improved { previous }
            }
            None => {
                self.entries.insert(*state.tiles(), state.path_cost());
                Claim::New
            }
        }
    }

    /// Shortest path cost recorded for `tiles`
    pub fn best_cost(&self, tiles: &Tiles) -> Option<u32> {
        self.entries.get(tiles).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
