//! A* solver for the 4x4 sliding-tile puzzle.
//!
//! [`board`] models layouts, moves and heuristics; [`search`] runs A* on one
//! or more worker threads sharing a single frontier.

pub mod board;
pub mod search;
