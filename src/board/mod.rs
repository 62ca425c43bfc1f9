//! Sliding-tile board model: state, move generation, heuristics and board text

pub mod heuristic;
pub mod moves;
pub mod parse;
pub mod scramble;
pub mod state;

pub use heuristic::Heuristic;
pub use moves::{possible_moves, successors};
pub use parse::{format_board, parse_board, ParseError};
pub use scramble::scramble_seeded;
pub use state::{BoardError, BoardState, Direction, Tiles, BLANK, BOARD_DIM, BOARD_SIZE, GOAL_TILES};
