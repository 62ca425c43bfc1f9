//! Board state for the 4x4 sliding-tile puzzle

use crate::board::heuristic::Heuristic;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Width and height of the board
pub const BOARD_DIM: usize = 4;
/// Number of cells on the board
pub const BOARD_SIZE: usize = BOARD_DIM * BOARD_DIM;
/// Tile label used for the blank cell
pub const BLANK: u8 = BOARD_SIZE as u8;

/// Tile labels in row-major order; cell `x + 4y` holds `tiles[x + 4y]`
pub type Tiles = [u8; BOARD_SIZE];

/// The solved configuration: `1..=15` followed by the blank
pub const GOAL_TILES: Tiles = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, BLANK];

/// Direction the blank moves in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Column and row delta applied to the blank
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Contract violations on board construction and move application
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("illegal move {direction} for blank at ({x}, {y}) on board {tiles:?}")]
    IllegalMove {
        tiles: Tiles,
        direction: Direction,
        x: usize,
        y: usize,
    },
    #[error("board is not a permutation of 1..=16: {0:?}")]
    NotAPermutation(Tiles),
    #[error("only {count} legal moves generated for board {tiles:?}")]
    TooFewMoves { tiles: Tiles, count: usize },
}

/// Convert a linear cell offset to `(x, y)`
pub fn offset_to_pos(offset: usize) -> (usize, usize) {
    (offset % BOARD_DIM, offset / BOARD_DIM)
}

/// Convert `(x, y)` to a linear cell offset
pub fn pos_to_offset(x: usize, y: usize) -> usize {
    x + BOARD_DIM * y
}

fn is_permutation(tiles: &Tiles) -> bool {
    let mut seen = [false; BOARD_SIZE];
    for &tile in tiles {
        if tile == 0 || tile as usize > BOARD_SIZE || seen[tile as usize - 1] {
            return false;
        }
        seen[tile as usize - 1] = true;
    }
    true
}

/// One puzzle configuration together with its path cost and heuristic estimate.
///
/// Equality and hashing only look at the tiles, so two states reached
/// along different paths compare equal.
#[derive(Debug, Clone)]
pub struct BoardState {
    tiles: Tiles,
    blank: u8,
    path_cost: u32,
    heuristic_cost: u32,
    heuristic: Heuristic,
}

impl BoardState {
    /// Build the initial state of a search from a tile layout
    pub fn new(tiles: Tiles, heuristic: Heuristic) -> Result<Self, BoardError> {
        if !is_permutation(&tiles) {
            return Err(BoardError::NotAPermutation(tiles));
        }
        let blank = tiles
            .iter()
            .position(|&t| t == BLANK)
            .ok_or(BoardError::NotAPermutation(tiles))?;

        Ok(Self {
            tiles,
            blank: blank as u8,
            path_cost: 0,
            heuristic_cost: heuristic.evaluate(&tiles),
            heuristic,
        })
    }

    /// The solved board
    pub fn goal(heuristic: Heuristic) -> Self {
        Self {
            tiles: GOAL_TILES,
            blank: (BOARD_SIZE - 1) as u8,
            path_cost: 0,
            heuristic_cost: 0,
            heuristic,
        }
    }

    pub fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    /// Moves taken from the initial state (g)
    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// Estimated moves remaining (h)
    pub fn heuristic_cost(&self) -> u32 {
        self.heuristic_cost
    }

    /// Ordering key (f = g + h)
    pub fn total_cost(&self) -> u32 {
        self.path_cost.saturating_add(self.heuristic_cost)
    }

    pub fn blank_offset(&self) -> usize {
        self.blank as usize
    }

    pub fn blank_position(&self) -> (usize, usize) {
        offset_to_pos(self.blank as usize)
    }

    /// Slide the blank one cell in `direction`, producing a successor one move deeper.
    ///
    /// Fails with [`BoardError::IllegalMove`] when the blank would leave the grid.
    pub fn apply_move(&self, direction: Direction) -> Result<BoardState, BoardError> {
        let (x, y) = self.blank_position();
        let (dx, dy) = direction.offset();
        let new_x = x as isize + dx;
        let new_y = y as isize + dy;

        if new_x < 0 || new_y < 0 || new_x >= BOARD_DIM as isize || new_y >= BOARD_DIM as isize {
            return Err(BoardError::IllegalMove {
                tiles: self.tiles,
                direction,
                x,
                y,
            });
        }

        let target = pos_to_offset(new_x as usize, new_y as usize);
        let mut tiles = self.tiles;
        tiles.swap(self.blank as usize, target);

        Ok(BoardState {
            tiles,
            blank: target as u8,
            path_cost: self.path_cost + 1,
            heuristic_cost: self.heuristic.evaluate(&tiles),
            heuristic: self.heuristic,
        })
    }

    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL_TILES
    }

    /// Number of tile pairs that appear in the wrong relative order (blank excluded)
    pub fn inversions(&self) -> usize {
        let labels: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        labels
            .iter()
            .enumerate()
            .map(|(i, &a)| labels[i + 1..].iter().filter(|&&b| b < a).count())
            .sum()
    }

    /// Permutation-parity test: on a 4-wide board the goal is reachable
    /// iff inversions plus the blank's row (counted from the top) is odd.
    pub fn is_solvable(&self) -> bool {
        let (_, blank_row) = self.blank_position();
        (self.inversions() + blank_row) % 2 == 1
    }
}

impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for BoardState {}

impl Hash for BoardState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(BOARD_DIM) {
            let cells: Vec<String> = row
                .iter()
                .map(|&t| {
                    if t == BLANK {
                        format!("{:>2}", "-")
                    } else {
                        format!("{:>2}", t)
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
