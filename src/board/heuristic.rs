//! Heuristic estimates of the remaining distance to the goal

use crate::board::state::{offset_to_pos, Tiles, BLANK, BOARD_DIM, BOARD_SIZE};

/// Upper bound on the Manhattan sum of any layout: every tile at most 6 cells away
pub const MAX_MANHATTAN_DISTANCE: u32 = ((BOARD_SIZE - 1) * 2 * (BOARD_DIM - 1)) as u32;

/// Largest Manhattan weight whose scaled estimate still leaves half of `u32` for path costs
pub const MAX_MANHATTAN_WEIGHT: u32 = u32::MAX / 2 / MAX_MANHATTAN_DISTANCE;

/// Estimator used to score board states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Sum of Manhattan distances of every tile to its goal cell (default)
    #[default]
    Manhattan,
    /// Manhattan distance scaled by a constant factor; overestimates for weights above 1
    WeightedManhattan(u32),
    /// Number of tiles that are not on their goal cell
    MisplacedTiles,
}

impl Heuristic {
    /// Score a tile layout. Zero exactly on the goal board.
    pub fn evaluate(&self, tiles: &Tiles) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(tiles),
            Heuristic::WeightedManhattan(weight) => {
                weight.saturating_mul(manhattan_distance(tiles))
            }
            Heuristic::MisplacedTiles => misplaced_tiles(tiles),
        }
    }

    /// Whether the estimate never exceeds the true number of remaining moves
    pub fn is_admissible(&self) -> bool {
        match self {
            Heuristic::Manhattan | Heuristic::MisplacedTiles => true,
            Heuristic::WeightedManhattan(weight) => *weight <= 1,
        }
    }
}

/// Sum over non-blank tiles of `|dx| + |dy|` between current and goal cell
pub fn manhattan_distance(tiles: &Tiles) -> u32 {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(offset, &tile)| {
            let (x, y) = offset_to_pos(offset);
            let (gx, gy) = offset_to_pos(tile as usize - 1);
            (x.abs_diff(gx) + y.abs_diff(gy)) as u32
        })
        .sum()
}

/// Count of non-blank tiles away from their goal cell
pub fn misplaced_tiles(tiles: &Tiles) -> u32 {
    tiles
        .iter()
        .enumerate()
        .filter(|&(offset, &tile)| tile != BLANK && tile as usize != offset + 1)
        .count() as u32
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::WeightedManhattan(weight) => write!(f, "manhattan*{}", weight),
            Heuristic::MisplacedTiles => write!(f, "misplaced"),
        }
    }
}

impl std::str::FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        if let Some(weight) = lowered.strip_prefix("manhattan*") {
            return weight
                .parse::<u32>()
                .map(Heuristic::WeightedManhattan)
                .map_err(|_| format!("Invalid Manhattan weight: '{}'", weight));
        }
        match lowered.as_str() {
            "manhattan" | "md" => Ok(Heuristic::Manhattan),
            "misplaced" | "hamming" => Ok(Heuristic::MisplacedTiles),
            _ => Err(format!(
                "Unknown heuristic: '{}'. Valid options: manhattan, manhattan*<weight>, misplaced",
                s
            )),
        }
    }
}
