//! Random solvable boards produced by walking away from the goal

use crate::board::heuristic::Heuristic;
use crate::board::moves::possible_moves;
use crate::board::state::{BoardError, BoardState, Direction, Tiles};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Apply `moves` random legal slides to the goal board.
///
/// The walk never undoes the slide it just made, so short walks do not
/// collapse back onto the goal. Every board produced this way is solvable.
pub fn scramble<R: Rng>(moves: usize, rng: &mut R) -> Result<Tiles, BoardError> {
    let mut state = BoardState::goal(Heuristic::MisplacedTiles);
    let mut last: Option<Direction> = None;

    for _ in 0..moves {
        let candidates: Vec<Direction> = possible_moves(&state)
            .into_iter()
            .filter(|dir| last.map_or(true, |prev| *dir != prev.opposite()))
            .collect();
        let dir = candidates[rng.random_range(0..candidates.len())];
        state = state.apply_move(dir)?;
        last = Some(dir);
    }

    Ok(*state.tiles())
}

/// Scramble with a reproducible generator (OS entropy when `seed` is `None`)
pub fn scramble_seeded(moves: usize, seed: Option<u64>) -> Result<Tiles, BoardError> {
    let mut rng: ChaCha8Rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    scramble(moves, &mut rng)
}
