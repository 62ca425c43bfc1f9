//! Legal move generation

use crate::board::state::{BoardError, BoardState, Direction, BOARD_DIM};

/// Directions the blank can move in without leaving the grid.
///
/// Corners yield 2 moves, edges 3 and interior cells 4.
pub fn possible_moves(state: &BoardState) -> Vec<Direction> {
    let (x, y) = state.blank_position();
    let mut moves = Vec::with_capacity(4);
    if x > 0 {
        moves.push(Direction::Left);
    }
    if x < BOARD_DIM - 1 {
        moves.push(Direction::Right);
    }
    if y > 0 {
        moves.push(Direction::Up);
    }
    if y < BOARD_DIM - 1 {
        moves.push(Direction::Down);
    }
    moves
}

/// Build every successor of `state`, one per legal move.
///
/// Returns [`BoardError::TooFewMoves`] if the generator ever produces fewer
/// than two moves, which would mean the blank position is corrupt.
pub fn successors(state: &BoardState) -> Result<Vec<BoardState>, BoardError> {
    let moves = possible_moves(state);
    if moves.len() < 2 {
        return Err(BoardError::TooFewMoves {
            tiles: *state.tiles(),
            count: moves.len(),
        });
    }
    moves.into_iter().map(|dir| state.apply_move(dir)).collect()
}
