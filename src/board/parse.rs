//! Parsing of textual board descriptions

use crate::board::state::{Tiles, BLANK, BOARD_SIZE};
use thiserror::Error;

/// Token that marks the blank cell in board text
pub const BLANK_TOKEN: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 16 tokens, found {found}")]
    TokenCount { found: usize },
    #[error("token {index} ('{token}') is neither a tile number nor '-'")]
    InvalidToken { index: usize, token: String },
    #[error("token {index} has value {value}, expected 1..=15")]
    OutOfRange { index: usize, value: i64 },
    #[error("tile {value} appears more than once")]
    DuplicateTile { value: u8 },
}

/// Parse 16 whitespace-separated tokens in row-major order.
///
/// Tiles are written as `1..=15`; the blank is written as `-`.
///
/// # Examples
/// ```
/// use slidesolve::board::{parse_board, BLANK};
///
/// let tiles = parse_board("1 2 3 4 5 6 7 8 9 10 11 12 13 14 - 15").unwrap();
/// assert_eq!(tiles[14], BLANK);
/// ```
pub fn parse_board(input: &str) -> Result<Tiles, ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != BOARD_SIZE {
        return Err(ParseError::TokenCount {
            found: tokens.len(),
        });
    }

    let mut tiles: Tiles = [0; BOARD_SIZE];
    let mut seen = [false; BOARD_SIZE];

    for (index, token) in tokens.iter().enumerate() {
        let tile = if *token == BLANK_TOKEN {
            BLANK
        } else {
            let value: i64 = token.parse().map_err(|_| ParseError::InvalidToken {
                index,
                token: token.to_string(),
            })?;
            if !(1..BOARD_SIZE as i64).contains(&value) {
                return Err(ParseError::OutOfRange { index, value });
            }
            value as u8
        };

        if seen[tile as usize - 1] {
            if tile == BLANK {
                return Err(ParseError::InvalidToken {
                    index,
                    token: token.to_string(),
                });
            }
            return Err(ParseError::DuplicateTile { value: tile });
        }
        seen[tile as usize - 1] = true;
        tiles[index] = tile;
    }

    Ok(tiles)
}

/// Render tiles back into the token format accepted by [`parse_board`]
pub fn format_board(tiles: &Tiles) -> String {
    tiles
        .iter()
        .map(|&t| {
            if t == BLANK {
                BLANK_TOKEN.to_string()
            } else {
                t.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::state::GOAL_TILES;

    #[test]
    fn test_parse_goal() {
        let tiles = parse_board("1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 -").unwrap();
        assert_eq!(tiles, GOAL_TILES);
    }

    #[test]
    fn test_parse_multiline() {
        let text = " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14  - 15\n";
        let tiles = parse_board(text).unwrap();
        assert_eq!(tiles[14], BLANK);
        assert_eq!(tiles[15], 15);
    }

    #[test]
    fn test_parse_wrong_token_count() {
        assert_eq!(
            parse_board("1 2 3"),
            Err(ParseError::TokenCount { found: 3 })
        );
        assert_eq!(parse_board(""), Err(ParseError::TokenCount { found: 0 }));
    }

    #[test]
    fn test_parse_invalid_token() {
        let err = parse_board("1 2 3 4 5 6 7 8 9 10 11 12 13 14 x -").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidToken {
                index: 14,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = parse_board("0 2 3 4 5 6 7 8 9 10 11 12 13 14 15 -").unwrap_err();
        assert_eq!(err, ParseError::OutOfRange { index: 0, value: 0 });

        let err = parse_board("16 2 3 4 5 6 7 8 9 10 11 12 13 14 15 -").unwrap_err();
        assert_eq!(err, ParseError::OutOfRange { index: 0, value: 16 });
    }

    #[test]
    fn test_parse_duplicates() {
        let err = parse_board("1 1 3 4 5 6 7 8 9 10 11 12 13 14 15 -").unwrap_err();
        assert_eq!(err, ParseError::DuplicateTile { value: 1 });

        let err = parse_board("1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 2").unwrap_err();
        assert_eq!(err, ParseError::DuplicateTile { value: 2 });

        let err = parse_board("1 2 3 4 5 6 7 8 9 10 11 12 13 14 - -").unwrap_err();
        assert!(matches!(err, ParseError::InvalidToken { index: 15, .. }));
    }

    #[test]
    fn test_format_board() {
        assert_eq!(
            format_board(&GOAL_TILES),
            "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 -"
        );
        assert_eq!(parse_board(&format_board(&GOAL_TILES)).unwrap(), GOAL_TILES);
    }
}
