//! The one-shot opening move a front end may hand over before play starts,
//! when the human takes the second-moving side.

use std::str::FromStr;

use crate::game_state::board_errors::{BoardError, BoardResult};
use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningMove {
    pub from: Square,
    pub to: Square,
}

impl OpeningMove {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// `[from_row, from_column, to_row, to_column]`.
    pub fn from_coordinates(coordinates: [u8; 4]) -> BoardResult<Self> {
        let [y1, x1, y2, x2] = coordinates;
        Ok(Self {
            from: Square::try_new(y1, x1)?,
            to: Square::try_new(y2, x2)?,
        })
    }
}

/// Four whitespace- or comma-separated coordinates, e.g. `"6 4 4 4"`.
impl FromStr for OpeningMove {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u8>().map_err(|_| {
                    BoardError::InvalidLayout(format!("invalid coordinate '{token}'"))
                })
            })
            .collect::<BoardResult<Vec<u8>>>()?;

        let coordinates: [u8; 4] = values.try_into().map_err(|v: Vec<u8>| {
            BoardError::InvalidLayout(format!("expected 4 coordinates, found {}", v.len()))
        })?;

        Self::from_coordinates(coordinates)
    }
}
