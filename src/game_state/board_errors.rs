//! Errors reported back to callers of the board API.
//!
//! Every variant describes bad caller input (a malformed grid, a move that
//! does not fit the position, text that does not parse). None of them signal
//! an internal fault, and none are retried inside the crate.

use thiserror::Error;

use crate::game_state::chess_types::{Square, Team};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The supplied grid was not 8 rows of 8 columns.
    ///
    /// Payload: the row count and the length of the first row that was not 8
    /// (or 8 when only the row count was wrong).
    #[error("grid must be 8x8, got {rows} rows with a row of {columns} columns")]
    InvalidGridShape { rows: usize, columns: usize },

    #[error("no piece at source square {0}")]
    NoPieceAtSource(Square),

    /// The piece on `square` belongs to `team`, but `to_move` has the turn.
    #[error("piece at {square} belongs to {team}, but it is {to_move} to move")]
    WrongTurn {
        square: Square,
        team: Team,
        to_move: Team,
    },

    #[error("{to} is not a valid destination for the piece at {from}")]
    IllegalDestination { from: Square, to: Square },

    #[error("square ({row},{column}) is off the board")]
    SquareOutOfBounds { row: u8, column: u8 },

    /// Text describing a board layout or move could not be interpreted.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

pub type BoardResult<T> = Result<T, BoardError>;
