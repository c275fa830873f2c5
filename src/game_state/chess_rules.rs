//! Canonical chess-rule constants.
//!
//! Static layout and direction rules: the standard starting placement and
//! where each team's pawns begin and which way they advance.

use crate::game_state::chess_types::{PieceKind, Team};

/// Standard starting placement in FEN piece-placement form. The first rank in
/// the string is row 0 (Black's back rank).
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Back-rank order from column 0 to column 7.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn back_row(team: Team) -> u8 {
    match team {
        Team::White => 7,
        Team::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(team: Team) -> u8 {
    match team {
        Team::White => 6,
        Team::Black => 1,
    }
}

/// Row delta of a single pawn step, toward the opponent's back rank.
#[inline]
pub const fn pawn_direction(team: Team) -> i8 {
    match team {
        Team::White => -1,
        Team::Black => 1,
    }
}
