//! Whole-board move listings.
//!
//! Origins are visited in row-major order and destinations in ascending
//! square order, so a fixed position always lists its moves the same way.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceMove, Team};
use crate::move_generation::legal_move_filter::legal_moves_avoiding_check;

/// Every pseudo-legal `(from, to)` pair for both teams.
pub fn all_moves(board: &Board) -> Vec<PieceMove> {
    board
        .pieces()
        .flat_map(|piece| {
            let from = piece.square();
            piece
                .pseudo_legal_moves(board)
                .iter()
                .map(move |to| PieceMove { from, to })
        })
        .collect()
}

pub fn moves_for_team(board: &Board, team: Team) -> Vec<PieceMove> {
    board
        .pieces()
        .filter(|piece| piece.team == team)
        .flat_map(|piece| {
            let from = piece.square();
            piece
                .pseudo_legal_moves(board)
                .iter()
                .map(move |to| PieceMove { from, to })
        })
        .collect()
}

/// Like [`moves_for_team`] but with every move that leaves `team`'s king in
/// check removed.
pub fn legal_moves_for_team(board: &Board, team: Team) -> Vec<PieceMove> {
    board
        .pieces()
        .filter(|piece| piece.team == team)
        .flat_map(|piece| {
            let from = piece.square();
            legal_moves_avoiding_check(board, from)
                .iter()
                .map(move |to| PieceMove { from, to })
        })
        .collect()
}
