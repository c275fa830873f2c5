//! Pawn pushes and diagonal captures.
//!
//! Pawns advance toward the opponent's back rank. No en-passant and no
//! promotion: a pawn that reaches the far row simply has no moves left.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::chess_types::{Square, SquareSet, Team};

pub fn pawn_moves(board: &Board, from: Square, team: Team) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let step = pawn_direction(team);

    if let Some(one) = from.offset(step, 0) {
        if board.piece_at(one).is_none() {
            targets.insert(one);

            if from.row() == pawn_start_row(team) {
                if let Some(two) = one.offset(step, 0) {
                    if board.piece_at(two).is_none() {
                        targets.insert(two);
                    }
                }
            }
        }
    }

    // Each diagonal is checked on its own.
    for d_column in [-1i8, 1i8] {
        if let Some(diagonal) = from.offset(step, d_column) {
            if matches!(board.piece_at(diagonal), Some(piece) if piece.team != team) {
                targets.insert(diagonal);
            }
        }
    }

    targets
}
