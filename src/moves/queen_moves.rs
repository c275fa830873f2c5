use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, SquareSet, Team};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

/// Union of the rook and bishop scans from the same square.
#[inline]
pub fn queen_moves(board: &Board, from: Square, team: Team) -> SquareSet {
    rook_moves(board, from, team).union(bishop_moves(board, from, team))
}
