use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, SquareSet, Team};
use crate::moves::ray_scan::step_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_moves(board: &Board, from: Square, team: Team) -> SquareSet {
    step_targets(board, from, team, &KING_OFFSETS)
}
