use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square, Team};

#[inline]
pub fn king_square(board: &Board, team: Team) -> Option<Square> {
    board
        .pieces()
        .find(|piece| piece.kind == PieceKind::King && piece.team == team)
        .map(|piece| piece.square())
}

/// True when some enemy piece could pseudo-legally move onto `team`'s king.
/// A team without a king on the board is never in check.
pub fn team_in_check(board: &Board, team: Team) -> bool {
    let Some(king_sq) = king_square(board, team) else {
        return false;
    };
    is_square_attacked(board, king_sq, team.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker: Team) -> bool {
    board
        .pieces()
        .filter(|piece| piece.team == attacker)
        .any(|piece| piece.pseudo_legal_moves(board).contains(square))
}

/// Origins of `attacker` pieces whose pseudo-legal moves include `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker: Team) -> Vec<(Square, PieceKind)> {
    board
        .pieces()
        .filter(|piece| piece.team == attacker)
        .filter(|piece| piece.pseudo_legal_moves(board).contains(square))
        .map(|piece| (piece.square(), piece.kind))
        .collect()
}
