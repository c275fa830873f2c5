//! The piece entity and its kind-dispatched move generation.
//!
//! A piece is identified by the square it stands on. Moving it rewrites the
//! stored square in place; it is never rebuilt.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Occupant, PieceKind, Square, SquareSet, Team};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Team,
    pub(crate) square: Square,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, team: Team, square: Square) -> Self {
        Self { kind, team, square }
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.kind.value()
    }

    #[inline]
    pub const fn occupant(&self) -> Occupant {
        Occupant::new(self.kind, self.team)
    }

    /// Destinations allowed by this piece's movement pattern on `board`,
    /// ignoring whether the move would leave its own king in check. Never
    /// contains the piece's own square or a square held by a friendly piece.
    pub fn pseudo_legal_moves(&self, board: &Board) -> SquareSet {
        match self.kind {
            PieceKind::Pawn => pawn_moves(board, self.square, self.team),
            PieceKind::Knight => knight_moves(board, self.square, self.team),
            PieceKind::Bishop => bishop_moves(board, self.square, self.team),
            PieceKind::Rook => rook_moves(board, self.square, self.team),
            PieceKind::Queen => queen_moves(board, self.square, self.team),
            PieceKind::King => king_moves(board, self.square, self.team),
        }
    }
}
