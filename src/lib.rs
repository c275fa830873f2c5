//! Crate root module declarations for the Quince chess move engine.
//!
//! Exposes the board model, per-piece move generation, the check-aware legal
//! move filter, and the text utilities a front end uses to feed positions in
//! and draw them back out.

pub mod game_state {
    pub mod board;
    pub mod board_errors;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_scan;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_filter;
    pub mod move_listing;
    pub mod perft;
}

pub mod utils {
    pub mod layout_parser;
    pub mod opening_move;
    pub mod render_game_state;
}

pub use game_state::board::{Board, BoardConfig, Legality, RenderedBoard};
pub use game_state::board_errors::{BoardError, BoardResult};
pub use game_state::chess_types::{Occupant, PieceKind, PieceMove, Square, SquareSet, Team};
pub use game_state::piece::Piece;
pub use utils::opening_move::OpeningMove;
