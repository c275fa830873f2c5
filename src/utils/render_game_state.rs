//! Terminal-oriented Unicode board renderer.
//!
//! Turns the grid returned by `Board::render` into text for debugging, tests
//! and the inspector binary. Row 0 is printed at the top and both axes are
//! labelled with the numeric coordinates the board API takes.

use crate::game_state::board::RenderedBoard;
use crate::game_state::chess_types::{Occupant, PieceKind, Team};

pub fn render_board(grid: &RenderedBoard) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for (row, cells) in grid.iter().enumerate() {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for (column, cell) in cells.iter().enumerate() {
            match cell {
                Some(occupant) => out.push(occupant_to_unicode(*occupant)),
                None => out.push('·'),
            }

            if column < 7 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

fn occupant_to_unicode(occupant: Occupant) -> char {
    match (occupant.team, occupant.kind) {
        (Team::White, PieceKind::Pawn) => '♙',
        (Team::White, PieceKind::Knight) => '♘',
        (Team::White, PieceKind::Bishop) => '♗',
        (Team::White, PieceKind::Rook) => '♖',
        (Team::White, PieceKind::Queen) => '♕',
        (Team::White, PieceKind::King) => '♔',
        (Team::Black, PieceKind::Pawn) => '♟',
        (Team::Black, PieceKind::Knight) => '♞',
        (Team::Black, PieceKind::Bishop) => '♝',
        (Team::Black, PieceKind::Rook) => '♜',
        (Team::Black, PieceKind::Queen) => '♛',
        (Team::Black, PieceKind::King) => '♚',
    }
}
