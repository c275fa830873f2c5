//! Check-aware filtering of a piece's pseudo-legal destinations.
//!
//! Each candidate is played on an owned copy of the board and kept only if
//! the mover's king is not attacked afterwards. The caller's board is never
//! touched.

use tracing::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, SquareSet};
use crate::move_generation::legal_move_checks::team_in_check;

/// Destinations of the piece on `square` that do not leave its own king in
/// check. Empty when the square is empty.
pub fn legal_moves_avoiding_check(board: &Board, square: Square) -> SquareSet {
    let Some(piece) = board.piece_at(square) else {
        return SquareSet::EMPTY;
    };
    let team = piece.team;
    let candidates = piece.pseudo_legal_moves(board);

    candidates
        .iter()
        .filter(|&to| {
            let mut next = board.clone();
            next.relocate(square, to);
            let exposed = team_in_check(&next, team);
            if exposed {
                trace!(%team, "rejecting {square} -> {to}: king left in check");
            }
            !exposed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::legal_moves_avoiding_check;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Square, Team};
    use crate::utils::layout_parser::board_from_layout;

    #[test]
    fn start_position_filter_keeps_everything() {
        let board = Board::new_standard(Team::White);
        for column in 0..8u8 {
            let square = Square::new(6, column);
            assert_eq!(
                legal_moves_avoiding_check(&board, square),
                board.pseudo_legal_moves(square)
            );
        }
    }

    #[test]
    fn pinned_rook_may_only_slide_along_the_pin() {
        // White king (7,4), white rook (5,4), black rook (1,4).
        let board = board_from_layout("8/4r3/8/8/8/4R3/8/4K3", Team::White).expect("layout");
        let legal: Vec<Square> = legal_moves_avoiding_check(&board, Square::new(5, 4))
            .iter()
            .collect();
        assert_eq!(
            legal,
            vec![
                Square::new(1, 4),
                Square::new(2, 4),
                Square::new(3, 4),
                Square::new(4, 4),
                Square::new(6, 4)
            ]
        );
        assert_eq!(board.pseudo_legal_moves(Square::new(5, 4)).len(), 12);
    }

    #[test]
    fn king_may_not_step_into_attack() {
        // Black king (0,0); white rook on (7,1) covers column 1.
        let board = board_from_layout("k7/8/8/8/8/8/8/1R5K", Team::Black).expect("layout");
        let legal: Vec<Square> = board.legal_moves(Square::new(0, 0)).iter().collect();
        assert_eq!(legal, vec![Square::new(1, 0)]);
    }

    #[test]
    fn check_must_be_answered() {
        // White king (7,4) checked down column 4 by a black rook on (0,4). The
        // white bishop on (6,5) can only interpose on (5,4).
        let board = board_from_layout("4r3/8/8/8/8/8/5B2/4K3", Team::White).expect("layout");
        let bishop: Vec<Square> = board.legal_moves(Square::new(6, 5)).iter().collect();
        assert_eq!(bishop, vec![Square::new(5, 4)]);

        let king = board.legal_moves(Square::new(7, 4));
        assert!(!king.contains(Square::new(6, 4)));
        assert!(king.contains(Square::new(7, 3)));
        assert!(king.contains(Square::new(6, 3)));
    }

    #[test]
    fn filtering_does_not_mutate_the_board() {
        let board = board_from_layout("8/4r3/8/8/8/4R3/8/4K3", Team::White).expect("layout");
        let before = board.clone();
        let _ = legal_moves_avoiding_check(&board, Square::new(5, 4));
        let _ = legal_moves_avoiding_check(&board, Square::new(7, 4));
        assert_eq!(board, before);
    }

    #[test]
    fn empty_square_has_no_legal_moves() {
        let board = Board::new_standard(Team::White);
        assert!(legal_moves_avoiding_check(&board, Square::new(4, 4)).is_empty());
    }
}
