use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, SquareSet, Team};
use crate::moves::ray_scan::{trace_rays, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_moves(board: &Board, from: Square, team: Team) -> SquareSet {
    trace_rays(board, from, team, &ORTHOGONAL_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::chess_types::{Square, Team};
    use crate::utils::layout_parser::board_from_layout;

    #[test]
    fn rook_on_open_board_from_three_three_has_fourteen_squares() {
        let board = board_from_layout("8/8/8/3R4/8/8/8/8", Team::White).expect("layout");
        let moves = rook_moves(&board, Square::new(3, 3), Team::White);
        assert_eq!(moves.len(), 14);
        assert!(!moves.contains(Square::new(3, 3)));
        assert!(moves.iter().all(|sq| sq.row() == 3 || sq.column() == 3));
    }

    #[test]
    fn rook_blocker_stops_ray() {
        // Black rook on (7,0) with a black pawn on (4,0) and a white knight on (7,3).
        let board = board_from_layout("8/8/8/8/p7/8/8/r2N4", Team::Black).expect("layout");
        let moves = rook_moves(&board, Square::new(7, 0), Team::Black);

        assert!(moves.contains(Square::new(5, 0)));
        assert!(!moves.contains(Square::new(4, 0)));
        assert!(!moves.contains(Square::new(3, 0)));
        assert!(moves.contains(Square::new(7, 3)));
        assert!(!moves.contains(Square::new(7, 4)));
        assert_eq!(moves.len(), 5);
    }
}
