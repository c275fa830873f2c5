use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, SquareSet, Team};
use crate::moves::ray_scan::{trace_rays, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_moves(board: &Board, from: Square, team: Team) -> SquareSet {
    trace_rays(board, from, team, &DIAGONAL_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Square, Team};
    use crate::utils::layout_parser::board_from_layout;

    #[test]
    fn bishop_from_center_has_thirteen_squares() {
        let board = board_from_layout("8/8/8/3B4/8/8/8/8", Team::White).expect("layout");
        assert_eq!(bishop_moves(&board, Square::new(3, 3), Team::White).len(), 13);
    }

    #[test]
    fn bishop_boxed_in_at_start_has_no_moves() {
        let board = Board::new_standard(Team::White);
        assert!(bishop_moves(&board, Square::new(7, 2), Team::White).is_empty());
        assert!(bishop_moves(&board, Square::new(0, 5), Team::Black).is_empty());
    }

    #[test]
    fn bishop_captures_enemy_on_diagonal() {
        // White bishop on (4,4), black knight on (2,2), white pawn on (5,5).
        let board = board_from_layout("8/8/2n5/8/4B3/5P2/8/8", Team::White).expect("layout");
        let moves = bishop_moves(&board, Square::new(4, 4), Team::White);

        assert!(moves.contains(Square::new(3, 3)));
        assert!(moves.contains(Square::new(2, 2)));
        assert!(!moves.contains(Square::new(1, 1)));
        assert!(!moves.contains(Square::new(5, 5)));
        // (3,3),(2,2) + (3,5),(2,6),(1,7) + (5,3),(6,2),(7,1)
        assert_eq!(moves.len(), 8);
    }
}
