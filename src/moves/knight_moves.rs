use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, SquareSet, Team};
use crate::moves::ray_scan::step_targets;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_moves(board: &Board, from: Square, team: Team) -> SquareSet {
    step_targets(board, from, team, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Square, Team};
    use crate::utils::layout_parser::board_from_layout;

    #[test]
    fn knight_in_corner_has_two_targets() {
        let board = board_from_layout("N7/8/8/8/8/8/8/8", Team::White).expect("layout");
        let moves: Vec<Square> = knight_moves(&board, Square::new(0, 0), Team::White)
            .iter()
            .collect();
        assert_eq!(moves, vec![Square::new(1, 2), Square::new(2, 1)]);
    }

    #[test]
    fn knight_from_center_has_eight_targets() {
        let board = board_from_layout("8/8/8/3n4/8/8/8/8", Team::Black).expect("layout");
        assert_eq!(knight_moves(&board, Square::new(3, 3), Team::Black).len(), 8);
    }

    #[test]
    fn knight_jumps_over_pieces_but_not_onto_friends() {
        let board = Board::new_standard(Team::White);
        let moves: Vec<Square> = knight_moves(&board, Square::new(7, 1), Team::White)
            .iter()
            .collect();
        assert_eq!(moves, vec![Square::new(5, 0), Square::new(5, 2)]);
    }
}
