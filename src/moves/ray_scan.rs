//! Shared scanning helpers for piece move generation.
//!
//! Sliding pieces walk rays until they leave the board or hit a piece; leapers
//! test a fixed list of offsets. Both only read the board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, SquareSet, Team};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Walks from `from` (exclusive) along `(d_row, d_column)`. Empty squares are
/// taken; an enemy piece is taken and ends the ray; a friendly piece ends the
/// ray without being taken.
pub fn trace_ray(board: &Board, from: Square, team: Team, d_row: i8, d_column: i8) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let mut cursor = from.offset(d_row, d_column);

    while let Some(square) = cursor {
        match board.piece_at(square) {
            None => targets.insert(square),
            Some(piece) => {
                if piece.team != team {
                    targets.insert(square);
                }
                break;
            }
        }
        cursor = square.offset(d_row, d_column);
    }

    targets
}

pub fn trace_rays(board: &Board, from: Square, team: Team, directions: &[(i8, i8)]) -> SquareSet {
    directions
        .iter()
        .fold(SquareSet::EMPTY, |acc, &(d_row, d_column)| {
            acc.union(trace_ray(board, from, team, d_row, d_column))
        })
}

/// On-board squares at each offset that are not held by a friendly piece.
pub fn step_targets(board: &Board, from: Square, team: Team, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_column)| from.offset(d_row, d_column))
        .filter(|&square| !matches!(board.piece_at(square), Some(piece) if piece.team == team))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{step_targets, trace_ray};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Square, Team};
    use crate::utils::layout_parser::board_from_layout;

    #[test]
    fn ray_includes_enemy_blocker_and_stops() {
        // White rook on (4,4), black pawn on (4,1), white pawn on (1,4).
        let board = board_from_layout("8/4P3/8/8/1p2R3/8/8/8", Team::White).expect("layout");
        let from = Square::new(4, 4);

        let west = trace_ray(&board, from, Team::White, 0, -1);
        assert_eq!(west.len(), 3);
        assert!(west.contains(Square::new(4, 1)));
        assert!(!west.contains(Square::new(4, 0)));

        let north = trace_ray(&board, from, Team::White, -1, 0);
        assert_eq!(north.len(), 2);
        assert!(!north.contains(Square::new(1, 4)));
    }

    #[test]
    fn step_targets_skip_friendly_and_off_board_squares() {
        let board = Board::new_standard(Team::White);
        let targets = step_targets(
            &board,
            Square::new(7, 4),
            Team::White,
            &[(-1, 0), (1, 0), (0, 1)],
        );
        assert!(targets.is_empty());
    }
}
