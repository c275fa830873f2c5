//! Move-path enumeration over check-filtered moves.
//!
//! Walks every sequence of legal moves to a fixed depth and counts the leaf
//! nodes, along with how many leaf moves were captures or gave check. Useful
//! as a cross-check of the generator against published node counts.

use crate::game_state::board::Board;
use crate::game_state::board_errors::BoardResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
    }
}

pub fn perft(board: &Board, depth: u8) -> BoardResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mover = board.turn_to_move();
    let mut total = PerftCounts::default();

    for mv in board.legal_moves_for_team(mover) {
        let mut next = board.clone();
        let is_capture = next.piece_at(mv.to).is_some();
        next.apply_move(mv.from, mv.to)?;

        if depth == 1 {
            total.nodes += 1;
            if is_capture {
                total.captures += 1;
            }
            if next.is_in_check(mover.opposite()) {
                total.checks += 1;
            }
        } else {
            total.merge(perft(&next, depth - 1)?);
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::{perft, PerftCounts};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Team;

    #[test]
    fn perft_depth_zero_is_one_node() {
        let board = Board::new_standard(Team::White);
        assert_eq!(perft(&board, 0).expect("perft").nodes, 1);
    }

    #[test]
    fn perft_start_position_shallow_depths() {
        let board = Board::new_standard(Team::White);
        assert_eq!(
            perft(&board, 1).expect("perft"),
            PerftCounts {
                nodes: 20,
                captures: 0,
                checks: 0
            }
        );
        assert_eq!(perft(&board, 2).expect("perft").nodes, 400);
    }

    #[test]
    fn perft_start_position_depth_three() {
        let board = Board::new_standard(Team::White);
        assert_eq!(
            perft(&board, 3).expect("perft"),
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12
            }
        );
    }
}
