//! Text layouts for boards: the FEN piece-placement field.
//!
//! The first rank in the string maps to row 0 (Black's back rank), so the
//! standard start reads `rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR`.
//! Uppercase letters are White, lowercase Black, digits count empty squares.

use crate::game_state::board::{Board, RenderedBoard};
use crate::game_state::board_errors::{BoardError, BoardResult};
use crate::game_state::chess_types::{Occupant, PieceKind, Team};

/// Parses a placement string into a grid suitable for [`Board::from_grid`].
pub fn parse_layout(layout: &str) -> BoardResult<Vec<Vec<Option<Occupant>>>> {
    let ranks: Vec<&str> = layout.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(BoardError::InvalidLayout(format!(
            "layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut grid = Vec::with_capacity(8);
    for rank in ranks {
        let mut row = Vec::with_capacity(8);

        for ch in rank.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(BoardError::InvalidLayout(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                row.extend((0..empty_count).map(|_| None));
                continue;
            }

            let occupant = occupant_from_char(ch).ok_or_else(|| {
                BoardError::InvalidLayout(format!("invalid piece character '{ch}'"))
            })?;
            row.push(Some(occupant));
        }

        if row.len() != 8 {
            return Err(BoardError::InvalidLayout(format!(
                "rank '{rank}' does not sum to 8 columns"
            )));
        }
        grid.push(row);
    }

    Ok(grid)
}

pub fn board_from_layout(layout: &str, turn_to_move: Team) -> BoardResult<Board> {
    Board::from_grid(parse_layout(layout)?, turn_to_move)
}

/// Inverse of [`parse_layout`].
pub fn layout_from_render(grid: &RenderedBoard) -> String {
    let mut ranks = Vec::with_capacity(8);

    for row in grid {
        let mut rank = String::new();
        let mut empty = 0u8;
        for cell in row {
            match cell {
                Some(occupant) => {
                    if empty > 0 {
                        rank.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    rank.push(occupant_to_char(*occupant));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            rank.push(char::from(b'0' + empty));
        }
        ranks.push(rank);
    }

    ranks.join("/")
}

fn occupant_from_char(ch: char) -> Option<Occupant> {
    let team = if ch.is_ascii_uppercase() {
        Team::White
    } else {
        Team::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Occupant::new(kind, team))
}

fn occupant_to_char(occupant: Occupant) -> char {
    let ch = match occupant.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match occupant.team {
        Team::White => ch.to_ascii_uppercase(),
        Team::Black => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::{board_from_layout, layout_from_render, parse_layout};
    use crate::game_state::board::Board;
    use crate::game_state::board_errors::BoardError;
    use crate::game_state::chess_rules::STARTING_LAYOUT;
    use crate::game_state::chess_types::{Square, Team};

    #[test]
    fn starting_layout_matches_standard_board() {
        let parsed = board_from_layout(STARTING_LAYOUT, Team::White).expect("start layout");
        assert_eq!(parsed, Board::new_standard(Team::White));
        assert_eq!(layout_from_render(&parsed.render()), STARTING_LAYOUT);
    }

    #[test]
    fn layout_after_a_move() {
        let mut board = Board::new_standard(Team::White);
        board
            .apply_move(Square::new(6, 4), Square::new(4, 4))
            .expect("pawn push");
        assert_eq!(
            layout_from_render(&board.render()),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
        );
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        assert!(matches!(
            parse_layout("8/8/8"),
            Err(BoardError::InvalidLayout(_))
        ));
        assert!(matches!(
            parse_layout("8/8/8/8/8/8/8/7"),
            Err(BoardError::InvalidLayout(_))
        ));
        assert!(matches!(
            parse_layout("8/8/8/8/8/8/8/7x"),
            Err(BoardError::InvalidLayout(_))
        ));
        assert!(matches!(
            parse_layout("8/8/8/8/8/8/8/09"),
            Err(BoardError::InvalidLayout(_))
        ));
    }
}
