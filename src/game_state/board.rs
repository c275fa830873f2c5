//! The 8x8 board, its turn tracker and captured-material tallies.
//!
//! `Board` is a plain value: a fixed array of optional pieces plus a few
//! scalars. Cloning it yields a fully independent position, which is what the
//! check filter relies on when it simulates candidate moves.

use tracing::debug;

use crate::game_state::board_errors::{BoardError, BoardResult};
use crate::game_state::chess_rules::{back_row, pawn_start_row, BACK_RANK};
use crate::game_state::chess_types::{Occupant, PieceKind, PieceMove, Square, SquareSet, Team};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::team_in_check;
use crate::move_generation::legal_move_filter::legal_moves_avoiding_check;
use crate::move_generation::move_listing::{all_moves, legal_moves_for_team, moves_for_team};
use crate::utils::layout_parser::layout_from_render;
use crate::utils::opening_move::OpeningMove;

/// Grid handed to the drawing layer, row 0 first.
pub type RenderedBoard = [[Option<Occupant>; 8]; 8];

/// Which move set `apply_move` validates a requested destination against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Legality {
    /// Any destination allowed by the piece's movement pattern.
    #[default]
    PseudoLegal,
    /// Only destinations that do not leave the mover's king in check.
    AvoidCheck,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardConfig {
    pub legality: Legality,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    turn_to_move: Team,
    captured_value: [u32; 2],
    config: BoardConfig,
}

impl Board {
    /// Standard starting position: Black on rows 0-1, White on rows 6-7.
    pub fn new_standard(turn_to_move: Team) -> Self {
        Self::with_config(turn_to_move, BoardConfig::default())
    }

    pub fn with_config(turn_to_move: Team, config: BoardConfig) -> Self {
        let mut board = Self::empty(turn_to_move, config);

        for team in [Team::White, Team::Black] {
            let back = back_row(team);
            let pawns = pawn_start_row(team);
            for (column, kind) in BACK_RANK.iter().enumerate() {
                let column = column as u8;
                board.place(Piece::new(*kind, team, Square::new(back, column)));
                board.place(Piece::new(PieceKind::Pawn, team, Square::new(pawns, column)));
            }
        }

        board
    }

    /// Builds a board from a caller-supplied grid, row 0 first. Each piece's
    /// square is taken from the slot it occupies.
    pub fn from_grid(grid: Vec<Vec<Option<Occupant>>>, turn_to_move: Team) -> BoardResult<Self> {
        Self::from_grid_with_config(grid, turn_to_move, BoardConfig::default())
    }

    pub fn from_grid_with_config(
        grid: Vec<Vec<Option<Occupant>>>,
        turn_to_move: Team,
        config: BoardConfig,
    ) -> BoardResult<Self> {
        if let Some(bad_row) = grid.iter().find(|row| row.len() != 8) {
            return Err(BoardError::InvalidGridShape {
                rows: grid.len(),
                columns: bad_row.len(),
            });
        }
        if grid.len() != 8 {
            return Err(BoardError::InvalidGridShape {
                rows: grid.len(),
                columns: 8,
            });
        }

        let mut board = Self::empty(turn_to_move, config);
        for (row, cells) in grid.into_iter().enumerate() {
            for (column, cell) in cells.into_iter().enumerate() {
                if let Some(occupant) = cell {
                    let square = Square::new(row as u8, column as u8);
                    board.place(Piece::new(occupant.kind, occupant.team, square));
                }
            }
        }

        Ok(board)
    }

    /// A fresh standard board with White's recorded first move already played,
    /// leaving Black to move.
    pub fn with_opening_move(opening: OpeningMove) -> BoardResult<Self> {
        let mut board = Self::new_standard(Team::White);
        board.apply_move(opening.from, opening.to)?;
        Ok(board)
    }

    fn empty(turn_to_move: Team, config: BoardConfig) -> Self {
        Self {
            squares: [[None; 8]; 8],
            turn_to_move,
            captured_value: [0; 2],
            config,
        }
    }

    #[inline]
    fn place(&mut self, piece: Piece) {
        let square = piece.square();
        self.squares[square.row() as usize][square.column() as usize] = Some(piece);
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row() as usize][square.column() as usize].as_ref()
    }

    #[inline]
    pub fn turn_to_move(&self) -> Team {
        self.turn_to_move
    }

    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[inline]
    pub fn captured_value(&self, team: Team) -> u32 {
        self.captured_value[team.index()]
    }

    /// White's captured material minus Black's; positive favours White.
    pub fn material_balance(&self) -> i64 {
        i64::from(self.captured_value(Team::White)) - i64::from(self.captured_value(Team::Black))
    }

    /// Every piece on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten().flatten()
    }

    pub fn pseudo_legal_moves(&self, square: Square) -> SquareSet {
        self.piece_at(square)
            .map_or(SquareSet::EMPTY, |piece| piece.pseudo_legal_moves(self))
    }

    /// Pseudo-legal moves of the piece on `square` that keep its own king safe.
    pub fn legal_moves(&self, square: Square) -> SquareSet {
        legal_moves_avoiding_check(self, square)
    }

    pub fn is_in_check(&self, team: Team) -> bool {
        team_in_check(self, team)
    }

    pub fn all_moves(&self) -> Vec<PieceMove> {
        all_moves(self)
    }

    pub fn moves_for_team(&self, team: Team) -> Vec<PieceMove> {
        moves_for_team(self, team)
    }

    pub fn legal_moves_for_team(&self, team: Team) -> Vec<PieceMove> {
        legal_moves_for_team(self, team)
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        self.validate_move(from, to).is_ok()
    }

    /// Plays `from -> to` for the side to move, crediting any captured piece
    /// to the mover and handing the turn over.
    pub fn apply_move(&mut self, from: Square, to: Square) -> BoardResult<()> {
        let piece = self.validate_move(from, to)?;

        if let Some(captured) = self.relocate(from, to) {
            self.captured_value[piece.team.index()] += captured.value();
            debug!(
                team = %piece.team,
                captured = ?captured.kind,
                value = captured.value(),
                "capture on {to}"
            );
        }

        debug!(team = %piece.team, kind = ?piece.kind, "applied move {from} -> {to}");
        self.turn_to_move = self.turn_to_move.opposite();
        Ok(())
    }

    fn validate_move(&self, from: Square, to: Square) -> BoardResult<Piece> {
        let piece = *self
            .piece_at(from)
            .ok_or(BoardError::NoPieceAtSource(from))?;

        if piece.team != self.turn_to_move {
            return Err(BoardError::WrongTurn {
                square: from,
                team: piece.team,
                to_move: self.turn_to_move,
            });
        }

        let allowed = match self.config.legality {
            Legality::PseudoLegal => piece.pseudo_legal_moves(self),
            Legality::AvoidCheck => legal_moves_avoiding_check(self, from),
        };
        if !allowed.contains(to) {
            return Err(BoardError::IllegalDestination { from, to });
        }

        Ok(piece)
    }

    /// Moves whatever stands on `from` to `to` without any rule checks, turn
    /// change or tally update. Returns the piece that was on `to`, if any.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.squares[from.row() as usize][from.column() as usize].take()?;
        piece.square = to;
        self.squares[to.row() as usize][to.column() as usize].replace(piece)
    }

    pub fn render(&self) -> RenderedBoard {
        let mut out: RenderedBoard = [[None; 8]; 8];
        for piece in self.pieces() {
            let square = piece.square();
            out[square.row() as usize][square.column() as usize] = Some(piece.occupant());
        }
        out
    }

    /// FEN-style piece placement of this position, row 0 first.
    pub fn to_layout(&self) -> String {
        layout_from_render(&self.render())
    }
}
