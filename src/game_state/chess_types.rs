//! Plain value types shared by the board, the piece model and move generation.
//!
//! Squares are addressed as `(row, column)` with row 0 being Black's back rank
//! and row 7 White's. Sets of squares are packed into a single `u64`, one bit
//! per square at index `row * 8 + column`.

use std::fmt;

use crate::game_state::board_errors::{BoardError, BoardResult};

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    White,
    Black,
}

impl Team {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "white"),
            Team::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value credited to the capturing team. The king's value is a
    /// sentinel that only matters when a king is taken under pseudo-legal play.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }
}

/// A board coordinate. Both components are always in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    column: u8,
}

impl Square {
    /// Builds a square from trusted coordinates.
    ///
    /// # Panics
    /// If either coordinate is outside `0..=7`. Use [`Square::try_new`] for
    /// coordinates that come from outside the crate.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Self {
        assert!(row < 8 && column < 8, "square coordinate out of range");
        Self { row, column }
    }

    pub fn try_new(row: u8, column: u8) -> BoardResult<Self> {
        if row < 8 && column < 8 {
            Ok(Self { row, column })
        } else {
            Err(BoardError::SquareOutOfBounds { row, column })
        }
    }

    /// Applies a signed offset, returning `None` when it leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let column = self.column as i8 + d_column;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Self {
                row: row as u8,
                column: column as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_index(index: u8) -> Self {
        Self::new(index / 8, index % 8)
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * 8 + self.column as usize
    }

    #[inline]
    const fn mask(self) -> u64 {
        1u64 << self.index()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

/// Set of squares packed one bit per square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= square.mask();
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !square.mask();
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & square.mask() != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: SquareSet) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn intersection(self, other: SquareSet) -> Self {
        Self(self.0 & other.0)
    }

    /// Squares in ascending index order (row-major from row 0).
    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareSetIter {}

/// What a caller sees in a grid slot: the kind and team of a piece, without
/// its position (the slot is the position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub kind: PieceKind,
    pub team: Team,
}

impl Occupant {
    #[inline]
    pub const fn new(kind: PieceKind, team: Team) -> Self {
        Self { kind, team }
    }
}

/// An origin/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceMove {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for PieceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
