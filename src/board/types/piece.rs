//! Piece and alliance types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::geometry::{EIGHTH_RANK, FIRST_RANK, SECOND_RANK, SEVENTH_RANK};
use super::square::Square;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Parse a piece kind from its letter (either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Uppercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Side of play.
///
/// White sits on rows 6-7 of the index layout (a1 is index 56) and
/// advances toward index 0; Black advances toward index 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alliance {
    White,
    Black,
}

impl Alliance {
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    /// Index step of one rank forward (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn direction(self) -> isize {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    /// Index step of one rank toward this side's own back rank
    #[inline]
    #[must_use]
    pub const fn opposite_direction(self) -> isize {
        -self.direction()
    }

    /// True if a pawn of this alliance promotes on `square`
    #[inline]
    #[must_use]
    pub const fn is_pawn_promotion_square(self, square: Square) -> bool {
        match self {
            Alliance::White => EIGHTH_RANK[square.index()],
            Alliance::Black => FIRST_RANK[square.index()],
        }
    }

    /// True if `square` is on this alliance's pawn starting rank
    #[inline]
    #[must_use]
    pub const fn is_pawn_start_square(self, square: Square) -> bool {
        match self {
            Alliance::White => SECOND_RANK[square.index()],
            Alliance::Black => SEVENTH_RANK[square.index()],
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on a square.
///
/// Pieces are values: moving one produces a new `Piece` at the destination.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    square: Square,
    first_move: bool,
}

impl Piece {
    /// A piece that has not moved yet.
    #[must_use]
    pub const fn new(kind: PieceKind, alliance: Alliance, square: Square) -> Self {
        Piece {
            kind,
            alliance,
            square,
            first_move: true,
        }
    }

    /// A piece that has already moved at least once.
    #[must_use]
    pub const fn moved(kind: PieceKind, alliance: Alliance, square: Square) -> Self {
        Piece {
            kind,
            alliance,
            square,
            first_move: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    #[inline]
    #[must_use]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    #[inline]
    #[must_use]
    pub const fn is_rook(&self) -> bool {
        matches!(self.kind, PieceKind::Rook)
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    /// The same piece relocated to `destination`, first move spent.
    #[must_use]
    pub const fn moved_to(&self, destination: Square) -> Piece {
        Piece::moved(self.kind, self.alliance, destination)
    }

    /// The queen a pawn turns into on `destination`.
    #[must_use]
    pub const fn promoted_to_queen(&self, destination: Square) -> Piece {
        Piece::moved(PieceKind::Queen, self.alliance, destination)
    }

    /// Letter for this piece, uppercase for White and lowercase for Black
    #[must_use]
    pub fn glyph(&self) -> char {
        let c = self.kind.to_char();
        match self.alliance {
            Alliance::White => c,
            Alliance::Black => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
