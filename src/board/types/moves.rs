//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// Which rook a castle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// A candidate move, produced by enumeration and consumed by execution.
///
/// Every variant carries the piece as it stands before the move; captures
/// also carry the captured piece by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// Non-capturing move, including a pawn's single step.
    Quiet { piece: Piece, destination: Square },
    Capture {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Pawn double step from its starting rank.
    PawnJump { piece: Piece, destination: Square },
    /// Pawn arriving on its last rank, by step or capture. Always promotes to a queen.
    Promotion {
        piece: Piece,
        destination: Square,
        captured: Option<Piece>,
    },
    /// Pawn capture of a pawn that just double-stepped past it.
    EnPassant {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    Castle {
        side: CastleSide,
        king: Piece,
        king_destination: Square,
        rook: Piece,
        rook_destination: Square,
    },
}

impl Move {
    /// The piece that moves (the king for a castle)
    #[inline]
    #[must_use]
    pub const fn moved_piece(&self) -> &Piece {
        match self {
            Move::Quiet { piece, .. }
            | Move::Capture { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::Promotion { piece, .. }
            | Move::EnPassant { piece, .. } => piece,
            Move::Castle { king, .. } => king,
        }
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> Square {
        self.moved_piece().square()
    }

    /// Where the moved piece lands (the king's square for a castle)
    #[inline]
    #[must_use]
    pub const fn destination(&self) -> Square {
        match self {
            Move::Quiet { destination, .. }
            | Move::Capture { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::Promotion { destination, .. }
            | Move::EnPassant { destination, .. } => *destination,
            Move::Castle {
                king_destination, ..
            } => *king_destination,
        }
    }

    #[inline]
    #[must_use]
    pub const fn captured_piece(&self) -> Option<&Piece> {
        match self {
            Move::Capture { captured, .. } | Move::EnPassant { captured, .. } => Some(captured),
            Move::Promotion { captured, .. } => captured.as_ref(),
            Move::Quiet { .. } | Move::PawnJump { .. } | Move::Castle { .. } => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self, Move::Promotion { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn_jump(&self) -> bool {
        matches!(self, Move::PawnJump { .. })
    }

    /// True if the moved piece could capture on the destination square.
    ///
    /// Pawn pushes and castles land on squares they do not attack.
    #[must_use]
    pub const fn threatens_destination(&self) -> bool {
        match self {
            Move::Quiet { piece, .. } => !piece.is_pawn(),
            Move::Promotion { captured, .. } => captured.is_some(),
            Move::PawnJump { .. } | Move::Castle { .. } => false,
            Move::Capture { .. } | Move::EnPassant { .. } => true,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let piece = self.moved_piece();
        match self {
            Move::Castle {
                side: CastleSide::KingSide,
                ..
            } => write!(f, "O-O"),
            Move::Castle {
                side: CastleSide::QueenSide,
                ..
            } => write!(f, "O-O-O"),
            Move::Quiet { destination, .. } | Move::PawnJump { destination, .. }
                if piece.is_pawn() =>
            {
                write!(f, "{destination}")
            }
            Move::Quiet { destination, .. } | Move::PawnJump { destination, .. } => {
                write!(f, "{}{destination}", piece.kind())
            }
            Move::Capture { destination, .. } | Move::EnPassant { destination, .. }
                if piece.is_pawn() =>
            {
                let file = piece.square().to_string();
                write!(f, "{}x{destination}", &file[..1])
            }
            Move::Capture { destination, .. } | Move::EnPassant { destination, .. } => {
                write!(f, "{}x{destination}", piece.kind())
            }
            Move::Promotion {
                destination,
                captured,
                ..
            } => {
                if captured.is_some() {
                    let file = piece.square().to_string();
                    write!(f, "{}x", &file[..1])?;
                }
                write!(f, "{destination}={}", PieceKind::Queen)
            }
        }
    }
}
