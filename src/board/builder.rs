//! Fluent builder for constructing chess positions.
//!
//! Used both for the standard setup and for arbitrary test or puzzle
//! positions. The builder is consumed by [`PositionBuilder::build`], which
//! enumerates moves for both sides and returns an immutable [`Position`].
//!
//! # Example
//! ```
//! use chess_rules::{Alliance, Piece, PieceKind, PositionBuilder, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let a2: Square = "a2".parse().unwrap();
//! let position = PositionBuilder::new()
//!     .piece(Piece::new(PieceKind::King, Alliance::White, e1))
//!     .piece(Piece::new(PieceKind::King, Alliance::Black, e8))
//!     .piece(Piece::new(PieceKind::Pawn, Alliance::White, a2))
//!     .side_to_move(Alliance::White)
//!     .build()
//!     .unwrap();
//! assert!(!position.current_mover().is_in_check());
//! ```

use std::collections::BTreeMap;

use super::state::Board;
use super::{Alliance, Piece, PieceKind, Position, PositionError, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    placements: BTreeMap<Square, Piece>,
    side_to_move: Alliance,
    en_passant_pawn: Option<Piece>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder, White to move.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            placements: BTreeMap::new(),
            side_to_move: Alliance::White,
            en_passant_pawn: None,
        }
    }

    /// Create a builder holding the standard initial arrangement.
    #[must_use]
    pub fn standard() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            builder = builder
                .piece(Piece::new(kind, Alliance::Black, Square::from_index(file)))
                .piece(Piece::new(
                    PieceKind::Pawn,
                    Alliance::Black,
                    Square::from_index(8 + file),
                ))
                .piece(Piece::new(
                    PieceKind::Pawn,
                    Alliance::White,
                    Square::from_index(48 + file),
                ))
                .piece(Piece::new(kind, Alliance::White, Square::from_index(56 + file)));
        }

        builder.side_to_move(Alliance::White)
    }

    /// Place a piece on its square, replacing any previous occupant.
    #[must_use]
    pub fn piece(mut self, piece: Piece) -> Self {
        self.placements.insert(piece.square(), piece);
        self
    }

    /// Remove whatever stands on a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.placements.remove(&square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn side_to_move(mut self, alliance: Alliance) -> Self {
        self.side_to_move = alliance;
        self
    }

    /// Mark a pawn as capturable en passant on the next ply.
    #[must_use]
    pub fn en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Build the position.
    ///
    /// # Errors
    /// Returns `PositionError` unless each side has exactly one king.
    pub fn build(self) -> Result<Position, PositionError> {
        let board = Board::new(&self.placements, self.en_passant_pawn);
        Position::new(board, self.side_to_move).map_err(|err| {
            debug_log!("rejected position: {err}");
            err
        })
    }
}
