use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::geometry::NUM_TILES;
use super::player::{Player, PlayerState};
use super::{Alliance, Move, Piece, PositionBuilder, PositionError, Square, Tile};

static STANDARD_POSITION: Lazy<Position> = Lazy::new(|| {
    PositionBuilder::standard()
        .build()
        .expect("standard layout has one king per side")
});

/// The 64 tiles plus the pawn that may be captured en passant this ply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; NUM_TILES],
    en_passant_pawn: Option<Piece>,
}

impl Board {
    pub(crate) fn new(placements: &BTreeMap<Square, Piece>, en_passant_pawn: Option<Piece>) -> Self {
        let tiles = std::array::from_fn(|idx| {
            let square = Square::from_index(idx);
            Tile::new(square, placements.get(&square).copied())
        });
        Board {
            tiles,
            en_passant_pawn,
        }
    }

    #[inline]
    #[must_use]
    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square.index()]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.tile(square).piece()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.tile(square).is_occupied()
    }

    #[inline]
    #[must_use]
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Every piece on the board in index order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.tiles.iter().filter_map(Tile::piece)
    }

    pub fn active_pieces(&self, alliance: Alliance) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.alliance() == alliance)
    }
}

/// An immutable board snapshot with both sides' move sets computed.
///
/// Built through [`PositionBuilder`]; executing a move yields a new
/// `Position` and leaves this one untouched.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    white: PlayerState,
    black: PlayerState,
    side_to_move: Alliance,
}

impl Position {
    pub(crate) fn new(board: Board, side_to_move: Alliance) -> Result<Self, PositionError> {
        let white_moves = board.generate_pseudo_moves(Alliance::White);
        let black_moves = board.generate_pseudo_moves(Alliance::Black);

        let white = PlayerState::new(Alliance::White, &board, &white_moves, &black_moves)?;
        let black = PlayerState::new(Alliance::Black, &board, &black_moves, &white_moves)?;

        Ok(Position {
            board,
            white,
            black,
            side_to_move,
        })
    }

    /// The standard 32-piece starting position, White to move.
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_POSITION.clone()
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn tile(&self, square: Square) -> &Tile {
        self.board.tile(square)
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    #[must_use]
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.board.en_passant_pawn()
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Alliance {
        self.side_to_move
    }

    pub fn white_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board.active_pieces(Alliance::White)
    }

    pub fn black_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board.active_pieces(Alliance::Black)
    }

    pub(crate) fn state(&self, alliance: Alliance) -> &PlayerState {
        match alliance {
            Alliance::White => &self.white,
            Alliance::Black => &self.black,
        }
    }

    #[must_use]
    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, self.state(alliance))
    }

    #[must_use]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }

    #[must_use]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    /// The side whose turn it is
    #[must_use]
    pub fn current_mover(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    /// Both sides' legal-move sets, White's first.
    ///
    /// Only the current mover's moves can actually be played.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.white
            .legal_moves()
            .iter()
            .chain(self.black.legal_moves().iter())
    }

    /// The current mover's legal move from `from` to `to`, if there is one.
    #[must_use]
    pub fn find_move(&self, from: Square, to: Square) -> Option<Move> {
        self.current_mover()
            .legal_moves()
            .iter()
            .find(|m| m.source() == from && m.destination() == to)
            .copied()
    }
}
