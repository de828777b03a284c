//! Pseudo-legal move generation.
//!
//! Generators follow the piece's movement pattern and board occupancy only.
//! Whether a move leaves the mover's king in check is decided later, when the
//! move is attempted.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use pawns::pawn_attacks;
use sliders::SliderType;

use super::state::Board;
use super::{Alliance, Move, Piece, PieceKind, Square};

impl Piece {
    /// Pseudo-legal moves of this piece on `board`.
    ///
    /// Moves that would leave the own king in check are included; they are
    /// filtered out by [`Player::attempt`](super::Player::attempt).
    #[must_use]
    pub fn legal_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind() {
            PieceKind::Pawn => board.generate_pawn_moves(self),
            PieceKind::Knight => board.generate_knight_moves(self),
            PieceKind::Bishop => board.generate_slider_moves(self, SliderType::Bishop),
            PieceKind::Rook => board.generate_slider_moves(self, SliderType::Rook),
            PieceKind::Queen => board.generate_slider_moves(self, SliderType::Queen),
            PieceKind::King => board.generate_king_moves(self),
        }
    }
}

impl Board {
    pub(crate) fn generate_pseudo_moves(&self, alliance: Alliance) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.active_pieces(alliance) {
            moves.extend(piece.legal_moves(self));
        }
        moves
    }

    /// Quiet move onto an empty square, capture of an opposing piece, or
    /// nothing when the square holds an own piece.
    fn step_move(&self, piece: &Piece, destination: Square) -> Option<Move> {
        match self.piece_at(destination) {
            None => Some(Move::Quiet {
                piece: *piece,
                destination,
            }),
            Some(occupant) if occupant.alliance() != piece.alliance() => Some(Move::Capture {
                piece: *piece,
                destination,
                captured: *occupant,
            }),
            Some(_) => None,
        }
    }
}
