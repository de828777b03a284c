//! Move execution.
//!
//! Executing never touches the source position: the next position is built
//! from scratch with the moved pieces relocated and the captured piece left out.

use super::{Move, Position, PositionBuilder, PositionError};

impl Move {
    /// Play this move on `position`, producing the next position.
    ///
    /// The side to move passes to the moved piece's opponent. Only a pawn
    /// double step leaves an en-passant target behind.
    ///
    /// # Errors
    /// Returns `PositionError` if the result lacks a king for either side,
    /// which only happens when a move captures a king.
    pub fn execute(&self, position: &Position) -> Result<Position, PositionError> {
        let mover = self.moved_piece();
        let mut builder = PositionBuilder::new();

        for piece in position.board().pieces() {
            builder = builder.piece(*piece);
        }
        if let Some(captured) = self.captured_piece() {
            builder = builder.clear(captured.square());
        }
        builder = builder.clear(mover.square());

        builder = match self {
            Move::Quiet { piece, destination }
            | Move::Capture {
                piece, destination, ..
            }
            | Move::EnPassant {
                piece, destination, ..
            } => builder.piece(piece.moved_to(*destination)),
            Move::PawnJump { piece, destination } => {
                let pawn = piece.moved_to(*destination);
                builder.piece(pawn).en_passant_pawn(pawn)
            }
            Move::Promotion {
                piece, destination, ..
            } => builder.piece(piece.promoted_to_queen(*destination)),
            Move::Castle {
                king,
                king_destination,
                rook,
                rook_destination,
                ..
            } => builder
                .clear(rook.square())
                .piece(king.moved_to(*king_destination))
                .piece(rook.moved_to(*rook_destination)),
        };

        builder.side_to_move(mover.alliance().opponent()).build()
    }
}
