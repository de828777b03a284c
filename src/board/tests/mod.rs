//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece pseudo-legal generation and edge wrapping
//! - `edge_cases.rs` - En passant, promotion and castling rules
//! - `terminal.rs` - Check, checkmate, stalemate and attempt statuses
//! - `perft.rs` - Move path counts against reference positions
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;

use crate::board::{Alliance, MoveStatus, Piece, PieceKind, Position, PositionBuilder, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Build a position from the piece-placement field of a FEN string.
///
/// Every piece is treated as unmoved.
pub(super) fn position_from_placement(placement: &str, side_to_move: Alliance) -> Position {
    let mut builder = PositionBuilder::new().side_to_move(side_to_move);
    let mut idx = 0;
    for c in placement.chars() {
        match c {
            '/' => {}
            '1'..='8' => idx += c.to_digit(10).unwrap() as usize,
            _ => {
                let kind = PieceKind::from_char(c).unwrap();
                let alliance = if c.is_ascii_uppercase() {
                    Alliance::White
                } else {
                    Alliance::Black
                };
                builder = builder.piece(Piece::new(kind, alliance, Square::new(idx).unwrap()));
                idx += 1;
            }
        }
    }
    assert_eq!(idx, 64, "placement must cover the whole board");
    builder.build().unwrap()
}

/// Play the current mover's move between two squares, asserting it is legal.
pub(super) fn play(position: &Position, from: &str, to: &str) -> Position {
    let mv = position
        .find_move(sq(from), sq(to))
        .unwrap_or_else(|| panic!("no move {from}-{to} in position\n{position}"));
    let transition = position.current_mover().attempt(&mv);
    assert_eq!(transition.status(), MoveStatus::Done, "{from}-{to} was rejected");
    transition.into_position()
}
