//! Core chess types.
//!
//! - `PieceKind`, `Alliance` and `Piece` - piece identity and ownership
//! - `Square` - board location with algebraic notation
//! - `Tile` - a square and its occupant
//! - `Move` - the six move variants

mod moves;
mod piece;
mod square;
mod tile;

pub use moves::{CastleSide, Move};
pub use piece::{Alliance, Piece, PieceKind};
pub use square::Square;
pub use tile::Tile;
