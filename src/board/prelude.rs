//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::standard();
//! assert_eq!(position.current_mover().alliance(), Alliance::White);
//! ```

pub use super::{
    Alliance, Move, MoveStatus, MoveTransition, Piece, PieceKind, Player, Position,
    PositionBuilder, PositionError, Square, SquareError, Tile,
};
