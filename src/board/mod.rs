//! Chess position representation and rules.
//!
//! A [`Position`] is an immutable snapshot: 64 tiles, the side to move and
//! the pawn that may be captured en passant. Building one enumerates the
//! pseudo-legal moves of both sides; [`Player::attempt`] is the legality gate
//! that executes a move and rejects it if it leaves the mover's king in check.
//!
//! # Example
//! ```
//! use chess_rules::board::{MoveStatus, Position, Square};
//!
//! let position = Position::standard();
//! let e2: Square = "e2".parse().unwrap();
//! let e4: Square = "e4".parse().unwrap();
//! let mv = position.find_move(e2, e4).unwrap();
//! let transition = position.current_mover().attempt(&mv);
//! assert_eq!(transition.status(), MoveStatus::Done);
//! ```

mod builder;
mod castling;
mod display;
mod error;
pub mod geometry;
mod make_move;
mod movegen;
mod perft;
mod player;
pub mod prelude;
mod state;
mod transition;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{PositionError, SquareError};
pub use player::Player;
pub use state::{Board, Position};
pub use transition::{MoveStatus, MoveTransition};
pub use types::{Alliance, CastleSide, Move, Piece, PieceKind, Square, Tile};
