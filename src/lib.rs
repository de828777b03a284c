#[macro_use]
mod logging;

pub mod board;

pub use board::{
    Alliance, Move, MoveStatus, MoveTransition, Piece, PieceKind, Player, Position,
    PositionBuilder, PositionError, Square, Tile,
};
