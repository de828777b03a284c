//! A square together with its occupant.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// One of the 64 board tiles.
///
/// An occupied tile is represented by its piece, so the tile's square and the
/// piece's square cannot disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tile {
    Empty(Square),
    Occupied(Piece),
}

impl Tile {
    #[must_use]
    pub fn new(square: Square, occupant: Option<Piece>) -> Self {
        match occupant {
            Some(piece) => Tile::Occupied(piece),
            None => Tile::Empty(square),
        }
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        match self {
            Tile::Empty(square) => *square,
            Tile::Occupied(piece) => piece.square(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty(_) => None,
            Tile::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(_))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty(_) => f.pad("-"),
            Tile::Occupied(piece) => f.pad(piece.glyph().encode_utf8(&mut [0; 4])),
        }
    }
}
