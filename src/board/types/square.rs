//! Square type and algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::error::SquareError;
use super::super::geometry::{is_valid_index, NUM_TILES, NUM_TILES_PER_ROW};

/// A board location, index 0-63.
///
/// Index 0 is a8 and index 63 is h1: file = index % 8, row = index / 8
/// counted from Black's back rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square with bounds checking
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_TILES {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Caller guarantees `index < 64`.
    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        Square(index as u8)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File 0-7, where 0 = file a
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.index() % NUM_TILES_PER_ROW
    }

    /// Row 0-7 of the index layout, where 0 = the eighth rank
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / NUM_TILES_PER_ROW
    }

    /// Chess rank 1-8
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        NUM_TILES_PER_ROW - self.row()
    }

    /// The square `delta` indices away, or `None` past either end of the board.
    ///
    /// Only the index range is checked; wrapping across a file edge is the
    /// caller's concern.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: isize) -> Option<Square> {
        let candidate = self.index() as isize + delta;
        if is_valid_index(candidate) {
            Some(Square(candidate as u8))
        } else {
            None
        }
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_TILES).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank())
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::IndexOutOfBounds { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let [file, rank] = s.as_bytes() else {
            return Err(invalid());
        };
        let file = match file {
            b'a'..=b'h' => usize::from(file - b'a'),
            _ => return Err(invalid()),
        };
        let row = match rank {
            b'1'..=b'8' => usize::from(b'8' - rank),
            _ => return Err(invalid()),
        };
        Ok(Square::from_index(row * NUM_TILES_PER_ROW + file))
    }
}
