//! Error types for position construction and notation.

use std::fmt;

use super::types::Alliance;

/// Error type for positions that are not valid chess positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// No king of this alliance on the board
    MissingKing { alliance: Alliance },
    /// More than one king of this alliance on the board
    MultipleKings { alliance: Alliance, count: usize },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { alliance } => {
                write!(f, "The {alliance} king is missing, not a valid position")
            }
            PositionError::MultipleKings { alliance, count } => {
                write!(f, "Found {count} {alliance} kings, expected exactly one")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
