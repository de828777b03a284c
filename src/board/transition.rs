//! Outcome of attempting a move.

use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Move, Position};

/// How an attempted move was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveStatus {
    Done,
    /// Not in the mover's move set.
    IllegalMove,
    /// Playing it would leave the mover's own king attacked.
    LeavesSelfInCheck,
}

impl MoveStatus {
    #[inline]
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

/// The position after an attempt, the move attempted and its status.
///
/// A rejected attempt borrows the original position; a successful one owns
/// the new position.
#[derive(Clone, Debug)]
pub struct MoveTransition<'a> {
    position: Cow<'a, Position>,
    attempted: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn done(position: Position, attempted: Move) -> Self {
        MoveTransition {
            position: Cow::Owned(position),
            attempted,
            status: MoveStatus::Done,
        }
    }

    pub(crate) fn rejected(position: &'a Position, attempted: Move, status: MoveStatus) -> Self {
        MoveTransition {
            position: Cow::Borrowed(position),
            attempted,
            status,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Take the resulting position, cloning it if the attempt was rejected.
    #[must_use]
    pub fn into_position(self) -> Position {
        self.position.into_owned()
    }

    #[must_use]
    pub const fn attempted_move(&self) -> &Move {
        &self.attempted
    }

    #[must_use]
    pub const fn status(&self) -> MoveStatus {
        self.status
    }
}
