//! Text rendering of a position.

use std::fmt;

use super::geometry::NUM_TILES_PER_ROW;
use super::state::Board;
use super::Position;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, tile) in self.tiles().enumerate() {
            write!(f, "{tile:>3}")?;
            if (idx + 1) % NUM_TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board())
    }
}
