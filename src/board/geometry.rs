//! Static board-shape tables.
//!
//! Offset-based move generation adds a signed delta to a square index. The
//! file masks here tell a generator when a delta would leave the board on one
//! edge and reappear on the other.

use super::types::Square;

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

pub const FIRST_FILE: [bool; NUM_TILES] = file_mask(0);
pub const SECOND_FILE: [bool; NUM_TILES] = file_mask(1);
pub const SEVENTH_FILE: [bool; NUM_TILES] = file_mask(6);
pub const EIGHTH_FILE: [bool; NUM_TILES] = file_mask(7);

pub const FIRST_RANK: [bool; NUM_TILES] = rank_mask(1);
pub const SECOND_RANK: [bool; NUM_TILES] = rank_mask(2);
pub const SEVENTH_RANK: [bool; NUM_TILES] = rank_mask(7);
pub const EIGHTH_RANK: [bool; NUM_TILES] = rank_mask(8);

const fn file_mask(file: usize) -> [bool; NUM_TILES] {
    let mut mask = [false; NUM_TILES];
    let mut idx = file;
    while idx < NUM_TILES {
        mask[idx] = true;
        idx += NUM_TILES_PER_ROW;
    }
    mask
}

/// `rank` is the chess rank 1-8; rank 8 is row 0 of the index layout.
const fn rank_mask(rank: usize) -> [bool; NUM_TILES] {
    let mut mask = [false; NUM_TILES];
    let start = (NUM_TILES_PER_ROW - rank) * NUM_TILES_PER_ROW;
    let mut idx = start;
    while idx < start + NUM_TILES_PER_ROW {
        mask[idx] = true;
        idx += 1;
    }
    mask
}

#[inline]
#[must_use]
pub const fn is_valid_index(index: isize) -> bool {
    index >= 0 && index < NUM_TILES as isize
}

/// True if a one-square king or slider step of `offset` from `from` would
/// wrap around the a- or h-file.
#[inline]
pub(crate) const fn crosses_file_edge(from: Square, offset: isize) -> bool {
    is_first_file_exclusion(from, offset) || is_eighth_file_exclusion(from, offset)
}

const fn is_first_file_exclusion(from: Square, offset: isize) -> bool {
    FIRST_FILE[from.index()] && matches!(offset, -9 | -1 | 7)
}

const fn is_eighth_file_exclusion(from: Square, offset: isize) -> bool {
    EIGHTH_FILE[from.index()] && matches!(offset, -7 | 1 | 9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_masks() {
        assert!(FIRST_FILE[0] && FIRST_FILE[56]);
        assert!(!FIRST_FILE[1]);
        assert!(EIGHTH_FILE[7] && EIGHTH_FILE[63]);
        assert!(SECOND_FILE[9] && SEVENTH_FILE[14]);
        assert_eq!(FIRST_FILE.iter().filter(|&&b| b).count(), 8);
    }

    #[test]
    fn test_rank_masks() {
        assert!(EIGHTH_RANK[0] && EIGHTH_RANK[7] && !EIGHTH_RANK[8]);
        assert!(FIRST_RANK[56] && FIRST_RANK[63]);
        assert!(SECOND_RANK[48] && SECOND_RANK[55] && !SECOND_RANK[56]);
        assert!(SEVENTH_RANK[8] && SEVENTH_RANK[15]);
        assert_eq!(SEVENTH_RANK.iter().filter(|&&b| b).count(), 8);
    }

    #[test]
    fn test_valid_index() {
        assert!(is_valid_index(0));
        assert!(is_valid_index(63));
        assert!(!is_valid_index(-1));
        assert!(!is_valid_index(64));
    }

    #[test]
    fn test_edge_steps() {
        let a4 = Square::from_index(32);
        assert!(crosses_file_edge(a4, -1));
        assert!(crosses_file_edge(a4, 7));
        assert!(!crosses_file_edge(a4, 1));
        let h4 = Square::from_index(39);
        assert!(crosses_file_edge(h4, 1));
        assert!(crosses_file_edge(h4, -7));
        assert!(!crosses_file_edge(h4, -8));
    }
}
