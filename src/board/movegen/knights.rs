use super::super::geometry::{EIGHTH_FILE, FIRST_FILE, SECOND_FILE, SEVENTH_FILE};
use super::super::state::Board;
use super::super::{Move, Piece, Square};

const CANDIDATE_MOVE_OFFSETS: [isize; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

impl Board {
    pub(crate) fn generate_knight_moves(&self, knight: &Piece) -> Vec<Move> {
        let from = knight.square();
        let mut moves = Vec::new();

        for offset in CANDIDATE_MOVE_OFFSETS {
            if is_file_exclusion(from, offset) {
                continue;
            }
            let Some(destination) = from.offset(offset) else {
                continue;
            };
            moves.extend(self.step_move(knight, destination));
        }
        moves
    }
}

/// Offsets that would wrap a knight from the a/b or g/h files onto the far side.
fn is_file_exclusion(from: Square, offset: isize) -> bool {
    let idx = from.index();
    (FIRST_FILE[idx] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_FILE[idx] && matches!(offset, -10 | 6))
        || (SEVENTH_FILE[idx] && matches!(offset, -6 | 10))
        || (EIGHTH_FILE[idx] && matches!(offset, -15 | -6 | 10 | 17))
}
