use super::super::geometry::crosses_file_edge;
use super::super::state::Board;
use super::super::{Move, Piece};

const BISHOP_VECTORS: [isize; 4] = [-9, -7, 7, 9];
const ROOK_VECTORS: [isize; 4] = [-8, -1, 1, 8];
pub(super) const QUEEN_VECTORS: [isize; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    const fn vectors(self) -> &'static [isize] {
        match self {
            SliderType::Bishop => &BISHOP_VECTORS,
            SliderType::Rook => &ROOK_VECTORS,
            SliderType::Queen => &QUEEN_VECTORS,
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(&self, piece: &Piece, slider: SliderType) -> Vec<Move> {
        let mut moves = Vec::new();

        for &vector in slider.vectors() {
            let mut current = piece.square();
            // The edge guard runs before every step so a ray never wraps.
            while !crosses_file_edge(current, vector) {
                let Some(next) = current.offset(vector) else {
                    break;
                };
                match self.piece_at(next) {
                    None => moves.push(Move::Quiet {
                        piece: *piece,
                        destination: next,
                    }),
                    Some(occupant) => {
                        if occupant.alliance() != piece.alliance() {
                            moves.push(Move::Capture {
                                piece: *piece,
                                destination: next,
                                captured: *occupant,
                            });
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        moves
    }
}
