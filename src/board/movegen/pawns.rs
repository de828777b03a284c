use super::super::geometry::{EIGHTH_FILE, FIRST_FILE};
use super::super::state::Board;
use super::super::{Alliance, Move, Piece, Square};

const SINGLE_STEP: isize = 8;
const DOUBLE_STEP: isize = 16;
/// Diagonal offsets, scaled by the alliance direction.
const CAPTURE_OFFSETS: [isize; 2] = [7, 9];

impl Board {
    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        let alliance = pawn.alliance();
        let from = pawn.square();

        if let Some(destination) = from.offset(alliance.direction() * SINGLE_STEP) {
            if !self.is_occupied(destination) {
                moves.push(if alliance.is_pawn_promotion_square(destination) {
                    Move::Promotion {
                        piece: *pawn,
                        destination,
                        captured: None,
                    }
                } else {
                    Move::Quiet {
                        piece: *pawn,
                        destination,
                    }
                });
            }
        }

        if pawn.is_first_move() && alliance.is_pawn_start_square(from) {
            let between = from.offset(alliance.direction() * SINGLE_STEP);
            let destination = from.offset(alliance.direction() * DOUBLE_STEP);
            if let (Some(between), Some(destination)) = (between, destination) {
                if !self.is_occupied(between) && !self.is_occupied(destination) {
                    moves.push(Move::PawnJump {
                        piece: *pawn,
                        destination,
                    });
                }
            }
        }

        for offset in CAPTURE_OFFSETS {
            if is_diagonal_exclusion(from, alliance, offset) {
                continue;
            }
            let Some(destination) = from.offset(alliance.direction() * offset) else {
                continue;
            };
            moves.extend(self.pawn_capture(pawn, destination, offset));
        }

        moves
    }

    fn pawn_capture(&self, pawn: &Piece, destination: Square, offset: isize) -> Option<Move> {
        match self.piece_at(destination) {
            Some(occupant) if occupant.alliance() != pawn.alliance() => {
                Some(if pawn.alliance().is_pawn_promotion_square(destination) {
                    Move::Promotion {
                        piece: *pawn,
                        destination,
                        captured: Some(*occupant),
                    }
                } else {
                    Move::Capture {
                        piece: *pawn,
                        destination,
                        captured: *occupant,
                    }
                })
            }
            Some(_) => None,
            None => self.en_passant_capture(pawn, destination, offset),
        }
    }

    /// En passant onto the empty diagonal `destination`: the en-passant pawn
    /// must be an opposing pawn, and the board must hold it beside `pawn` on
    /// that diagonal's side.
    fn en_passant_capture(&self, pawn: &Piece, destination: Square, offset: isize) -> Option<Move> {
        let target = self.en_passant_pawn()?;
        let side = if offset == 7 {
            pawn.alliance().opposite_direction()
        } else {
            -pawn.alliance().opposite_direction()
        };
        let beside = pawn.square().offset(side)?;

        if target.is_pawn()
            && target.alliance() != pawn.alliance()
            && self.piece_at(beside) == Some(target)
        {
            Some(Move::EnPassant {
                piece: *pawn,
                destination,
                captured: *target,
            })
        } else {
            None
        }
    }
}

/// True if the diagonal `offset` would wrap off the a- or h-file for this alliance.
fn is_diagonal_exclusion(from: Square, alliance: Alliance, offset: isize) -> bool {
    match (offset, alliance) {
        (7, Alliance::White) | (9, Alliance::Black) => EIGHTH_FILE[from.index()],
        (7, Alliance::Black) | (9, Alliance::White) => FIRST_FILE[from.index()],
        _ => false,
    }
}

/// Squares a pawn attacks diagonally, whether or not anything stands there.
pub(crate) fn pawn_attacks(pawn: &Piece) -> impl Iterator<Item = Square> + '_ {
    CAPTURE_OFFSETS
        .into_iter()
        .filter(move |&offset| !is_diagonal_exclusion(pawn.square(), pawn.alliance(), offset))
        .filter_map(move |offset| pawn.square().offset(pawn.alliance().direction() * offset))
}
