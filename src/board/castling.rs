//! Castle candidate generation.

use super::movegen::pawn_attacks;
use super::state::Board;
use super::types::CastleSide;
use super::{Alliance, Move, Piece, Square};

const WHITE_KING_HOME: usize = 60;
const BLACK_KING_HOME: usize = 4;

/// Squares involved in one castle, as offsets from the king's home square.
struct CastleLane {
    side: CastleSide,
    rook: isize,
    /// Squares strictly between king and rook; must be empty.
    between: &'static [isize],
    /// Squares the king stands on or crosses; must not be attacked.
    transit: &'static [isize],
    king_destination: isize,
    rook_destination: isize,
}

const LANES: [CastleLane; 2] = [
    CastleLane {
        side: CastleSide::KingSide,
        rook: 3,
        between: &[1, 2],
        transit: &[0, 1, 2],
        king_destination: 2,
        rook_destination: 1,
    },
    CastleLane {
        side: CastleSide::QueenSide,
        rook: -4,
        between: &[-1, -2, -3],
        transit: &[0, -1, -2],
        king_destination: -2,
        rook_destination: -1,
    },
];

const fn king_home(alliance: Alliance) -> Square {
    match alliance {
        Alliance::White => Square::from_index(WHITE_KING_HOME),
        Alliance::Black => Square::from_index(BLACK_KING_HOME),
    }
}

impl Board {
    /// Castles available to `king`'s side given the opponent's pseudo-legal moves.
    pub(crate) fn king_castles(&self, king: &Piece, opponent_moves: &[Move]) -> Vec<Move> {
        let alliance = king.alliance();
        let home = king_home(alliance);
        if !king.is_first_move() || king.square() != home {
            return Vec::new();
        }

        let mut castles = Vec::new();
        for lane in &LANES {
            let Some(rook) = home.offset(lane.rook).and_then(|sq| self.piece_at(sq)) else {
                continue;
            };
            if !rook.is_rook() || rook.alliance() != alliance || !rook.is_first_move() {
                continue;
            }

            let path_clear = lane
                .between
                .iter()
                .filter_map(|&offset| home.offset(offset))
                .all(|sq| !self.is_occupied(sq));
            if !path_clear {
                continue;
            }

            let path_safe = lane
                .transit
                .iter()
                .filter_map(|&offset| home.offset(offset))
                .all(|sq| !self.is_attacked(sq, alliance.opponent(), opponent_moves));
            if !path_safe {
                continue;
            }

            let (Some(king_destination), Some(rook_destination)) = (
                home.offset(lane.king_destination),
                home.offset(lane.rook_destination),
            ) else {
                continue;
            };
            trace_log!("{alliance} may castle {:?}", lane.side);
            castles.push(Move::Castle {
                side: lane.side,
                king: *king,
                king_destination,
                rook: *rook,
                rook_destination,
            });
        }
        castles
    }

    /// True if `attacker` could capture on `square`: one of its pseudo-legal
    /// moves threatens it, or one of its pawns covers it diagonally.
    pub(crate) fn is_attacked(&self, square: Square, attacker: Alliance, attacker_moves: &[Move]) -> bool {
        attacker_moves
            .iter()
            .any(|m| m.destination() == square && m.threatens_destination())
            || self
                .active_pieces(attacker)
                .filter(|p| p.is_pawn())
                .any(|pawn| pawn_attacks(pawn).any(|sq| sq == square))
    }
}
