use super::super::geometry::crosses_file_edge;
use super::super::state::Board;
use super::super::{Move, Piece};
use super::sliders::QUEEN_VECTORS;

impl Board {
    /// Single steps only. Castling is added by the player state, which knows
    /// the opponent's moves.
    pub(crate) fn generate_king_moves(&self, king: &Piece) -> Vec<Move> {
        let from = king.square();
        QUEEN_VECTORS
            .iter()
            .filter(|&&offset| !crosses_file_edge(from, offset))
            .filter_map(|&offset| from.offset(offset))
            .filter_map(|destination| self.step_move(king, destination))
            .collect()
    }
}
