//! Per-side legality and the check / checkmate / stalemate predicates.

use super::state::Board;
use super::transition::{MoveStatus, MoveTransition};
use super::{Alliance, Move, Piece, Position, PositionError, Square};

/// What a position knows about one side, computed once at construction.
#[derive(Clone, Debug)]
pub(crate) struct PlayerState {
    alliance: Alliance,
    king: Piece,
    legal_moves: Vec<Move>,
    in_check: bool,
}

impl PlayerState {
    pub(crate) fn new(
        alliance: Alliance,
        board: &Board,
        own_moves: &[Move],
        opponent_moves: &[Move],
    ) -> Result<Self, PositionError> {
        let king = establish_king(board, alliance)?;
        let in_check = attacks_on(king.square(), opponent_moves).next().is_some();

        let mut legal_moves = own_moves.to_vec();
        legal_moves.extend(board.king_castles(&king, opponent_moves));

        Ok(PlayerState {
            alliance,
            king,
            legal_moves,
            in_check,
        })
    }

    pub(crate) fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }
}

fn establish_king(board: &Board, alliance: Alliance) -> Result<Piece, PositionError> {
    let mut kings = board.active_pieces(alliance).filter(|p| p.is_king());
    let king = *kings.next().ok_or(PositionError::MissingKing { alliance })?;
    let extra = kings.count();
    if extra > 0 {
        return Err(PositionError::MultipleKings {
            alliance,
            count: extra + 1,
        });
    }
    Ok(king)
}

/// Moves in `moves` that land on `square`.
pub(crate) fn attacks_on(square: Square, moves: &[Move]) -> impl Iterator<Item = &Move> {
    moves.iter().filter(move |m| m.destination() == square)
}

/// One side of a [`Position`], borrowed from it.
#[derive(Clone, Copy, Debug)]
pub struct Player<'a> {
    position: &'a Position,
    state: &'a PlayerState,
}

impl<'a> Player<'a> {
    pub(crate) fn new(position: &'a Position, state: &'a PlayerState) -> Self {
        Player { position, state }
    }

    #[must_use]
    pub fn alliance(&self) -> Alliance {
        self.state.alliance
    }

    #[must_use]
    pub fn king(&self) -> &'a Piece {
        &self.state.king
    }

    /// Pseudo-legal moves plus castles. Use [`Player::attempt`] to find out
    /// whether a move is actually playable.
    #[must_use]
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.state.legal_moves
    }

    pub fn active_pieces(&self) -> impl Iterator<Item = &'a Piece> + 'a {
        self.position.board().active_pieces(self.state.alliance)
    }

    #[must_use]
    pub fn opponent(&self) -> Player<'a> {
        self.position.player(self.state.alliance.opponent())
    }

    #[must_use]
    pub fn position(&self) -> &'a Position {
        self.position
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.state.in_check
    }

    #[must_use]
    pub fn is_in_check_mate(&self) -> bool {
        self.state.in_check && !self.has_escape_moves()
    }

    #[must_use]
    pub fn is_in_stale_mate(&self) -> bool {
        !self.state.in_check && !self.has_escape_moves()
    }

    #[must_use]
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.state.legal_moves.contains(mv)
    }

    /// Try `mv` and report the outcome.
    ///
    /// Rejected attempts carry the unchanged position; a successful one
    /// carries the position after the move.
    #[must_use]
    pub fn attempt(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_move_legal(mv) {
            debug_log!("{} cannot play {mv}: not in its move set", self.alliance());
            return MoveTransition::rejected(self.position, *mv, MoveStatus::IllegalMove);
        }

        let candidate = match mv.execute(self.position) {
            Ok(candidate) => candidate,
            Err(err) => {
                debug_log!("{mv} produced an invalid position: {err}");
                return MoveTransition::rejected(self.position, *mv, MoveStatus::IllegalMove);
            }
        };

        let king_square = candidate.state(self.alliance()).king.square();
        let replies = candidate.state(self.alliance().opponent()).legal_moves();
        if attacks_on(king_square, replies).next().is_some() {
            debug_log!("{} cannot play {mv}: king left in check", self.alliance());
            return MoveTransition::rejected(self.position, *mv, MoveStatus::LeavesSelfInCheck);
        }

        trace_log!("{} played {mv}", self.alliance());
        MoveTransition::done(candidate, *mv)
    }

    /// Moves that attempt to `Done`, in enumeration order.
    pub fn playable_moves(&self) -> impl Iterator<Item = &'a Move> + 'a {
        let player = *self;
        self.legal_moves()
            .iter()
            .filter(move |mv| player.attempt(mv).status().is_done())
    }

    fn has_escape_moves(&self) -> bool {
        self.playable_moves().next().is_some()
    }
}
