//! Pseudo-legal generation per piece.

use super::{position_from_placement, sq};
use crate::board::{Alliance, Move, Piece, PieceKind, Position, PositionBuilder, Square};

fn moves_of(position: &Position, square: &str) -> Vec<Move> {
    let piece = position.piece_at(sq(square)).unwrap();
    piece.legal_moves(position.board())
}

/// White `kind` on `square` with only the two kings elsewhere.
fn lone_piece(kind: PieceKind, square: Square) -> Position {
    PositionBuilder::new()
        .piece(Piece::new(PieceKind::King, Alliance::White, sq("h1")))
        .piece(Piece::new(PieceKind::King, Alliance::Black, sq("a8")))
        .piece(Piece::new(kind, Alliance::White, square))
        .build()
        .unwrap()
}

fn distance(from: Square, to: Square) -> (usize, usize) {
    (from.file().abs_diff(to.file()), from.rank().abs_diff(to.rank()))
}

/// True if `to` is reachable from `from` by the piece's pattern on a real board.
fn follows_pattern(kind: PieceKind, from: Square, to: Square) -> bool {
    let (df, dr) = distance(from, to);
    let diagonal = df == dr && df > 0;
    let straight = (df == 0) != (dr == 0);
    match kind {
        PieceKind::Pawn => df <= 1 && (1..=2).contains(&dr),
        PieceKind::Knight => (df, dr) == (1, 2) || (df, dr) == (2, 1),
        PieceKind::Bishop => diagonal,
        PieceKind::Rook => straight,
        PieceKind::Queen => diagonal || straight,
        PieceKind::King => df <= 1 && dr <= 1 && df + dr > 0,
    }
}

#[test]
fn test_starting_position_move_counts() {
    let position = Position::standard();
    assert_eq!(position.white_player().legal_moves().len(), 20);
    assert_eq!(position.black_player().legal_moves().len(), 20);
    assert_eq!(position.all_legal_moves().count(), 40);
}

#[test]
fn test_knight_counts() {
    assert_eq!(moves_of(&lone_piece(PieceKind::Knight, sq("d4")), "d4").len(), 8);
    assert_eq!(moves_of(&lone_piece(PieceKind::Knight, sq("a1")), "a1").len(), 2);
    assert_eq!(moves_of(&lone_piece(PieceKind::Knight, sq("h8")), "h8").len(), 2);
    assert_eq!(moves_of(&lone_piece(PieceKind::Knight, sq("b7")), "b7").len(), 4);
    assert_eq!(moves_of(&lone_piece(PieceKind::Knight, sq("g2")), "g2").len(), 4);
}

#[test]
fn test_slider_counts() {
    assert_eq!(moves_of(&lone_piece(PieceKind::Queen, sq("d4")), "d4").len(), 27);
    assert_eq!(moves_of(&lone_piece(PieceKind::Rook, sq("d4")), "d4").len(), 14);
    assert_eq!(moves_of(&lone_piece(PieceKind::Bishop, sq("d4")), "d4").len(), 13);
    assert_eq!(moves_of(&lone_piece(PieceKind::Bishop, sq("a4")), "a4").len(), 7);
}

#[test]
fn test_king_counts() {
    let position = PositionBuilder::new()
        .piece(Piece::new(PieceKind::King, Alliance::White, sq("d4")))
        .piece(Piece::new(PieceKind::King, Alliance::Black, sq("a8")))
        .build()
        .unwrap();
    assert_eq!(moves_of(&position, "d4").len(), 8);
    assert_eq!(moves_of(&position, "a8").len(), 3);
}

#[test]
fn test_no_piece_wraps_around_an_edge() {
    let kinds = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];
    for square in Square::all() {
        if square == sq("h1") || square == sq("a8") {
            continue;
        }
        for kind in kinds {
            let position = lone_piece(kind, square);
            for mv in moves_of(&position, &square.to_string()) {
                assert!(
                    follows_pattern(kind, square, mv.destination()),
                    "{kind} on {square} generated {}",
                    mv.destination()
                );
            }
        }
    }
}

#[test]
fn test_king_never_wraps() {
    for square in Square::all() {
        if square == sq("a8") || square == sq("b8") || square == sq("a7") || square == sq("b7") {
            continue;
        }
        let position = PositionBuilder::new()
            .piece(Piece::new(PieceKind::King, Alliance::White, square))
            .piece(Piece::new(PieceKind::King, Alliance::Black, sq("a8")))
            .build()
            .unwrap();
        for mv in moves_of(&position, &square.to_string()) {
            assert!(follows_pattern(PieceKind::King, square, mv.destination()));
        }
    }
}

#[test]
fn test_sliders_stop_at_blockers() {
    // Rook on a1, own pawn a3, enemy knight d1.
    let position = position_from_placement("k7/8/8/8/8/P7/8/R2n3K", Alliance::White);
    let moves = moves_of(&position, "a1");
    let destinations: Vec<String> = moves.iter().map(|m| m.destination().to_string()).collect();
    assert_eq!(moves.len(), 4);
    for expected in ["a2", "b1", "c1", "d1"] {
        assert!(destinations.contains(&expected.to_string()));
    }
    let capture = moves.iter().find(|m| m.destination() == sq("d1")).unwrap();
    assert!(capture.is_capture());
    assert_eq!(capture.captured_piece().unwrap().kind(), PieceKind::Knight);
}

#[test]
fn test_knight_does_not_capture_own_piece() {
    let position = Position::standard();
    let moves = moves_of(&position, "g1");
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| !m.is_capture()));
}

#[test]
fn test_pawn_first_move_and_blocking() {
    let position = Position::standard();
    let moves = moves_of(&position, "e2");
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().any(Move::is_pawn_jump));

    // A piece right in front blocks both steps.
    let blocked = position_from_placement("4k3/8/8/8/8/4n3/4P3/4K3", Alliance::White);
    assert!(moves_of(&blocked, "e2").is_empty());

    // A piece two squares ahead blocks only the double step.
    let half = position_from_placement("4k3/8/8/8/4n3/8/4P3/4K3", Alliance::White);
    let moves = moves_of(&half, "e2");
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].destination(), sq("e3"));
}

#[test]
fn test_moved_pawn_has_no_double_step() {
    let position = PositionBuilder::new()
        .piece(Piece::new(PieceKind::King, Alliance::White, sq("e1")))
        .piece(Piece::new(PieceKind::King, Alliance::Black, sq("e8")))
        .piece(Piece::moved(PieceKind::Pawn, Alliance::White, sq("a2")))
        .build()
        .unwrap();
    let moves = moves_of(&position, "a2");
    assert_eq!(moves.len(), 1);
    assert!(!moves[0].is_pawn_jump());
}

#[test]
fn test_pawn_captures_on_edge_files() {
    // White pawn on a4 may take b5 but never wraps to h-file; black pawn on h5 takes g4.
    let position = position_from_placement("4k3/8/8/1p5p/P5P1/8/8/4K3", Alliance::White);
    let moves = moves_of(&position, "a4");
    assert_eq!(moves.len(), 2);
    assert!(moves
        .iter()
        .any(|m| m.is_capture() && m.destination() == sq("b5")));

    let moves = moves_of(&position, "h5");
    assert_eq!(moves.len(), 2);
    assert!(moves
        .iter()
        .any(|m| m.is_capture() && m.destination() == sq("g4")));
}
