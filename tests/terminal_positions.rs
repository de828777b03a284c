use serde::Deserialize;

use chess_rules::{Alliance, Piece, PieceKind, Position, PositionBuilder, Square};

#[derive(Deserialize)]
struct ScenarioSet {
    positions: Vec<Scenario>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum Side {
    White,
    Black,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum Expectation {
    Checkmate,
    Stalemate,
    Check,
    None,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    to_move: Side,
    pieces: Vec<String>,
    expect: Expectation,
}

/// Parse `"Ke1"` / `"pa7"`: letter case picks the side, then the square.
fn parse_piece(token: &str) -> Piece {
    let mut chars = token.chars();
    let letter = chars.next().expect("empty piece token");
    let kind = PieceKind::from_char(letter).expect("unknown piece letter");
    let alliance = if letter.is_ascii_uppercase() {
        Alliance::White
    } else {
        Alliance::Black
    };
    let square: Square = chars.as_str().parse().expect("bad square");
    Piece::new(kind, alliance, square)
}

fn build(scenario: &Scenario) -> Position {
    let side = match scenario.to_move {
        Side::White => Alliance::White,
        Side::Black => Alliance::Black,
    };
    scenario
        .pieces
        .iter()
        .map(String::as_str)
        .map(parse_piece)
        .fold(PositionBuilder::new().side_to_move(side), PositionBuilder::piece)
        .build()
        .unwrap_or_else(|err| panic!("{}: {err}", scenario.name))
}

fn classify(position: &Position) -> Expectation {
    let mover = position.current_mover();
    if mover.is_in_check_mate() {
        Expectation::Checkmate
    } else if mover.is_in_stale_mate() {
        Expectation::Stalemate
    } else if mover.is_in_check() {
        Expectation::Check
    } else {
        Expectation::None
    }
}

fn load() -> ScenarioSet {
    let data = include_str!("data/terminal_positions.json");
    serde_json::from_str(data).expect("invalid terminal_positions.json")
}

#[test]
fn terminal_position_suite() {
    let set = load();
    assert!(!set.positions.is_empty());

    for scenario in &set.positions {
        let position = build(scenario);
        assert_eq!(classify(&position), scenario.expect, "{}", scenario.name);
    }
}

#[test]
fn terminal_positions_have_no_playable_moves() {
    for scenario in load().positions {
        let position = build(&scenario);
        let playable = position.current_mover().playable_moves().count();
        match scenario.expect {
            Expectation::Checkmate | Expectation::Stalemate => {
                assert_eq!(playable, 0, "{}", scenario.name);
            }
            Expectation::Check | Expectation::None => {
                assert!(playable > 0, "{}", scenario.name);
            }
        }
    }
}

#[test]
fn initial_scenario_matches_standard_position() {
    let set = load();
    let initial = set
        .positions
        .iter()
        .find(|s| s.name == "Initial position")
        .expect("suite lists the initial position");
    assert_eq!(build(initial).board(), Position::standard().board());
}
