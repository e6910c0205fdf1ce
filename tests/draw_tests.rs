mod test_utils;

use mailbox_chess::{
    engine::{Engine, EngineSettings},
    outcome::{MoveHistory, classify},
    types::{GameResult, Move, Side},
};
use test_utils::*;

const KINGS_ONLY: [&str; 8] = [
    "....k...",
    "........",
    "........",
    "........",
    "........",
    "........",
    "........",
    "....K...",
];

const ROOK_SHUFFLE: [&str; 8] = [
    "r......k",
    "........",
    "........",
    "........",
    "........",
    "........",
    "........",
    "R......K",
];

/// Four quiet half-moves that return to the starting arrangement
fn shuffle_cycle() -> [Move; 4] {
    [mv(7, 0, 6, 0), mv(0, 0, 1, 0), mv(6, 0, 7, 0), mv(1, 0, 0, 0)]
}

fn play_quiet_moves(engine: &mut Engine, count: usize) {
    play_quiet_moves_from(engine, 0, count);
}

fn play_quiet_moves_from(engine: &mut Engine, skip: usize, count: usize) {
    let moves: Vec<Move> = shuffle_cycle()
        .into_iter()
        .cycle()
        .skip(skip)
        .take(count)
        .collect();
    play(engine, &moves);
}

#[test]
fn test_bare_kings_are_a_draw_for_either_side_to_move() {
    let position = position_from_diagram(KINGS_ONLY);
    let history = MoveHistory::new(&position);

    for side in [Side::White, Side::Black] {
        assert_eq!(
            classify(&position, side, &history),
            GameResult::DrawByInsufficientMaterial,
            "{:?} to move",
            side
        );
    }
}

#[test]
fn test_capturing_the_last_piece_draws() {
    let mut engine = engine_from_diagram(
        [
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "...n....",
            "....K...",
        ],
        Side::White,
    );

    let result = engine.try_move(mv(7, 4, 6, 3)).unwrap();

    assert_eq!(result, GameResult::DrawByInsufficientMaterial);
    assert!(engine.is_game_over());
    assert!(engine.all_legal_moves().is_empty());
}

#[test]
fn test_king_and_minor_piece_is_not_insufficient() {
    let engine = engine_from_diagram(
        [
            "....k...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "...B....",
            "....K...",
        ],
        Side::Black,
    );

    // Only the two-piece case counts as insufficient material
    assert_eq!(engine.result(), GameResult::InProgress);
}

#[test]
fn test_no_progress_draw_at_fifty_quiet_half_moves() {
    let mut engine = engine_from_diagram(ROOK_SHUFFLE, Side::White);

    play_quiet_moves(&mut engine, 49);
    assert_eq!(engine.history().no_progress_count(), 49);
    assert_eq!(engine.result(), GameResult::InProgress);

    let result = engine.try_move(mv(0, 0, 1, 0)).unwrap();

    assert_eq!(engine.history().no_progress_count(), 50);
    assert_eq!(result, GameResult::DrawByNoProgress);
    assert!(engine.try_move(mv(6, 0, 7, 0)).is_err());
}

#[test]
fn test_capture_resets_no_progress_count() {
    let mut engine = engine_from_diagram(ROOK_SHUFFLE, Side::White);

    play_quiet_moves(&mut engine, 49);

    // White's rook sits on (6, 0) with the file open
    let result = engine.try_move(mv(0, 0, 6, 0)).unwrap();

    assert_eq!(engine.history().no_progress_count(), 0);
    assert_eq!(result, GameResult::InProgress);
}

#[test]
fn test_no_progress_limit_is_configurable() {
    let settings = EngineSettings {
        no_progress_limit: 4,
        seed: Some(0),
        ..EngineSettings::default()
    };
    let mut engine =
        Engine::from_position(position_from_diagram(ROOK_SHUFFLE), Side::White, settings);

    play_quiet_moves(&mut engine, 3);
    assert_eq!(engine.result(), GameResult::InProgress);

    play_quiet_moves_from(&mut engine, 3, 1);
    assert_eq!(engine.result(), GameResult::DrawByNoProgress);
}

#[test]
fn test_stalemate() {
    let mut engine = engine_from_diagram(
        [
            "k.......",
            "........",
            "........",
            ".Q......",
            "........",
            "........",
            "........",
            ".......K",
        ],
        Side::White,
    );

    let result = engine.try_move(mv(3, 1, 2, 1)).unwrap();

    assert_eq!(result, GameResult::Stalemate);
    assert!(!engine.in_check());
    assert_eq!(result.winner(), None);
}

#[test]
fn test_insufficient_material_takes_priority_over_no_progress() {
    let position = position_from_diagram(KINGS_ONLY);
    let mut history = MoveHistory::new(&position);

    for _ in 0..60 {
        history.record(mv(7, 4, 7, 3), &position);
    }

    assert_eq!(
        classify(&position, Side::White, &history),
        GameResult::DrawByInsufficientMaterial
    );
}
