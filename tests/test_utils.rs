#![allow(dead_code)]

/// Shared helpers for building positions and counting moves
use mailbox_chess::{
    engine::{Engine, EngineSettings},
    legality::all_legal_moves,
    position::Position,
    types::{Move, Piece, Side, Square},
};

pub fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("Test square out of range")
}

pub fn mv(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Move {
    Move::new(sq(from_row, from_col), sq(to_row, to_col))
}

/// Builds a position from eight rows of eight characters, row 0 first.
/// Uppercase is White, lowercase is Black, `.` is empty. No square is
/// marked as moved and there is no last move.
pub fn position_from_diagram(rows: [&str; 8]) -> Position {
    let mut position = Position::empty();

    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "Diagram row {} must have 8 squares", row);

        for (col, letter) in line.chars().enumerate() {
            if letter == '.' {
                continue;
            }

            let piece = Piece::try_from(letter)
                .unwrap_or_else(|e| panic!("Bad diagram letter {:?}: {}", letter, e));
            position.place_piece(sq(row as u8, col as u8), piece);
        }
    }

    position
}

pub fn engine_from_diagram(rows: [&str; 8], side_to_move: Side) -> Engine {
    let settings = EngineSettings {
        seed: Some(0),
        ..EngineSettings::default()
    };

    Engine::from_position(position_from_diagram(rows), side_to_move, settings)
}

pub fn destinations(moves: &[Move]) -> Vec<Square> {
    moves.iter().map(|move_| move_.to).collect()
}

/// Plays each move through the engine, panicking on the first rejection
pub fn play(engine: &mut Engine, moves: &[Move]) {
    for &move_ in moves {
        engine
            .try_move(move_)
            .unwrap_or_else(|e| panic!("{:?} rejected: {}\n{}", move_, e, engine.position()));
    }
}

/// Number of leaf positions `depth` half-moves ahead
pub fn perft(position: &Position, side: Side, depth: usize) -> u64 {
    let moves = all_legal_moves(position, side);

    if depth <= 1 {
        return if depth == 0 { 1 } else { moves.len() as u64 };
    }

    moves
        .into_iter()
        .map(|move_| {
            let mut copy = position.clone();
            copy.execute(move_);
            perft(&copy, side.opponent(), depth - 1)
        })
        .sum()
}
