use crate::{
    constants::NUM_SQUARES,
    position::Position,
    types::{Side, Square},
};

/// Scores a position for the automated player. Higher is better for `side`.
/// Non-finite scores are ignored when choosing a move.
pub trait Evaluator {
    fn score(&self, position: &Position, side: Side) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&Position, Side) -> f64,
{
    fn score(&self, position: &Position, side: Side) -> f64 {
        self(position, side)
    }
}

/// Material balance in centipawns from `side`'s point of view
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn score(&self, position: &Position, side: Side) -> f64 {
        let material = |side: Side| -> i32 {
            position
                .pieces(side)
                .map(|(_, piece)| piece.kind.value())
                .sum()
        };

        (material(side) - material(side.opponent())) as f64
    }
}

/// Row-major signed encoding of the board: pawn 1 through king 6 for White,
/// negated for Black, 0 for empty squares. Input layer for learned
/// evaluators.
pub fn encode_position(position: &Position) -> [f64; NUM_SQUARES] {
    let mut encoded = [0.0; NUM_SQUARES];

    for (index, square) in Square::iter().enumerate() {
        if let Some(piece) = position.piece_at(square) {
            let code = piece.kind.code() as f64;

            encoded[index] = match piece.side {
                Side::White => code,
                Side::Black => -code,
            };
        }
    }

    encoded
}
