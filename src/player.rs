use rand::{Rng, seq::SliceRandom};
use tracing::warn;

use crate::{
    evaluation::Evaluator,
    legality::all_legal_moves,
    position::Position,
    types::{Move, Side},
};

/// Picks the legal move whose resulting position scores highest for `side`.
///
/// Ties keep the first move found. When no candidate has a finite score a
/// legal move is picked uniformly at random. `None` means `side` has no
/// legal move.
pub fn choose_move<R>(
    position: &Position,
    side: Side,
    evaluator: &dyn Evaluator,
    rng: &mut R,
) -> Option<Move>
where
    R: Rng + ?Sized,
{
    let moves = all_legal_moves(position, side);
    let mut best: Option<(Move, f64)> = None;

    for &move_ in &moves {
        let mut copy = position.clone();
        copy.execute(move_);

        let score = evaluator.score(&copy, side);

        if score.is_finite() && best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((move_, score));
        }
    }

    match best {
        Some((move_, _)) => Some(move_),
        None => {
            if !moves.is_empty() {
                warn!(
                    candidates = moves.len(),
                    "No finite evaluation, picking a random move"
                );
            }

            moves.choose(rng).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        evaluation::MaterialEvaluator,
        types::{Piece, PieceKind, Square},
    };

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn takes_the_hanging_queen() {
        let mut position = Position::empty();
        position.place_piece(sq(7, 4), Piece::new(Side::White, PieceKind::King));
        position.place_piece(sq(0, 4), Piece::new(Side::Black, PieceKind::King));
        position.place_piece(sq(4, 0), Piece::new(Side::White, PieceKind::Rook));
        position.place_piece(sq(4, 6), Piece::new(Side::Black, PieceKind::Queen));

        let mut rng = StdRng::seed_from_u64(7);
        let chosen = choose_move(&position, Side::White, &MaterialEvaluator, &mut rng);

        assert_eq!(chosen, Some(Move::new(sq(4, 0), sq(4, 6))));
    }

    #[test]
    fn falls_back_to_a_legal_move_without_finite_scores() {
        let position = Position::new();
        let never_finite = |_: &Position, _: Side| f64::NAN;

        let mut rng = StdRng::seed_from_u64(1);
        let chosen = choose_move(&position, Side::Black, &never_finite, &mut rng)
            .expect("Starting position has legal moves");

        assert!(all_legal_moves(&position, Side::Black).contains(&chosen));
    }

    #[test]
    fn no_move_without_legal_moves() {
        let mut position = Position::empty();
        position.place_piece(sq(0, 0), Piece::new(Side::Black, PieceKind::King));
        position.place_piece(sq(2, 1), Piece::new(Side::White, PieceKind::Queen));
        position.place_piece(sq(7, 7), Piece::new(Side::White, PieceKind::King));

        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(
            choose_move(&position, Side::Black, &MaterialEvaluator, &mut rng),
            None
        );
    }
}
