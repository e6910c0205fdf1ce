use crate::{
    attacks::is_in_check,
    movegen::pseudo_moves,
    position::Position,
    special::castling_moves,
    types::{Move, Side, Square},
};

/// Moves for the piece on `from` that do not leave its own king attacked,
/// plus any castling moves.
///
/// Each candidate is played on a copy of the position through
/// `Position::execute`, so en passant and castling side effects are part
/// of the check test. Cost is one full attack scan per candidate.
pub fn legal_moves(position: &Position, from: Square) -> Vec<Move> {
    let Some(piece) = position.piece_at(from) else {
        return Vec::new();
    };

    let mut moves: Vec<Move> = pseudo_moves(position, from)
        .into_iter()
        .filter(|&move_| leaves_king_safe(position, move_, piece.side))
        .collect();

    moves.extend(castling_moves(position, from));
    moves
}

/// Union of `legal_moves` over every square holding one of `side`'s pieces
pub fn all_legal_moves(position: &Position, side: Side) -> Vec<Move> {
    position
        .pieces(side)
        .flat_map(|(square, _)| legal_moves(position, square))
        .collect()
}

/// Stops at the first legal move found
pub fn has_legal_move(position: &Position, side: Side) -> bool {
    position
        .pieces(side)
        .any(|(square, _)| !legal_moves(position, square).is_empty())
}

fn leaves_king_safe(position: &Position, move_: Move, side: Side) -> bool {
    let mut copy = position.clone();
    copy.execute(move_);

    !is_in_check(&copy, side)
}
