use crate::{
    movegen::{pawn_attack_squares, pseudo_moves},
    position::Position,
    types::{PieceKind, Side, Square},
};

/// True if any piece of `by` could move onto `square`.
///
/// Pawns attack their two forward diagonals whether or not the target is
/// occupied; a pawn push never attacks. Every other piece attacks exactly
/// its pseudo-legal destinations.
pub fn is_square_attacked(position: &Position, square: Square, by: Side) -> bool {
    position.pieces(by).any(|(from, piece)| match piece.kind {
        PieceKind::Pawn => pawn_attack_squares(from, by).any(|target| target == square),
        _ => pseudo_moves(position, from)
            .iter()
            .any(|move_| move_.to == square),
    })
}

/// A side without a king is never in check
pub fn is_in_check(position: &Position, side: Side) -> bool {
    position
        .king_square(side)
        .is_some_and(|king| is_square_attacked(position, king, side.opponent()))
}
