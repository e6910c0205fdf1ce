use crate::{
    constants::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS},
    position::Position,
    types::{Move, PieceKind, Side, Square},
};

/// Destinations reachable by the piece on `from` following its movement
/// pattern, ignoring whether the mover's king is left attacked.
/// Castling is not generated here, see `special::castling_moves`.
pub fn pseudo_moves(position: &Position, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();

    let Some(piece) = position.piece_at(from) else {
        return moves;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece.side, &mut moves),
        PieceKind::Knight => {
            generate_step_moves(position, from, piece.side, &KNIGHT_OFFSETS, &mut moves)
        }
        PieceKind::Bishop => {
            generate_sliding_moves(position, from, piece.side, &BISHOP_DIRECTIONS, &mut moves)
        }
        PieceKind::Rook => {
            generate_sliding_moves(position, from, piece.side, &ROOK_DIRECTIONS, &mut moves)
        }
        PieceKind::Queen => {
            generate_sliding_moves(position, from, piece.side, &QUEEN_DIRECTIONS, &mut moves)
        }
        PieceKind::King => generate_step_moves(position, from, piece.side, &KING_OFFSETS, &mut moves),
    }

    moves
}

/// The two diagonal squares a pawn of `side` on `from` captures onto
pub fn pawn_attack_squares(from: Square, side: Side) -> impl Iterator<Item = Square> {
    let direction = side.pawn_direction();

    [-1, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(direction, d_col))
}

fn generate_pawn_moves(position: &Position, from: Square, side: Side, moves: &mut Vec<Move>) {
    let direction = side.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0).filter(|&sq| position.is_empty(sq)) {
        moves.push(Move::new(from, one_step));

        if from.row() == side.pawn_start_row() {
            if let Some(two_steps) = one_step
                .offset(direction, 0)
                .filter(|&sq| position.is_empty(sq))
            {
                moves.push(Move::new(from, two_steps));
            }
        }
    }

    for target in pawn_attack_squares(from, side) {
        if position
            .piece_at(target)
            .is_some_and(|victim| victim.side != side)
        {
            moves.push(Move::new(from, target));
        }
    }

    generate_en_passant_move(position, from, side, moves);
}

/// Only available right after an opposing pawn's two-square advance that
/// left it beside this pawn on the same row
fn generate_en_passant_move(position: &Position, from: Square, side: Side, moves: &mut Vec<Move>) {
    let Some(last_move) = position.last_move() else {
        return;
    };

    let just_double_pushed = position
        .piece_at(last_move.to)
        .is_some_and(|piece| piece.is(side.opponent(), PieceKind::Pawn))
        && last_move.row_delta().abs() == 2;

    if !just_double_pushed || last_move.to.row() != from.row() {
        return;
    }

    let d_col = last_move.to.col() as i8 - from.col() as i8;

    if d_col.abs() != 1 {
        return;
    }

    if let Some(to) = from
        .offset(side.pawn_direction(), d_col)
        .filter(|&sq| position.is_empty(sq))
    {
        moves.push(Move::new(from, to));
    }
}

/// Knight and king: fixed offsets onto empty or opposing squares
fn generate_step_moves(
    position: &Position,
    from: Square,
    side: Side,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            if position.piece_at(to).is_none_or(|target| target.side != side) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

/// Bishop, rook and queen: each ray stops at the edge, before a friendly
/// piece, or on an opposing piece (included as a capture)
fn generate_sliding_moves(
    position: &Position,
    from: Square,
    side: Side,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from.offset(d_row, d_col);

        while let Some(to) = current {
            match position.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(target) => {
                    if target.side != side {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }

            current = to.offset(d_row, d_col);
        }
    }
}
