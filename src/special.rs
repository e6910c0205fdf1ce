use crate::{
    attacks::{is_in_check, is_square_attacked},
    constants::{
        KINGSIDE_KING_TARGET_COL, KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL, KING_HOME_COL,
        QUEENSIDE_KING_TARGET_COL, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL,
    },
    position::Position,
    types::{Move, Piece, PieceKind, Square},
};

struct CastlePath {
    rook_col: u8,
    must_be_empty: &'static [u8],
    must_be_safe: &'static [u8], // Square passed over and square landed on
    king_target_col: u8,
}

const CASTLE_PATHS: [CastlePath; 2] = [
    // Kingside
    CastlePath {
        rook_col: KINGSIDE_ROOK_COL,
        must_be_empty: &[5, 6],
        must_be_safe: &[5, 6],
        king_target_col: KINGSIDE_KING_TARGET_COL,
    },
    // Queenside
    CastlePath {
        rook_col: QUEENSIDE_ROOK_COL,
        must_be_empty: &[1, 2, 3],
        must_be_safe: &[3, 2],
        king_target_col: QUEENSIDE_KING_TARGET_COL,
    },
];

/// Castling moves for the king on `from`.
///
/// Requires an unmoved king on its home square that is not in check, an
/// unmoved friendly rook on the corner, empty squares in between, and no
/// attacked square on the king's path.
pub fn castling_moves(position: &Position, from: Square) -> Vec<Move> {
    let mut moves = Vec::new();

    let Some(king) = position.piece_at(from) else {
        return moves;
    };

    let row = king.side.back_row();

    if king.kind != PieceKind::King
        || from.row() != row
        || from.col() != KING_HOME_COL
        || position.has_moved(from)
        || is_in_check(position, king.side)
    {
        return moves;
    }

    let on_back_row = |col: u8| Square::new(row, col);

    for path in &CASTLE_PATHS {
        let Some(rook_square) = on_back_row(path.rook_col) else {
            continue;
        };

        let rook_ready = !position.has_moved(rook_square)
            && position
                .piece_at(rook_square)
                .is_some_and(|rook| rook.is(king.side, PieceKind::Rook));

        let path_clear = path
            .must_be_empty
            .iter()
            .filter_map(|&col| on_back_row(col))
            .all(|square| position.is_empty(square));

        let path_safe = path
            .must_be_safe
            .iter()
            .filter_map(|&col| on_back_row(col))
            .all(|square| !is_square_attacked(position, square, king.side.opponent()));

        if rook_ready && path_clear && path_safe {
            if let Some(to) = on_back_row(path.king_target_col) {
                moves.push(Move::new(from, to));
            }
        }
    }

    moves
}

/// The rook relocation implied by a king moving two columns
pub fn castling_rook_move(piece: Piece, move_: Move) -> Option<Move> {
    if piece.kind != PieceKind::King || move_.col_delta().abs() != 2 {
        return None;
    }

    let row = move_.from.row();
    let (rook_col, target_col) = match move_.col_delta() > 0 {
        true => (KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL),
        false => (QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL),
    };

    Some(Move::new(
        Square::new(row, rook_col)?,
        Square::new(row, target_col)?,
    ))
}

/// The square of the pawn captured en passant, which sits on the origin
/// row at the destination column. Call before the destination is filled.
pub fn en_passant_victim(position: &Position, piece: Piece, move_: Move) -> Option<Square> {
    if piece.kind == PieceKind::Pawn && move_.col_delta() != 0 && position.is_empty(move_.to) {
        return Square::new(move_.from.row(), move_.to.col());
    }

    None
}

pub fn promotes(piece: Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.row() == piece.side.promotion_row()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn rook_relocation_per_castling_side() {
        let king = Piece::new(Side::White, PieceKind::King);

        assert_eq!(
            castling_rook_move(king, Move::new(sq(7, 4), sq(7, 6))),
            Some(Move::new(sq(7, 7), sq(7, 5)))
        );
        assert_eq!(
            castling_rook_move(king, Move::new(sq(7, 4), sq(7, 2))),
            Some(Move::new(sq(7, 0), sq(7, 3)))
        );
        assert_eq!(castling_rook_move(king, Move::new(sq(7, 4), sq(7, 5))), None);
    }

    #[test]
    fn promotion_rows() {
        let white_pawn = Piece::new(Side::White, PieceKind::Pawn);
        let black_pawn = Piece::new(Side::Black, PieceKind::Pawn);

        assert!(promotes(white_pawn, sq(0, 3)));
        assert!(!promotes(white_pawn, sq(7, 3)));
        assert!(promotes(black_pawn, sq(7, 3)));
        assert!(!promotes(Piece::new(Side::White, PieceKind::Rook), sq(0, 3)));
    }
}
