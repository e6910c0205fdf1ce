use std::fmt;

use crate::{
    constants::{DEFAULT_PROMOTION, INIT_BACK_RANK, NUM_COLS, NUM_ROWS},
    special,
    types::{Move, Piece, PieceKind, Promotion, Side, Square},
};

/// Board state: an 8x8 grid of optional pieces, per-square "occupant has
/// moved" flags and the last move played.
///
/// Normal play mutates a position only through [`Position::execute`]. The
/// setup methods (`place_piece`, `clear_square`, `mark_moved`,
/// `set_last_move`) exist for building test and analysis positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    squares: [[Option<Piece>; NUM_COLS]; NUM_ROWS],
    moved: [[bool; NUM_COLS]; NUM_ROWS],
    last_move: Option<Move>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting arrangement
    pub fn new() -> Self {
        let mut position = Self::empty();

        for (col, &kind) in INIT_BACK_RANK.iter().enumerate() {
            for side in [Side::White, Side::Black] {
                position.squares[side.back_row() as usize][col] = Some(Piece::new(side, kind));
                position.squares[side.pawn_start_row() as usize][col] =
                    Some(Piece::new(side, PieceKind::Pawn));
            }
        }

        position
    }

    pub fn empty() -> Self {
        Self {
            squares: [[None; NUM_COLS]; NUM_ROWS],
            moved: [[false; NUM_COLS]; NUM_ROWS],
            last_move: None,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Whether any occupant of `square` has ever moved onto it
    #[inline]
    pub fn has_moved(&self, square: Square) -> bool {
        self.moved[square.row() as usize][square.col() as usize]
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn place_piece(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    pub fn clear_square(&mut self, square: Square) {
        self.set(square, None);
    }

    pub fn mark_moved(&mut self, square: Square) {
        self.moved[square.row() as usize][square.col() as usize] = true;
    }

    pub fn set_last_move(&mut self, last_move: Option<Move>) {
        self.last_move = last_move;
    }

    /// Occupied squares holding `side`'s pieces, row-major
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.side == side)
                .map(|piece| (square, piece))
        })
    }

    /// First king of `side` in row-major order
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces(side)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Total number of pieces of both sides
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().filter(|p| p.is_some()).count()
    }

    /// Executes a move, promoting to a queen
    pub fn execute(&mut self, move_: Move) {
        self.execute_with_promotion(move_, DEFAULT_PROMOTION);
    }

    /// Executes a move the caller has already validated.
    ///
    /// Castling is a king moving two columns; the rook is relocated first.
    /// A pawn moving diagonally onto an empty square captures en passant.
    /// A pawn reaching the opposite back rank becomes `promotion`.
    /// An empty origin square leaves the position untouched.
    pub fn execute_with_promotion(&mut self, move_: Move, promotion: Promotion) {
        let Some(piece) = self.piece_at(move_.from) else {
            return;
        };

        if let Some(rook_move) = special::castling_rook_move(piece, move_) {
            if let Some(rook) = self.piece_at(rook_move.from) {
                self.set(rook_move.from, None);
                self.set(rook_move.to, Some(rook));
                self.mark_moved(rook_move.to);
            }
        }

        // Must be checked before the destination is filled
        if let Some(victim) = special::en_passant_victim(self, piece, move_) {
            self.set(victim, None);
        }

        self.set(move_.to, Some(piece));
        self.set(move_.from, None);
        self.mark_moved(move_.to);

        if special::promotes(piece, move_.to) {
            self.set(move_.to, Some(Piece::new(piece.side, promotion.into())));
        }

        self.last_move = Some(move_);
    }

    /// Text diagram with row indices on the left, column indices below.
    /// Row 0 is on top unless `flip` is set.
    pub fn render(&self, flip: bool) -> String {
        let rows: Vec<usize> = match flip {
            false => (0..NUM_ROWS).collect(),
            true => (0..NUM_ROWS).rev().collect(),
        };

        let mut output = String::new();

        for row in rows {
            output.push_str(&format!("{} ", row));

            for col in 0..NUM_COLS {
                let letter = self.squares[row][col].map_or('.', Piece::letter);
                output.push(' ');
                output.push(letter);
            }

            output.push('\n');
        }

        output.push_str("  ");
        for col in 0..NUM_COLS {
            output.push_str(&format!(" {}", col));
        }
        output.push('\n');

        output
    }

    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
