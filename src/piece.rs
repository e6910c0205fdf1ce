use crate::{
    constants::{BLACK_BACK_ROW, BLACK_PAWN_ROW, WHITE_BACK_ROW, WHITE_PAWN_ROW},
    types::{Piece, PieceKind, Promotion, Side},
};

impl PieceKind {
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    /// Signed-input code used by `evaluation::encode_position`
    pub const fn code(self) -> i8 {
        self as i8 + 1
    }

    /// Lowercase letter used in board diagrams
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl TryFrom<char> for PieceKind {
    type Error = &'static str;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter.to_ascii_lowercase() {
            'p' => Ok(PieceKind::Pawn),
            'n' => Ok(PieceKind::Knight),
            'b' => Ok(PieceKind::Bishop),
            'r' => Ok(PieceKind::Rook),
            'q' => Ok(PieceKind::Queen),
            'k' => Ok(PieceKind::King),
            _ => Err("Unknown piece letter (expected one of pnbrqk)"),
        }
    }
}

impl From<Promotion> for PieceKind {
    fn from(promotion: Promotion) -> Self {
        match promotion {
            Promotion::Queen => PieceKind::Queen,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Knight => PieceKind::Knight,
        }
    }
}

impl Promotion {
    pub fn iter() -> impl Iterator<Item = Promotion> {
        [
            Promotion::Queen,
            Promotion::Rook,
            Promotion::Bishop,
            Promotion::Knight,
        ]
        .into_iter()
    }
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a single pawn push
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Side::White => WHITE_PAWN_ROW,
            Side::Black => BLACK_PAWN_ROW,
        }
    }

    pub const fn back_row(self) -> u8 {
        match self {
            Side::White => WHITE_BACK_ROW,
            Side::Black => BLACK_BACK_ROW,
        }
    }

    /// The row on which this side's pawns promote (the opponent's back rank)
    pub const fn promotion_row(self) -> u8 {
        self.opponent().back_row()
    }
}

impl Piece {
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { kind, side }
    }

    pub fn is(self, side: Side, kind: PieceKind) -> bool {
        self.side == side && self.kind == kind
    }

    /// Uppercase for White, lowercase for Black
    pub fn letter(self) -> char {
        match self.side {
            Side::White => self.kind.letter().to_ascii_uppercase(),
            Side::Black => self.kind.letter(),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = &'static str;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        let kind = PieceKind::try_from(letter)?;
        let side = if letter.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };

        Ok(Piece::new(side, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_carry_side_by_case() {
        assert_eq!(Piece::try_from('N'), Ok(Piece::new(Side::White, PieceKind::Knight)));
        assert_eq!(Piece::try_from('q'), Ok(Piece::new(Side::Black, PieceKind::Queen)));
        assert!(Piece::try_from('x').is_err());
        assert_eq!(Piece::new(Side::White, PieceKind::King).letter(), 'K');
        assert_eq!(Piece::new(Side::Black, PieceKind::Pawn).letter(), 'p');
    }

    #[test]
    fn side_geometry() {
        assert_eq!(Side::White.promotion_row(), BLACK_BACK_ROW);
        assert_eq!(Side::Black.promotion_row(), WHITE_BACK_ROW);
        assert_eq!(Side::White.pawn_direction(), -1);
        assert_eq!(Side::Black.pawn_start_row(), BLACK_PAWN_ROW);
    }
}
