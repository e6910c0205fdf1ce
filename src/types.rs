#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};

/// A board coordinate. Row 0 is Black's back rank, row 7 is White's.
/// Only constructible in range, so every query holding one is in bounds.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "api", serde(try_from = "crate::square::SquareCoords"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub(crate) row: u8,
    pub(crate) col: u8,
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White = 0,
    Black = 1,
}

/// Immutable value. Per-square "has moved" state lives on the `Position`.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

/// Pieces a pawn may promote to.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Promotion {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

/// Castling, en passant and promotion are not encoded; they are inferred
/// from the position when the move is executed.
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Checkmate(Side), // Winner
    Stalemate,
    DrawByInsufficientMaterial,
    DrawByNoProgress,
}
