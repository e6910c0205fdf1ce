//! Error types for the engine boundary.
//!
//! The rules functions are total and never fail; these errors are returned
//! only when a caller asks the `Engine` to play a move it should not.

use thiserror::Error;

use crate::types::{GameResult, Move, Side, Square};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinates outside the 8x8 board
    #[error("Invalid square: row {row}, col {col} (both must be 0-7)")]
    InvalidSquare { row: i32, col: i32 },

    #[error("No piece at square {0:?}")]
    NoPieceAtSquare(Square),

    /// Piece does not belong to the side to move
    #[error("Piece at square {square:?} does not belong to {side:?}")]
    WrongSide { square: Square, side: Side },

    #[error("Illegal move: {0:?}")]
    IllegalMove(Move),

    /// The game already reached a terminal result; call `reset` first
    #[error("Game is already over: {0:?}")]
    GameOver(GameResult),
}

pub type Result<T> = std::result::Result<T, ChessError>;
