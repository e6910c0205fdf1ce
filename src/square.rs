use crate::{
    constants::{NUM_COLS, NUM_ROWS},
    types::{Move, Square},
};

impl Square {
    /// `None` when either coordinate is outside 0-7
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if (row as usize) < NUM_ROWS && (col as usize) < NUM_COLS {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// 0-indexed (0-7), row 0 being Black's back rank
    pub const fn row(self) -> u8 {
        self.row
    }

    /// 0-indexed (0-7)
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square reached by stepping `(d_row, d_col)`, if still on the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;

        if row < 0 || col < 0 {
            return None;
        }

        Square::new(row as u8, col as u8)
    }

    /// Row-major, starting from (0, 0)
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..NUM_ROWS as u8).flat_map(|row| (0..NUM_COLS as u8).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = &'static str;

    /// Converts from (row, col) board coordinates
    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        if !(0..NUM_ROWS as i32).contains(&row) || !(0..NUM_COLS as i32).contains(&col) {
            return Err("Square coordinates out of range (must be 0-7)");
        }

        Ok(Square {
            row: row as u8,
            col: col as u8,
        })
    }
}

/// Unchecked `{ "row", "col" }` input, validated into a `Square` on deserialize
#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
pub(crate) struct SquareCoords {
    row: i32,
    col: i32,
}

#[cfg(feature = "api")]
impl TryFrom<SquareCoords> for Square {
    type Error = &'static str;

    fn try_from(coords: SquareCoords) -> Result<Self, Self::Error> {
        Square::try_from((coords.row, coords.col))
    }
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// `None` when any coordinate is off the board
    pub fn from_coords(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Option<Move> {
        let from = Square::try_from((from_row, from_col)).ok()?;
        let to = Square::try_from((to_row, to_col)).ok()?;

        Some(Move { from, to })
    }

    pub fn col_delta(self) -> i8 {
        self.to.col as i8 - self.from.col as i8
    }

    pub fn row_delta(self) -> i8 {
        self.to.row as i8 - self.from.row as i8
    }
}
