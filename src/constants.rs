use crate::types::{PieceKind, Promotion};

// NOTE: 1 ply = one move by a single player

pub const NUM_ROWS: usize = 8;
pub const NUM_COLS: usize = 8;
pub const NUM_SQUARES: usize = NUM_ROWS * NUM_COLS;

pub const BLACK_BACK_ROW: u8 = 0;
pub const WHITE_BACK_ROW: u8 = 7;
pub const BLACK_PAWN_ROW: u8 = 1;
pub const WHITE_PAWN_ROW: u8 = 6;

// Castling geometry (columns)
pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_ROOK_TARGET_COL: u8 = 5;
pub const QUEENSIDE_ROOK_TARGET_COL: u8 = 3;
pub const KINGSIDE_KING_TARGET_COL: u8 = 6;
pub const QUEENSIDE_KING_TARGET_COL: u8 = 2;

/// Half-moves without a change in total piece count before the game is drawn.
pub const NO_PROGRESS_LIMIT: u32 = 50;

/// Exactly this many pieces left means only the two kings remain.
pub const INSUFFICIENT_MATERIAL_PIECE_COUNT: usize = 2;

pub const DEFAULT_PROMOTION: Promotion = Promotion::Queen;

/// (row delta, col delta)
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Back rank from column 0 to column 7, identical for both sides.
pub const INIT_BACK_RANK: [PieceKind; NUM_COLS] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
