use crate::{
    attacks::is_in_check,
    constants::{INSUFFICIENT_MATERIAL_PIECE_COUNT, NO_PROGRESS_LIMIT},
    legality::has_legal_move,
    position::Position,
    types::{GameResult, Move, Side},
};

/// Moves played so far and the total piece count after each of them.
/// `piece_counts[0]` is the count before the first recorded move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
    piece_counts: Vec<usize>,
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new(&Position::new())
    }
}

impl MoveHistory {
    pub fn new(start: &Position) -> Self {
        Self {
            moves: Vec::new(),
            piece_counts: vec![start.piece_count()],
        }
    }

    /// Call once per executed half-move with the resulting position
    pub fn record(&mut self, move_: Move, after: &Position) {
        self.moves.push(move_);
        self.piece_counts.push(after.piece_count());
    }

    pub fn clear(&mut self, start: &Position) {
        *self = Self::new(start);
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Consecutive most recent half-moves that left the piece count unchanged.
    /// Any capture resets it to 0.
    pub fn no_progress_count(&self) -> u32 {
        self.piece_counts
            .windows(2)
            .rev()
            .take_while(|pair| pair[0] == pair[1])
            .count() as u32
    }
}

/// Classifies the position for `side_to_move` with the standard no-progress limit
pub fn classify(position: &Position, side_to_move: Side, history: &MoveHistory) -> GameResult {
    classify_with_limit(position, side_to_move, history, NO_PROGRESS_LIMIT)
}

/// First match wins: insufficient material, checkmate, stalemate, no-progress draw
pub fn classify_with_limit(
    position: &Position,
    side_to_move: Side,
    history: &MoveHistory,
    no_progress_limit: u32,
) -> GameResult {
    if position.piece_count() == INSUFFICIENT_MATERIAL_PIECE_COUNT {
        return GameResult::DrawByInsufficientMaterial;
    }

    if !has_legal_move(position, side_to_move) {
        return match is_in_check(position, side_to_move) {
            true => GameResult::Checkmate(side_to_move.opponent()),
            false => GameResult::Stalemate,
        };
    }

    if history.no_progress_count() >= no_progress_limit {
        return GameResult::DrawByNoProgress;
    }

    GameResult::InProgress
}

impl GameResult {
    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::Checkmate(winner) => Some(winner),
            _ => None,
        }
    }
}
