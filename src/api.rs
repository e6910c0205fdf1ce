use serde::{Deserialize, Serialize};

use crate::{
    constants::{NUM_COLS, NUM_ROWS},
    engine::Engine,
    types::{GameResult, Move, Piece, Side, Square},
};

/// Serializable snapshot of a game for presentation layers
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameView {
    pub board: Vec<Vec<Option<Piece>>>, // [row][col], row 0 is Black's back rank
    pub side_to_move: Side,
    pub in_check: bool,
    pub last_move: Option<Move>,
    pub result: GameResult,
    pub legal_moves: Vec<Move>, // Every legal move for the side to move
}

impl GameView {
    pub fn from_engine(engine: &Engine) -> Self {
        let position = engine.position();

        let board = (0..NUM_ROWS as u8)
            .map(|row| {
                (0..NUM_COLS as u8)
                    .map(|col| Square::new(row, col).and_then(|sq| position.piece_at(sq)))
                    .collect()
            })
            .collect();

        Self {
            board,
            side_to_move: engine.side_to_move(),
            in_check: engine.in_check(),
            last_move: position.last_move(),
            result: engine.result(),
            legal_moves: engine.all_legal_moves(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn starting_view() {
        let view = GameView::from_engine(&Engine::default());

        assert_eq!(view.side_to_move, Side::White);
        assert_eq!(view.legal_moves.len(), 20);
        assert_eq!(view.result, GameResult::InProgress);
        assert_eq!(
            view.board[7][4],
            Some(Piece::new(Side::White, PieceKind::King))
        );
        assert_eq!(view.board[4][4], None);
    }

    #[test]
    fn view_round_trips_through_json() {
        let view = GameView::from_engine(&Engine::default());
        let json = view.to_json().unwrap();

        assert!(json.contains("\"side_to_move\":\"White\""));
        assert_eq!(serde_json::from_str::<GameView>(&json).unwrap(), view);
    }

    #[test]
    fn out_of_range_square_fails_to_deserialize() {
        let json = r#"{"from":{"row":9,"col":0},"to":{"row":5,"col":0}}"#;

        assert!(serde_json::from_str::<Move>(json).is_err());
        assert!(serde_json::from_str::<Square>(r#"{"row":3,"col":-1}"#).is_err());
        assert_eq!(
            serde_json::from_str::<Square>(r#"{"row":6,"col":4}"#).unwrap(),
            Square::new(6, 4).unwrap()
        );
    }
}
