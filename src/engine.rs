use rand::{SeedableRng, rngs::StdRng, seq::IteratorRandom};
use tracing::{debug, info};

use crate::{
    attacks::{is_in_check, is_square_attacked},
    constants::{DEFAULT_PROMOTION, NO_PROGRESS_LIMIT},
    error::{ChessError, Result},
    evaluation::Evaluator,
    legality,
    outcome::{MoveHistory, classify_with_limit},
    player::choose_move,
    position::Position,
    special,
    types::{GameResult, Move, Promotion, Side, Square},
};

/// Which piece a pawn becomes on the last rank when the caller does not choose
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromotionPolicy {
    Always(Promotion),
    Random,
}

impl Default for PromotionPolicy {
    fn default() -> Self {
        PromotionPolicy::Always(DEFAULT_PROMOTION)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineSettings {
    pub promotion: PromotionPolicy,
    pub no_progress_limit: u32, // Half-moves
    pub computer_side: Option<Side>,
    pub seed: Option<u64>, // Fixed seed for reproducible random choices
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            promotion: PromotionPolicy::default(),
            no_progress_limit: NO_PROGRESS_LIMIT,
            computer_side: None,
            seed: None,
        }
    }
}

/// One game: the position, whose turn it is, and what has been played.
///
/// Queries borrow the position immutably; only the `&mut self` methods
/// (`try_move*`, `play_computer_move`, `reset`) change it. Callers sharing
/// an engine across threads must hold one lock around each select, move
/// and classify sequence, or hand readers a `snapshot`.
pub struct Engine {
    position: Position,
    side_to_move: Side,
    history: MoveHistory,
    result: GameResult,
    pub settings: EngineSettings,
    rng: StdRng,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineSettings::default())
    }
}

impl Engine {
    pub fn new(settings: EngineSettings) -> Self {
        let position = Position::new();

        Self {
            history: MoveHistory::new(&position),
            position,
            side_to_move: Side::White,
            result: GameResult::InProgress,
            rng: Self::make_rng(settings.seed),
            settings,
        }
    }

    /// Starts a new game from an arbitrary position
    pub fn from_position(position: Position, side_to_move: Side, settings: EngineSettings) -> Self {
        let mut engine = Self::new(settings);

        engine.history = MoveHistory::new(&position);
        engine.position = position;
        engine.side_to_move = side_to_move;
        engine.result = engine.classify();
        engine
    }

    fn make_rng(seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Back to the starting arrangement with White to move. The only way out
    /// of a finished game.
    pub fn reset(&mut self) {
        self.position = Position::new();
        self.side_to_move = Side::White;
        self.history.clear(&self.position);
        self.result = GameResult::InProgress;
        self.rng = Self::make_rng(self.settings.seed);

        info!("New game");
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Owned copy for renderers or evaluators running elsewhere
    pub fn snapshot(&self) -> Position {
        self.position.clone()
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Result as of the last executed move
    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_over()
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_game_over() && self.settings.computer_side == Some(self.side_to_move)
    }

    pub fn in_check(&self) -> bool {
        is_in_check(&self.position, self.side_to_move)
    }

    /// Legal moves of the piece on `square`. Empty unless the piece belongs
    /// to the side to move and the game is still going.
    pub fn legal_moves(&self, square: Square) -> Vec<Move> {
        let movable = self
            .position
            .piece_at(square)
            .is_some_and(|piece| piece.side == self.side_to_move);

        match movable && !self.is_game_over() {
            true => legality::legal_moves(&self.position, square),
            false => Vec::new(),
        }
    }

    /// Same as `legal_moves`; off-board coordinates give no moves
    pub fn legal_moves_at(&self, row: i32, col: i32) -> Vec<Move> {
        Square::try_from((row, col))
            .map(|square| self.legal_moves(square))
            .unwrap_or_default()
    }

    /// Off-board coordinates are never attacked
    pub fn is_attacked_at(&self, row: i32, col: i32, by: Side) -> bool {
        Square::try_from((row, col))
            .is_ok_and(|square| is_square_attacked(&self.position, square, by))
    }

    pub fn all_legal_moves(&self) -> Vec<Move> {
        match self.is_game_over() {
            true => Vec::new(),
            false => legality::all_legal_moves(&self.position, self.side_to_move),
        }
    }

    /// Plays a move for the side to move, promoting per `settings.promotion`
    pub fn try_move(&mut self, move_: Move) -> Result<GameResult> {
        self.validate(move_)?;

        let promotion = self.resolve_promotion();
        Ok(self.apply(move_, promotion))
    }

    /// Plays a move with an explicit promotion piece
    pub fn try_move_with_promotion(
        &mut self,
        move_: Move,
        promotion: Promotion,
    ) -> Result<GameResult> {
        self.validate(move_)?;

        Ok(self.apply(move_, promotion))
    }

    pub fn try_move_at(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<GameResult> {
        let from = Square::try_from((from_row, from_col)).map_err(|_| {
            ChessError::InvalidSquare {
                row: from_row,
                col: from_col,
            }
        })?;
        let to = Square::try_from((to_row, to_col)).map_err(|_| ChessError::InvalidSquare {
            row: to_row,
            col: to_col,
        })?;

        self.try_move(Move::new(from, to))
    }

    /// Lets `evaluator` choose and play a move for the side to move.
    /// `Ok(None)` if there was nothing to play.
    pub fn play_computer_move(&mut self, evaluator: &dyn Evaluator) -> Result<Option<Move>> {
        if self.is_game_over() {
            return Err(ChessError::GameOver(self.result));
        }

        let chosen = choose_move(
            &self.position,
            self.side_to_move,
            evaluator,
            &mut self.rng,
        );

        if let Some(move_) = chosen {
            let promotion = self.resolve_promotion();
            self.apply(move_, promotion);
        }

        Ok(chosen)
    }

    fn validate(&self, move_: Move) -> Result<()> {
        if self.is_game_over() {
            return Err(ChessError::GameOver(self.result));
        }

        let piece = self
            .position
            .piece_at(move_.from)
            .ok_or(ChessError::NoPieceAtSquare(move_.from))?;

        if piece.side != self.side_to_move {
            return Err(ChessError::WrongSide {
                square: move_.from,
                side: self.side_to_move,
            });
        }

        if !legality::legal_moves(&self.position, move_.from).contains(&move_) {
            return Err(ChessError::IllegalMove(move_));
        }

        Ok(())
    }

    fn resolve_promotion(&mut self) -> Promotion {
        match self.settings.promotion {
            PromotionPolicy::Always(promotion) => promotion,
            PromotionPolicy::Random => Promotion::iter()
                .choose(&mut self.rng)
                .unwrap_or(DEFAULT_PROMOTION),
        }
    }

    fn apply(&mut self, move_: Move, promotion: Promotion) -> GameResult {
        if let Some(piece) = self.position.piece_at(move_.from) {
            if special::castling_rook_move(piece, move_).is_some() {
                debug!(side = ?piece.side, ?move_, "Castling");
            }
            if let Some(victim) = special::en_passant_victim(&self.position, piece, move_) {
                debug!(side = ?piece.side, ?move_, ?victim, "En passant capture");
            }
            if special::promotes(piece, move_.to) {
                debug!(side = ?piece.side, ?move_, ?promotion, "Promotion");
            }
        }

        self.position.execute_with_promotion(move_, promotion);
        self.history.record(move_, &self.position);
        self.side_to_move = self.side_to_move.opponent();
        self.result = self.classify();

        debug!(
            ply = self.history.len(),
            ?move_,
            no_progress = self.history.no_progress_count(),
            "Move executed"
        );

        if self.result.is_over() {
            info!(result = ?self.result, ply = self.history.len(), "Game over");
        }

        self.result
    }

    fn classify(&self) -> GameResult {
        classify_with_limit(
            &self.position,
            self.side_to_move,
            &self.history,
            self.settings.no_progress_limit,
        )
    }
}
