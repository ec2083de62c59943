//! A game in progress: current position, history and status.

use gambit_core::{
    Board, Move, MoveError, MoveList, Square, generate_legal_moves, legal_moves,
};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::draw;
use crate::error::GameError;
use crate::status::{self, GameStatus};

/// Apply `mv` to a lone position and report the resulting status.
///
/// # Errors
///
/// [`GameError::GameOver`] when `board` is already decided,
/// [`GameError::IllegalMove`] when `mv` is not legal in it.
pub fn apply(board: &Board, mv: Move) -> Result<(Board, GameStatus), GameError> {
    let current = status::status(board);
    if current.is_terminal() {
        return Err(GameError::GameOver { status: current });
    }
    let next = board.try_make_move(mv)?;
    Ok((next, status::status(&next)))
}

/// A game from some starting position, with every move made so far.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Positions before each move, oldest first.
    history: Vec<Board>,
    moves: Vec<Move>,
    config: GameConfig,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game from the standard starting position.
    pub fn new() -> Game {
        info!("new game");
        Game::from_board(Board::starting_position())
    }

    /// A new game from the starting position with custom draw rules.
    pub fn with_config(config: GameConfig) -> Result<Game, GameError> {
        config.validate()?;
        let mut game = Game::new();
        game.config = config;
        game.status = game.evaluate();
        Ok(game)
    }

    /// A game continuing from `board`, with no earlier history.
    pub fn from_board(board: Board) -> Game {
        let mut game = Game {
            board,
            history: Vec::new(),
            moves: Vec::new(),
            config: GameConfig::default(),
            status: GameStatus::InProgress,
        };
        game.status = game.evaluate();
        game
    }

    /// A game continuing from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Game, GameError> {
        let board: Board = fen.parse()?;
        info!(%fen, "new game from position");
        Ok(Game::from_board(board))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Replace the draw rules and re-evaluate the current position under them.
    pub fn set_config(&mut self, config: GameConfig) -> Result<(), GameError> {
        config.validate()?;
        self.config = config;
        self.status = self.evaluate();
        Ok(())
    }

    /// Moves made so far, in order.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The position before each move in [`Game::moves`].
    #[inline]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// How many times the current position has occurred in this game.
    pub fn repetition_count(&self) -> usize {
        draw::repetition_count(&self.board, &self.history, &self.moves)
    }

    /// The legal moves of the piece on `sq`; nothing once the game is over.
    pub fn selectable_moves(&self, sq: Square) -> MoveList {
        if self.status.is_terminal() {
            return MoveList::new();
        }
        legal_moves(&self.board, sq)
    }

    /// Every legal move for the side to move; nothing once the game is over.
    pub fn legal_moves(&self) -> MoveList {
        if self.status.is_terminal() {
            return MoveList::new();
        }
        generate_legal_moves(&self.board)
    }

    /// Make `mv` and return the new status.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] once the game has ended and
    /// [`GameError::IllegalMove`] for a move that is not legal here. The game
    /// is unchanged on error.
    pub fn make_move(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        self.ensure_in_play()?;
        let next = self.board.try_make_move(mv).inspect_err(|err| {
            warn!(%mv, %err, "rejected move");
        })?;

        self.history.push(self.board);
        self.moves.push(mv);
        self.board = next;
        self.status = self.evaluate();

        debug!(%mv, status = ?self.status, "move made");
        if self.status.is_terminal() {
            info!(status = %self.status, moves = self.moves.len(), "game over");
        }
        Ok(self.status)
    }

    /// Make a move written in coordinate notation (`e2e4`) or SAN (`Nf3`).
    pub fn play(&mut self, text: &str) -> Result<Move, GameError> {
        self.ensure_in_play()?;
        let parsed = match self.board.parse_uci_move(text) {
            Err(MoveError::Unparsable { .. } | MoveError::InvalidSquare(_)) => {
                self.board.parse_san(text)
            }
            parsed => parsed,
        };
        let mv = parsed.inspect_err(|err| warn!(%text, %err, "rejected move"))?;
        self.make_move(mv)?;
        Ok(mv)
    }

    /// Take back the last move and return it.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let (Some(previous), Some(mv)) = (self.history.pop(), self.moves.pop()) else {
            return Err(GameError::NothingToUndo);
        };
        self.board = previous;
        self.status = self.evaluate();
        debug!(%mv, "move undone");
        Ok(mv)
    }

    fn ensure_in_play(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "move after game over");
            return Err(GameError::GameOver {
                status: self.status,
            });
        }
        Ok(())
    }

    fn evaluate(&self) -> GameStatus {
        let occurrences = if self.config.detect_repetition {
            self.repetition_count()
        } else {
            1
        };
        status::evaluate(&self.board, &self.config, occurrences)
    }
}
