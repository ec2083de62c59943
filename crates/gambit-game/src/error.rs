//! Error types for game play and configuration.

use gambit_core::{FenError, MoveError};

use crate::status::GameStatus;

/// Errors from adjusting a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option '{name}'")]
    UnknownOption { name: String },

    #[error("invalid value '{value}' for option '{option}'")]
    InvalidValue { option: String, value: String },

    #[error("option '{option}' must be at least {min}, got {value}")]
    OutOfRange {
        option: &'static str,
        value: u32,
        min: u32,
    },
}

/// Errors from operations on a [`Game`](crate::Game).
///
/// A rejected operation never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    IllegalMove(#[from] MoveError),

    #[error("game is over: {status}")]
    GameOver { status: GameStatus },

    #[error("no move to undo")]
    NothingToUndo,

    #[error("invalid position: {source}")]
    InvalidPosition {
        #[from]
        source: FenError,
    },

    #[error("invalid configuration: {source}")]
    InvalidConfig {
        #[from]
        source: ConfigError,
    },
}
