//! Game flow on top of `gambit-core`: status evaluation, draw rules, history and undo.

mod config;
pub mod draw;
mod error;
mod game;
mod status;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use game::{Game, apply};
pub use status::{DrawReason, GameStatus, status};
