//! Shell errors.

use gambit_core::{FenError, SquareError};
use gambit_game::GameError;

/// Errors that can occur while parsing or running a shell command.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The line held no command.
    #[error("empty command")]
    EmptyCommand,

    /// The first word is not a known command.
    #[error("unknown command '{name}' (try 'help')")]
    UnknownCommand {
        /// The unrecognized command word.
        name: String,
    },

    /// A required argument was not given.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// An argument could not be parsed or is out of range.
    #[error("{command}: invalid argument '{value}'")]
    InvalidArgument { command: &'static str, value: String },

    /// The `position` command is missing `startpos` or `fen`.
    #[error("malformed position command: expected 'startpos' or 'fen <fen>'")]
    MalformedPosition,

    /// The FEN in a `position` command was rejected.
    #[error("invalid FEN: {source}")]
    InvalidFen {
        #[from]
        source: FenError,
    },

    #[error(transparent)]
    InvalidSquare(#[from] SquareError),

    #[error(transparent)]
    Game(#[from] GameError),

    /// Reading input or writing a reply failed.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
