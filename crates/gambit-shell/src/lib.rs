//! A line-oriented text shell for playing and inspecting games.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::ShellError;
pub use session::{Flow, Session};
