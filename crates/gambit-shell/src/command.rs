//! Shell command parsing.

use gambit_core::{Board, Square};

use crate::error::ShellError;

/// Deepest `perft` the shell will run.
pub const MAX_PERFT_DEPTH: usize = 6;

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start a new game from the starting position.
    New,
    /// `position` -- start from a position, then play the listed moves.
    Position { board: Board, moves: Vec<String> },
    /// `moves [square]` -- list legal moves, optionally of one piece.
    Moves(Option<Square>),
    /// `play <move>` -- make a move in coordinate notation or SAN.
    Play(String),
    /// `undo` -- take back the last move.
    Undo,
    /// `status` -- report the game status.
    Status,
    /// `board` -- draw the board.
    Board,
    /// `fen` -- print the current position as FEN.
    Fen,
    /// `perft <depth>` -- count leaf nodes per root move.
    Perft(usize),
    /// `set <option> <value>` -- change a draw rule.
    Set { name: String, value: String },
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave the shell.
    Quit,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&name) = tokens.first() else {
        return Err(ShellError::EmptyCommand);
    };
    let args = &tokens[1..];

    match name {
        "new" => Ok(Command::New),
        "position" => parse_position(args),
        "moves" => match args.first() {
            Some(text) => Ok(Command::Moves(Some(text.parse()?))),
            None => Ok(Command::Moves(None)),
        },
        "play" => {
            let text = args.first().ok_or(ShellError::MissingArgument {
                command: "play",
                argument: "move",
            })?;
            Ok(Command::Play(text.to_string()))
        }
        "undo" => Ok(Command::Undo),
        "status" => Ok(Command::Status),
        "board" => Ok(Command::Board),
        "fen" => Ok(Command::Fen),
        "perft" => {
            let depth: usize = parse_arg(args.first(), "perft", "depth")?;
            if depth > MAX_PERFT_DEPTH {
                return Err(ShellError::InvalidArgument {
                    command: "perft",
                    value: depth.to_string(),
                });
            }
            Ok(Command::Perft(depth))
        }
        "set" => {
            let [option, value] = args else {
                return Err(ShellError::MissingArgument {
                    command: "set",
                    argument: "option and value",
                });
            };
            Ok(Command::Set {
                name: option.to_string(),
                value: value.to_string(),
            })
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(ShellError::UnknownCommand {
            name: name.to_string(),
        }),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 e7e5 ...]`
/// - `position fen <fen-string> [moves e2e4 e7e5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, ShellError> {
    let (board, rest) = match tokens.first() {
        Some(&"startpos") => (Board::starting_position(), &tokens[1..]),
        Some(&"fen") => {
            // FEN is 6 space-separated fields
            if tokens.len() < 7 {
                return Err(ShellError::MissingArgument {
                    command: "position",
                    argument: "six FEN fields",
                });
            }
            let board: Board = tokens[1..7].join(" ").parse()?;
            (board, &tokens[7..])
        }
        _ => return Err(ShellError::MalformedPosition),
    };

    let moves = match rest {
        [] => Vec::new(),
        ["moves", moves @ ..] => moves.iter().map(|mv| mv.to_string()).collect(),
        _ => return Err(ShellError::MalformedPosition),
    };

    Ok(Command::Position { board, moves })
}

fn parse_arg<T: std::str::FromStr>(
    token: Option<&&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<T, ShellError> {
    let value = token.ok_or(ShellError::MissingArgument { command, argument })?;
    value.parse().map_err(|_| ShellError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}
