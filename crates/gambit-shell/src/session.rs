//! The interactive session: reads commands, drives a [`Game`], writes replies.

use std::io::{BufRead, Write};

use gambit_core::{Board, Move, divide};
use gambit_game::{Game, GameError, GameStatus};
use tracing::{debug, info, warn};

use crate::command::{Command, parse_command};
use crate::error::ShellError;

const HELP: &str = "\
commands:
  new                                 start a new game
  position startpos|fen <fen> [moves ...]
                                      set up a position and play moves
  moves [square]                      list legal moves
  play <move>                         make a move (e2e4, e7e8q, Nf3, O-O)
  undo                                take back the last move
  status                              show the game status
  board                               draw the board
  fen                                 print the position as FEN
  perft <depth>                       count leaf nodes per move
  set <option> <value>                fifty_move_limit, repetition_limit, detect_repetition
  help                                show this text
  quit                                leave";

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A shell session around one game.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
}

impl Session {
    /// Create a session with a new game.
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Process `input` line by line until `quit` or end of input.
    ///
    /// A command that fails prints an `error:` line and the session goes on;
    /// only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), ShellError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed).and_then(|command| self.execute(command, output)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err @ ShellError::Io { .. }) => return Err(err),
                Err(err) => {
                    warn!(%err, "command failed");
                    writeln!(output, "error: {err}")?;
                }
            }
            output.flush()?;
        }
        info!("session ended");
        Ok(())
    }

    /// Run one parsed command, writing its reply to `output`.
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<Flow, ShellError> {
        match command {
            Command::New => {
                let config = *self.game.config();
                self.game = Game::with_config(config)?;
                writeln!(output, "ok")?;
            }
            Command::Position { board, moves } => self.handle_position(board, &moves, output)?,
            Command::Moves(square) => {
                let moves = match square {
                    Some(sq) => self.game.selectable_moves(sq),
                    None => self.game.legal_moves(),
                };
                let mut names: Vec<String> = moves.iter().map(Move::to_string).collect();
                names.sort();
                if names.is_empty() {
                    writeln!(output, "(none)")?;
                } else {
                    writeln!(output, "{}", names.join(" "))?;
                }
            }
            Command::Play(text) => self.handle_play(&text, output)?,
            Command::Undo => {
                let mv = self.game.undo()?;
                writeln!(output, "undone {mv}")?;
            }
            Command::Status => writeln!(output, "status: {}", self.game.status())?,
            Command::Board => writeln!(output, "{}", self.game.board().pretty())?,
            Command::Fen => writeln!(output, "{}", self.game.board())?,
            Command::Perft(depth) => {
                let mut total: u64 = 1;
                if depth > 0 {
                    let parts = divide(self.game.board(), depth);
                    for (mv, nodes) in &parts {
                        writeln!(output, "{mv}: {nodes}")?;
                    }
                    total = parts.iter().map(|(_, nodes)| nodes).sum();
                }
                writeln!(output, "nodes: {total}")?;
            }
            Command::Set { name, value } => {
                let mut config = *self.game.config();
                config.set(&name, &value).map_err(GameError::from)?;
                self.game.set_config(config)?;
                info!(%name, %value, "option set");
                writeln!(output, "ok")?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_position<W: Write>(
        &mut self,
        board: Board,
        moves: &[String],
        output: &mut W,
    ) -> Result<(), ShellError> {
        let mut game = Game::from_board(board);
        game.set_config(*self.game.config())?;
        for text in moves {
            game.play(text)?;
        }
        self.game = game;
        writeln!(output, "ok")?;
        Ok(())
    }

    fn handle_play<W: Write>(&mut self, text: &str, output: &mut W) -> Result<(), ShellError> {
        let before = *self.game.board();
        let mv = self.game.play(text)?;
        let san = before.san(mv).map_or_else(|| mv.to_string(), |san| san.to_string());
        writeln!(output, "played {san}")?;

        let status = self.game.status();
        if status != GameStatus::InProgress {
            writeln!(output, "status: {status}")?;
        }
        Ok(())
    }
}
