//! Game status of a position.

use std::fmt;

use gambit_core::{Board, Color, has_legal_moves};

use crate::config::GameConfig;
use crate::draw;

/// Why a game ended in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    FiftyMove,
    InsufficientMaterial,
    Repetition,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrawReason::FiftyMove => "fifty-move rule",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::Repetition => "repetition",
        })
    }
}

/// Where a game stands after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a reply.
    Check,
    Checkmate {
        winner: Color,
    },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    /// No further moves may be made.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::Draw(_)
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Check => f.write_str("check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner.name()),
            GameStatus::Stalemate => f.write_str("stalemate"),
            GameStatus::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}

/// Evaluate a single position with the default rules.
///
/// A lone snapshot carries no history, so repetition is never reported.
pub fn status(board: &Board) -> GameStatus {
    evaluate(board, &GameConfig::default(), 1)
}

/// Evaluate `board`, given how many times its position has occurred.
///
/// Checkmate and stalemate are decided first. Draw rules only apply to a side
/// that is not in check and still has a move, tried in the order fifty-move,
/// insufficient material, repetition.
pub(crate) fn evaluate(board: &Board, config: &GameConfig, occurrences: usize) -> GameStatus {
    let in_check = board.in_check();
    let can_move = has_legal_moves(board);

    match (in_check, can_move) {
        (true, false) => {
            return GameStatus::Checkmate {
                winner: !board.side_to_move(),
            };
        }
        (true, true) => return GameStatus::Check,
        (false, false) => return GameStatus::Stalemate,
        (false, true) => {}
    }

    if draw::is_fifty_move_draw(board, config.fifty_move_limit) {
        GameStatus::Draw(DrawReason::FiftyMove)
    } else if draw::is_insufficient_material(board) {
        GameStatus::Draw(DrawReason::InsufficientMaterial)
    } else if config.detect_repetition && occurrences >= usize::from(config.repetition_limit) {
        GameStatus::Draw(DrawReason::Repetition)
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(fen: &str) -> GameStatus {
        status(&fen.parse().unwrap())
    }

    #[test]
    fn start_is_in_progress() {
        assert_eq!(status(&Board::starting_position()), GameStatus::InProgress);
    }

    #[test]
    fn check_mate_and_stalemate() {
        assert_eq!(status_of("4k3/8/8/8/8/8/8/R3K3 b - - 0 1"), GameStatus::InProgress);
        assert_eq!(status_of("R3k3/8/8/8/8/8/8/4K3 b - - 0 1"), GameStatus::Check);
        assert_eq!(
            status_of("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1"),
            GameStatus::Checkmate {
                winner: Color::White
            }
        );
        assert_eq!(status_of("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
    }

    #[test]
    fn draws() {
        assert_eq!(
            status_of("4k3/8/8/8/8/8/8/R3K3 w - - 100 90"),
            GameStatus::Draw(DrawReason::FiftyMove)
        );
        assert_eq!(
            status_of("4k3/8/8/8/8/8/8/4KN2 w - - 0 1"),
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        );
    }

    #[test]
    fn mate_beats_fifty_move_rule() {
        assert_eq!(
            status_of("R5k1/5ppp/8/8/8/8/8/6K1 b - - 120 90"),
            GameStatus::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn repetition_needs_occurrences_and_detection() {
        let board = Board::starting_position();
        let mut config = GameConfig::default();
        assert_eq!(evaluate(&board, &config, 2), GameStatus::InProgress);
        assert_eq!(
            evaluate(&board, &config, 3),
            GameStatus::Draw(DrawReason::Repetition)
        );
        config.detect_repetition = false;
        assert_eq!(evaluate(&board, &config, 3), GameStatus::InProgress);
    }

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::Draw(DrawReason::Repetition).is_terminal());
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::Black
            }
            .to_string(),
            "checkmate, black wins"
        );
    }
}
