//! Standard algebraic notation (SAN) for moves.

use std::fmt::{self, Display, Write};

use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::movegen::{MoveList, generate_legal_moves, has_legal_moves};
use crate::piece::PieceKind;
use crate::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disambiguator {
    File(u8),
    Rank(u8),
    Square(Square),
}

impl Display for Disambiguator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disambiguator::File(file) => f.write_char((file + b'a') as char),
            Disambiguator::Rank(rank) => f.write_char((rank + b'1') as char),
            Disambiguator::Square(square) => write!(f, "{square}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SanBody {
    Regular {
        piece: PieceKind,
        disambiguator: Option<Disambiguator>,
        is_capture: bool,
        to: Square,
        promotion: Option<PieceKind>,
    },
    Castle {
        is_long: bool,
    },
}

impl Display for SanBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SanBody::Regular {
                piece,
                disambiguator,
                is_capture,
                to,
                promotion,
            } => {
                if piece != PieceKind::Pawn {
                    f.write_char(piece.san_char())?;
                }
                if let Some(disambiguator) = disambiguator {
                    write!(f, "{disambiguator}")?;
                }
                if is_capture {
                    f.write_char('x')?;
                }
                write!(f, "{to}")?;
                if let Some(promotion) = promotion {
                    write!(f, "={}", promotion.san_char())?;
                }
                Ok(())
            }
            SanBody::Castle { is_long: false } => f.write_str("O-O"),
            SanBody::Castle { is_long: true } => f.write_str("O-O-O"),
        }
    }
}

/// A move written in standard algebraic notation, e.g. `Nbd7`, `exd6`, `e8=Q+`, `O-O#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct San {
    body: SanBody,
    is_check: bool,
    is_checkmate: bool,
}

impl San {
    #[inline]
    pub fn is_check(&self) -> bool {
        self.is_check
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }
}

impl Display for San {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.body)?;
        if self.is_checkmate {
            f.write_char('#')
        } else if self.is_check {
            f.write_char('+')
        } else {
            Ok(())
        }
    }
}

impl Board {
    /// Write `mv` in SAN, or return `None` if it is not legal here.
    pub fn san(&self, mv: Move) -> Option<San> {
        let legal = generate_legal_moves(self);
        if !legal.contains(&mv) {
            return None;
        }
        Some(san_with(self, mv, &legal))
    }

    /// Find the legal move written as `text` in SAN.
    ///
    /// Check and annotation suffixes (`+`, `#`, `!`, `?`) are ignored, and
    /// castling may be written with zeros.
    ///
    /// # Errors
    ///
    /// [`MoveError::Unparsable`] when `text` does not look like SAN at all,
    /// [`MoveError::Illegal`] when no legal move matches.
    pub fn parse_san(&self, text: &str) -> Result<Move, MoveError> {
        let wanted = text
            .trim()
            .trim_end_matches(['+', '#', '!', '?'])
            .replace('0', "O");
        let looks_like_san = wanted
            .chars()
            .next()
            .is_some_and(|c| "KQRBNOabcdefgh".contains(c));
        if !looks_like_san {
            return Err(MoveError::Unparsable {
                text: text.to_string(),
            });
        }

        let legal = generate_legal_moves(self);
        legal
            .iter()
            .copied()
            .find(|&mv| san_with(self, mv, &legal).body.to_string() == wanted)
            .ok_or_else(|| MoveError::Illegal {
                notation: text.to_string(),
            })
    }
}

fn san_with(board: &Board, mv: Move, legal: &MoveList) -> San {
    let body = match mv.castle_side() {
        Some(side) => SanBody::Castle {
            is_long: side == CastleSide::QueenSide,
        },
        None => SanBody::Regular {
            piece: mv.piece(),
            disambiguator: disambiguator(mv, legal),
            is_capture: mv.is_capture(),
            to: mv.to(),
            promotion: mv.promotion_kind(),
        },
    };

    let after = board.make_move(mv);
    let is_check = after.in_check();
    let is_checkmate = is_check && !has_legal_moves(&after);
    San {
        body,
        is_check,
        is_checkmate,
    }
}

/// Pawn captures always name the origin file. Pieces name the file when it
/// tells the candidates apart, else the rank, else the whole square.
fn disambiguator(mv: Move, legal: &MoveList) -> Option<Disambiguator> {
    let from = mv.from();
    if mv.piece() == PieceKind::Pawn {
        return mv.is_capture().then_some(Disambiguator::File(from.file()));
    }

    let mut ambiguous = false;
    let mut same_file = false;
    let mut same_rank = false;
    for other in legal {
        if other.piece() == mv.piece() && other.to() == mv.to() && other.from() != from {
            ambiguous = true;
            same_file |= other.from().file() == from.file();
            same_rank |= other.from().rank() == from.rank();
        }
    }

    if !ambiguous {
        None
    } else if !same_file {
        Some(Disambiguator::File(from.file()))
    } else if !same_rank {
        Some(Disambiguator::Rank(from.rank()))
    } else {
        Some(Disambiguator::Square(from))
    }
}
