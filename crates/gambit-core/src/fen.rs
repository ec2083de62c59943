//! FEN string parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse all six fields without structural validation.
fn parse_fields(fen: &str) -> Result<Board, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let &[placement, active, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
        return Err(FenError::WrongFieldCount {
            found: fields.len(),
        });
    };

    let mut board = Board::empty();
    parse_placement(&mut board, placement)?;

    let side_to_move = match active {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidColor {
                found: other.to_string(),
            });
        }
    };
    board.set_side_to_move(side_to_move);
    board.set_castling(CastleRights::from_fen(castling)?);

    let en_passant = match en_passant {
        "-" => None,
        text => Some(
            Square::from_algebraic(text).ok_or_else(|| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?,
        ),
    };
    board.set_en_passant(en_passant);

    board.set_halfmove_clock(parse_counter(halfmove, "halfmove clock")?);
    board.set_fullmove_number(parse_counter(fullmove, "fullmove number")?);
    board.refresh_hash();
    Ok(board)
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    // FEN lists rank 8 first.
    for (rank_index, text) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut file: usize = 0;

        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            if file >= 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file + 1,
                });
            }
            board.put_piece(Square::new(file as u8, rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file,
            });
        }
    }
    Ok(())
}

fn parse_counter(text: &str, field: &'static str) -> Result<u16, FenError> {
    text.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: text.to_string(),
    })
}

impl Board {
    /// Parse a FEN string for a setup position that may lack kings.
    ///
    /// Everything except the king count is still validated.
    pub fn from_setup_fen(fen: &str) -> Result<Board, FenError> {
        let board = parse_fields(fen)?;
        board.validate_placement()?;
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let board = parse_fields(fen)?;
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty_count = 0u8;
            for file in 0u8..8 {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
