//! Error types for coordinates, position parsing, board validation and moves.

/// An out-of-range or unparsable square.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// File or rank outside 0..8.
    #[error("square out of bounds: file {file}, rank {rank}")]
    OutOfBounds {
        /// Requested file.
        file: i32,
        /// Requested rank.
        rank: i32,
    },
    /// Text that is not algebraic notation for a square.
    #[error("invalid square: \"{text}\"")]
    BadNotation {
        /// The rejected text.
        text: String,
    },
}

/// A malformed FEN position string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 6 space-separated fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index in FEN order (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },
    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// "halfmove clock" or "fullmove number".
        field: &'static str,
        found: String,
    },
    /// The position parsed but fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// A position that violates a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: u32,
    },
    /// The side that just moved left its own king attacked.
    #[error("{color} king is in check but it is not {color}'s move")]
    OpponentInCheck { color: &'static str },
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// More than sixteen pieces for one side.
    #[error("{color} has {count} pieces, at most 16 are possible")]
    TooManyPieces { color: &'static str, count: u32 },
    /// More pawns plus promoted pieces than the eight pawns a side starts with.
    #[error("{color} has {pawns} pawns and {promoted} promoted pieces, at most 8 together")]
    ImpossibleMaterial {
        color: &'static str,
        pawns: u32,
        promoted: u32,
    },
    /// A castling flag is set but its king or rook is not on its home square.
    #[error("castling right '{right}' without king and rook on their home squares")]
    CastlingWithoutPieces {
        /// FEN letter of the offending right.
        right: char,
    },
    /// The en passant target is not on the rank behind a just-pushed enemy pawn.
    #[error("en passant square {square} is inconsistent with the position")]
    InconsistentEnPassant {
        /// The rejected target square.
        square: String,
    },
}

/// A move that cannot be played or understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The move is not among the legal moves of the position.
    #[error("illegal move: {notation}")]
    Illegal {
        /// The move as written by the caller.
        notation: String,
    },
    /// The text is neither coordinate notation nor algebraic notation.
    #[error("unrecognized move notation: \"{text}\"")]
    Unparsable {
        /// The rejected text.
        text: String,
    },
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, MoveError, SquareError};

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert_eq!(err.to_string(), "expected 6 FEN fields, found 4");
    }

    #[test]
    fn fen_error_wraps_board_error() {
        let fen_err: FenError = BoardError::PawnsOnBackRank.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
        assert_eq!(fen_err.to_string(), "invalid board: pawns found on back rank");
        assert!(std::error::Error::source(&fen_err).is_some());
    }

    #[test]
    fn move_error_from_square_error() {
        let err: MoveError = SquareError::OutOfBounds { file: 9, rank: 0 }.into();
        assert_eq!(err.to_string(), "square out of bounds: file 9, rank 0");
    }

    #[test]
    fn illegal_move_display() {
        let err = MoveError::Illegal {
            notation: "e2e5".to_string(),
        };
        assert_eq!(err.to_string(), "illegal move: e2e5");
    }
}
