//! The chess board: piece placement, side to move, castling, en passant, and move counters.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;
use crate::zobrist;

/// Complete chess position state.
///
/// A `Board` is an immutable snapshot from the outside: every public operation
/// that changes the position returns a new `Board`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Piece on each square, indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
    /// Bitboard for each piece kind, indexed by [`PieceKind::index()`].
    pieces: [Bitboard; PieceKind::COUNT],
    /// Bitboard for each side, indexed by [`Color::index()`].
    sides: [Bitboard; Color::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    /// Square skipped by the last double pawn push, if any.
    en_passant: Option<Square>,
    /// Half-moves since the last pawn move or capture.
    halfmove_clock: u16,
    /// Starts at 1, incremented after each Black move.
    fullmove_number: u16,
    hash: u64,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Return a board with no pieces, White to move, and no castling rights.
    pub fn empty() -> Board {
        let mut board = Board {
            squares: [None; Square::COUNT],
            pieces: [Bitboard::EMPTY; PieceKind::COUNT],
            sides: [Bitboard::EMPTY; Color::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
        };
        board.refresh_hash();
        board
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                let file = file as u8;
                board.put_piece(Square::new(file, color.back_rank()), Piece::new(kind, color));
                board.put_piece(
                    Square::new(file, color.pawn_rank()),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board.castling = CastleRights::ALL;
        board.refresh_hash();
        board
    }

    /// Return a copy of this board with `piece` placed on `sq`, replacing any occupant.
    ///
    /// Intended for building test positions; no validation is performed.
    pub fn with_piece(&self, sq: Square, piece: Piece) -> Board {
        let mut board = *self;
        board.remove_piece(sq);
        board.put_piece(sq, piece);
        board.refresh_hash();
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return the piece kind on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<PieceKind> {
        self.piece_at(sq).map(Piece::kind)
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Return the bitboard for the given piece kind (both colors).
    #[inline]
    pub fn pieces(&self, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()]
    }

    /// Return the bitboard for one kind of one color.
    #[inline]
    pub fn pieces_of(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.pieces[kind.index()] & self.sides[color.index()]
    }

    /// Return the bitboard for the given side.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Return the bitboard of all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    /// Return `true` if any piece stands on `sq`.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Return the square of the king for the given side, or `None` for
    /// kingless setups.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(PieceKind::King, color).lsb()
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the castling rights still held.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Return the en passant target square, if a double push just happened.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Return the number of half-moves since the last capture or pawn move.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Return the full-move number, starting at 1 and bumped after Black moves.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Return the Zobrist key of the position.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Place `piece` on the empty square `sq`, keeping bitboards and hash in sync.
    pub(crate) fn put_piece(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.squares[sq.index()].is_none(), "{sq} is occupied");
        self.squares[sq.index()] = Some(piece);
        self.pieces[piece.kind().index()] |= sq.bitboard();
        self.sides[piece.color().index()] |= sq.bitboard();
        self.hash ^= zobrist::piece_square(piece, sq);
    }

    /// Remove and return whatever stands on `sq`.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq.index()].take()?;
        self.pieces[piece.kind().index()] ^= sq.bitboard();
        self.sides[piece.color().index()] ^= sq.bitboard();
        self.hash ^= zobrist::piece_square(piece, sq);
        Some(piece)
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    #[inline]
    pub(crate) fn set_hash(&mut self, hash: u64) {
        self.hash = hash;
    }

    /// Recompute the Zobrist key after direct field edits.
    pub(crate) fn refresh_hash(&mut self) {
        self.hash = zobrist::hash_from_scratch(self);
    }

    /// Check the invariants a playable position must satisfy.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.pieces_of(PieceKind::King, color).count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count,
                });
            }
        }
        self.validate_placement()?;

        let us = self.side_to_move;
        if self
            .king_square(!us)
            .is_some_and(|king| self.is_square_attacked(king, us))
        {
            return Err(BoardError::OpponentInCheck {
                color: (!us).name(),
            });
        }
        Ok(())
    }

    /// The checks of [`Board::validate`] that still make sense without kings.
    pub(crate) fn validate_placement(&self) -> Result<(), BoardError> {
        let back_ranks = Bitboard::RANK_1 | Bitboard::RANK_8;
        if (self.pieces(PieceKind::Pawn) & back_ranks).is_nonempty() {
            return Err(BoardError::PawnsOnBackRank);
        }

        for color in Color::ALL {
            self.validate_material(color)?;
        }

        for (color, side, right) in self.castling.iter() {
            let king_home = self.piece_at(CastleSide::king_from(color));
            let rook_home = self.piece_at(side.rook_from(color));
            if king_home != Some(Piece::new(PieceKind::King, color))
                || rook_home != Some(Piece::new(PieceKind::Rook, color))
            {
                return Err(BoardError::CastlingWithoutPieces { right });
            }
        }

        if let Some(target) = self.en_passant {
            self.validate_en_passant(target)?;
        }

        Ok(())
    }

    /// A side keeps at most sixteen pieces, and every piece beyond the
    /// starting set must have come from one of its eight pawns.
    fn validate_material(&self, color: Color) -> Result<(), BoardError> {
        let count = self.side(color).count();
        if count > 16 {
            return Err(BoardError::TooManyPieces {
                color: color.name(),
                count,
            });
        }

        let pawns = self.pieces_of(PieceKind::Pawn, color).count();
        let promoted: u32 = [
            (PieceKind::Knight, 2),
            (PieceKind::Bishop, 2),
            (PieceKind::Rook, 2),
            (PieceKind::Queen, 1),
        ]
        .into_iter()
        .map(|(kind, home)| self.pieces_of(kind, color).count().saturating_sub(home))
        .sum();
        if pawns + promoted > 8 {
            return Err(BoardError::ImpossibleMaterial {
                color: color.name(),
                pawns,
                promoted,
            });
        }
        Ok(())
    }

    /// The target must sit behind an enemy pawn that could just have moved two squares.
    fn validate_en_passant(&self, target: Square) -> Result<(), BoardError> {
        let us = self.side_to_move;
        let them = !us;
        let expected_rank = if us == Color::White { 5 } else { 2 };
        let pushed = target.offset(0, -us.forward());
        let origin = target.offset(0, us.forward());

        let consistent = target.rank() == expected_rank
            && !self.is_occupied(target)
            && origin.is_some_and(|sq| !self.is_occupied(sq))
            && pushed.and_then(|sq| self.piece_at(sq)) == Some(Piece::new(PieceKind::Pawn, them));

        if consistent {
            Ok(())
        } else {
            Err(BoardError::InconsistentEnPassant {
                square: target.to_string(),
            })
        }
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = board
                    .piece_at(Square::new(file, rank))
                    .map_or('.', Piece::fen_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
