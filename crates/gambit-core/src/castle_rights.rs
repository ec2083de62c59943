//! Castling rights and the fixed geometry of the two castling moves.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which wing of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// The king's home square.
    #[inline]
    pub const fn king_from(color: Color) -> Square {
        Square::new(4, color.back_rank())
    }

    /// Where the king lands.
    #[inline]
    pub const fn king_to(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::new(6, color.back_rank()),
            CastleSide::QueenSide => Square::new(2, color.back_rank()),
        }
    }

    /// The rook's home square on this wing.
    #[inline]
    pub const fn rook_from(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::new(7, color.back_rank()),
            CastleSide::QueenSide => Square::new(0, color.back_rank()),
        }
    }

    /// Where the rook lands, the square the king crosses.
    #[inline]
    pub const fn rook_to(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => Square::new(5, color.back_rank()),
            CastleSide::QueenSide => Square::new(3, color.back_rank()),
        }
    }

    /// Squares strictly between king and rook; all must be empty.
    pub const fn between(self, color: Color) -> Bitboard {
        let rank = Bitboard::rank(color.back_rank()).inner();
        let files: u64 = match self {
            CastleSide::KingSide => 0b0110_0000,
            CastleSide::QueenSide => 0b0000_1110,
        };
        Bitboard::new(rank & (files * 0x0101_0101_0101_0101))
    }

    /// Squares the king stands on, crosses and lands on; none may be attacked.
    #[inline]
    pub const fn king_path(self, color: Color) -> [Square; 3] {
        [
            CastleSide::king_from(color),
            self.rook_to(color),
            self.king_to(color),
        ]
    }
}

/// Castling rights as four independent flags: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);
    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);
    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    /// Return the raw bits (0..16).
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check whether `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    /// The single flag for a color and wing.
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Flags lost when a move leaves from or lands on `sq`.
    ///
    /// A king leaving its home square loses both flags; a rook leaving (or
    /// being captured on) a corner loses that wing's flag.
    pub const fn revoked_by(sq: Square) -> CastleRights {
        match sq.index() {
            4 => Self::WHITE_BOTH,
            0 => Self::WHITE_QUEEN,
            7 => Self::WHITE_KING,
            60 => Self::BLACK_BOTH,
            56 => Self::BLACK_QUEEN,
            63 => Self::BLACK_KING,
            _ => Self::NONE,
        }
    }

    /// Parse the FEN castling field (`"KQkq"`, `"Kq"`, `"-"`).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let flag = match c {
                'K' => Self::WHITE_KING,
                'Q' => Self::WHITE_QUEEN,
                'k' => Self::BLACK_KING,
                'q' => Self::BLACK_QUEEN,
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.insert(flag))
        })
    }

    /// Iterate over the set flags as (color, side, FEN letter).
    pub(crate) fn iter(self) -> impl Iterator<Item = (Color, CastleSide, char)> {
        [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ]
        .into_iter()
        .filter(move |&(color, side, _)| self.has(color, side))
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (_, _, c) in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}
