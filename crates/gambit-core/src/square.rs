//! Board squares as (file, rank) pairs in Little-Endian Rank-File order.

use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::error::SquareError;

/// A square on the board. Index = rank * 8 + file, so a1 = 0, h1 = 7, h8 = 63.
///
/// A `Square` is always in bounds; out-of-range coordinates are rejected by
/// [`Square::try_new`] and by parsing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a 0-based file and rank.
    ///
    /// Debug-asserts both are below 8; use [`Square::try_new`] for untrusted input.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Square {
        debug_assert!(file < 8 && rank < 8);
        Square(rank * 8 + file)
    }

    /// Create a square from signed coordinates, failing when either is off the board.
    pub fn try_new(file: i32, rank: i32) -> Result<Square, SquareError> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Ok(Square::new(file as u8, rank as u8))
        } else {
            Err(SquareError::OutOfBounds { file, rank })
        }
    }

    /// Create a square from a 0-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        match s.as_bytes() {
            &[f @ b'a'..=b'h', r @ b'1'..=b'8'] => Some(Square::new(f - b'a', r - b'1')),
            _ => None,
        }
    }

    /// Return the 0-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the 0-based file (0 = a, 7 = h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Return the 0-based rank (0 = rank 1, 7 = rank 8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Step by the given file and rank deltas, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let f = self.file() as i8 + df;
        let r = self.rank() as i8 + dr;
        if f >= 0 && f < 8 && r >= 0 && r < 8 {
            Some(Square::new(f as u8, r as u8))
        } else {
            None
        }
    }

    /// Return `true` for dark squares (a1 is dark).
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.file() + self.rank()) % 2 == 0
    }

    /// Return a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    /// Return the file letter, `'a'..='h'`.
    pub const fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    /// Return the rank digit, `'1'..='8'`.
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }
}

macro_rules! named_squares {
    ($($name:ident = $idx:literal),* $(,)?) => {
        impl Square {
            $(pub const $name: Square = Square($idx);)*
        }
    };
}

named_squares! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Square, SquareError> {
        Square::from_algebraic(s).ok_or_else(|| SquareError::BadNotation {
            text: s.to_string(),
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::error::SquareError;

    #[test]
    fn coordinates_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::new(sq.file(), sq.rank()), sq);
        }
        assert_eq!(Square::new(4, 3), Square::E4);
        assert_eq!(Square::E4.file(), 4);
        assert_eq!(Square::E4.rank(), 3);
    }

    #[test]
    fn try_new_bounds() {
        assert_eq!(Square::try_new(0, 0), Ok(Square::A1));
        assert_eq!(Square::try_new(7, 7), Ok(Square::H8));
        assert_eq!(
            Square::try_new(8, 0),
            Err(SquareError::OutOfBounds { file: 8, rank: 0 })
        );
        assert!(Square::try_new(-1, 3).is_err());
        assert!(Square::try_new(3, 8).is_err());
    }

    #[test]
    fn from_index_range() {
        assert_eq!(Square::from_index(63), Some(Square::H8));
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::E4));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a10").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert_eq!("d5".parse::<Square>(), Ok(Square::D5));
        assert!(matches!(
            "z0".parse::<Square>(),
            Err(SquareError::BadNotation { .. })
        ));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(format!("{}", Square::C7), "c7");
        assert_eq!(format!("{:?}", Square::C7), "Square(c7)");
    }

    #[test]
    fn offset_does_not_wrap() {
        assert_eq!(Square::H4.offset(1, 0), None);
        assert_eq!(Square::A4.offset(-1, 0), None);
        assert_eq!(Square::E1.offset(0, -1), None);
        assert_eq!(Square::E4.offset(1, 2), Some(Square::F6));
        assert_eq!(Square::E4.offset(-2, -1), Some(Square::C3));
    }

    #[test]
    fn square_colors() {
        assert!(Square::A1.is_dark());
        assert!(!Square::H1.is_dark());
        assert!(Square::H8.is_dark());
        assert!(!Square::D1.is_dark());
    }
}
