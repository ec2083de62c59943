//! Precomputed leaper attack tables and per-direction ray tables.

use crate::bitboard::Bitboard;

/// Ray directions as (file delta, rank delta).
///
/// The first four increase the square index, the last four decrease it.
/// Rook directions are the even indices, bishop directions the odd ones.
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),   // north
    (1, 1),   // north-east
    (1, 0),   // east
    (-1, 1),  // north-west
    (0, -1),  // south
    (-1, -1), // south-west
    (-1, 0),  // west
    (1, -1),  // south-east
];

pub(crate) const ROOK_DIRECTIONS: [usize; 4] = [0, 2, 4, 6];
pub(crate) const BISHOP_DIRECTIONS: [usize; 4] = [1, 3, 5, 7];

/// Return `true` if walking in direction `dir` increases the square index.
#[inline]
pub(crate) const fn is_positive(dir: usize) -> bool {
    dir < 4
}

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Build a leaper table by applying each (file, rank) delta that stays on the board.
const fn compute_leaper<const N: usize>(deltas: [(i8, i8); N]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < N {
            let f = file + deltas[d].0;
            let r = rank + deltas[d].1;
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << (r as usize * 8 + f as usize);
            }
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

/// Index 0 = White (captures toward rank 8), index 1 = Black.
const fn compute_pawn_attacks() -> [[Bitboard; 64]; 2] {
    [
        compute_leaper([(-1, 1), (1, 1)]),
        compute_leaper([(-1, -1), (1, -1)]),
    ]
}

/// `RAYS[dir][sq]`: every square reached from `sq` walking in `dir` on an empty board.
const fn compute_rays() -> [[Bitboard; 64]; 8] {
    let mut table = [[Bitboard::EMPTY; 64]; 8];
    let mut dir = 0usize;
    while dir < 8 {
        let (df, dr) = DIRECTIONS[dir];
        let mut sq = 0usize;
        while sq < 64 {
            let mut f = (sq % 8) as i8 + df;
            let mut r = (sq / 8) as i8 + dr;
            let mut bits = 0u64;
            while f >= 0 && f < 8 && r >= 0 && r < 8 {
                bits |= 1u64 << (r as usize * 8 + f as usize);
                f += df;
                r += dr;
            }
            table[dir][sq] = Bitboard::new(bits);
            sq += 1;
        }
        dir += 1;
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: [Bitboard; 64] = compute_leaper(KNIGHT_DELTAS);
pub(crate) static KING_ATTACKS: [Bitboard; 64] = compute_leaper(KING_DELTAS);
pub(crate) static PAWN_ATTACKS: [[Bitboard; 64]; 2] = compute_pawn_attacks();
pub(crate) static RAYS: [[Bitboard; 64]; 8] = compute_rays();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn knight_table_counts() {
        assert_eq!(KNIGHT_ATTACKS[Square::A1.index()].count(), 2);
        assert_eq!(KNIGHT_ATTACKS[Square::B1.index()].count(), 3);
        assert_eq!(KNIGHT_ATTACKS[Square::E4.index()].count(), 8);
        let total: u32 = KNIGHT_ATTACKS.iter().map(|bb| bb.count()).sum();
        assert_eq!(total, 336);
    }

    #[test]
    fn king_table_counts() {
        assert_eq!(KING_ATTACKS[Square::A1.index()].count(), 3);
        assert_eq!(KING_ATTACKS[Square::E1.index()].count(), 5);
        assert_eq!(KING_ATTACKS[Square::E4.index()].count(), 8);
        let total: u32 = KING_ATTACKS.iter().map(|bb| bb.count()).sum();
        assert_eq!(total, 420);
    }

    #[test]
    fn pawn_tables_do_not_wrap() {
        let white_a2 = PAWN_ATTACKS[0][Square::A2.index()];
        assert_eq!(white_a2, Square::B3.bitboard());
        let black_h7 = PAWN_ATTACKS[1][Square::H7.index()];
        assert_eq!(black_h7, Square::G6.bitboard());
        assert!(PAWN_ATTACKS[0][Square::E8.index()].is_empty());
        assert!(PAWN_ATTACKS[1][Square::E1.index()].is_empty());
    }

    #[test]
    fn rays_from_corner() {
        let north = RAYS[0][Square::A1.index()];
        assert_eq!(north, Bitboard::FILE_A.without(Square::A1));
        let north_east = RAYS[1][Square::A1.index()];
        assert_eq!(north_east.count(), 7);
        assert!(north_east.contains(Square::H8));
        assert!(RAYS[4][Square::A1.index()].is_empty());
        assert!(RAYS[6][Square::A1.index()].is_empty());
    }

    #[test]
    fn direction_signs_match_index_order() {
        for dir in 0..8 {
            let ray = RAYS[dir][Square::D4.index()];
            let first = if is_positive(dir) { ray.lsb() } else { ray.msb() };
            let first = first.unwrap();
            let (df, dr) = DIRECTIONS[dir];
            assert_eq!(Square::D4.offset(df, dr), Some(first), "direction {dir}");
        }
    }
}
