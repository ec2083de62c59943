//! Zobrist keys for position identity and repetition detection.

use crate::attacks::pawn_attacks;
use crate::board::Board;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

const SEED: u64 = 0x6761_6d62_6974_2121; // "gambit!!"

/// SplitMix64 output for the `n`-th key after the seed.
const fn key(n: u64) -> u64 {
    let mut z = SEED.wrapping_add(n.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

const PIECE_SQUARE_BASE: u64 = 0;
const SIDE_TO_MOVE_BASE: u64 = 12 * 64;
const CASTLING_BASE: u64 = SIDE_TO_MOVE_BASE + 1;
const EN_PASSANT_BASE: u64 = CASTLING_BASE + 16;

/// Indexed by `[Piece::index()][Square::index()]`.
pub(crate) static PIECE_SQUARE: [[u64; 64]; 12] = {
    let mut table = [[0u64; 64]; 12];
    let mut piece = 0;
    while piece < 12 {
        let mut sq = 0;
        while sq < 64 {
            table[piece][sq] = key(PIECE_SQUARE_BASE + (piece * 64 + sq) as u64);
            sq += 1;
        }
        piece += 1;
    }
    table
};

/// XORed in when Black is to move.
pub(crate) static SIDE_TO_MOVE: u64 = key(SIDE_TO_MOVE_BASE);

/// Indexed by `CastleRights::bits()`.
pub(crate) static CASTLING: [u64; 16] = {
    let mut table = [0u64; 16];
    let mut i = 0;
    while i < 16 {
        table[i] = key(CASTLING_BASE + i as u64);
        i += 1;
    }
    table
};

/// Indexed by the en passant file.
pub(crate) static EN_PASSANT_FILE: [u64; 8] = {
    let mut table = [0u64; 8];
    let mut i = 0;
    while i < 8 {
        table[i] = key(EN_PASSANT_BASE + i as u64);
        i += 1;
    }
    table
};

#[inline]
pub(crate) fn piece_square(piece: Piece, sq: Square) -> u64 {
    PIECE_SQUARE[piece.index()][sq.index()]
}

/// En passant contribution of `board`: the target file, but only when the side
/// to move has a pawn that can actually capture onto the target.
pub(crate) fn en_passant(board: &Board) -> u64 {
    let Some(target) = board.en_passant() else {
        return 0;
    };
    let us = board.side_to_move();
    let capturers = pawn_attacks(!us, target) & board.pieces(PieceKind::Pawn) & board.side(us);
    if capturers.is_nonempty() {
        EN_PASSANT_FILE[target.file() as usize]
    } else {
        0
    }
}

/// Compute a Zobrist hash from scratch for the given board.
pub(crate) fn hash_from_scratch(board: &Board) -> u64 {
    let mut hash = Square::all()
        .filter_map(|sq| board.piece_at(sq).map(|piece| piece_square(piece, sq)))
        .fold(0u64, |acc, k| acc ^ k);

    if board.side_to_move() == Color::Black {
        hash ^= SIDE_TO_MOVE;
    }
    hash ^= CASTLING[board.castling().bits() as usize];
    hash ^ en_passant(board)
}
