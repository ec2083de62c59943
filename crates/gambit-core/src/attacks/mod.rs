//! Attack generation: leaper tables and ray-cast sliding attacks.

mod tables;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::piece::PieceKind;
use crate::square::Square;

use self::tables::{
    BISHOP_DIRECTIONS, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS, RAYS, ROOK_DIRECTIONS,
    is_positive,
};

/// Return the squares a knight on `sq` attacks.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Return the squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Return the squares a pawn of `color` on `sq` attacks (diagonal captures only).
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Cast one ray from `sq` and cut it at the first occupied square, keeping that square.
#[inline]
fn ray_attacks(sq: Square, occupied: Bitboard, dir: usize) -> Bitboard {
    let ray = RAYS[dir][sq.index()];
    let blockers = ray & occupied;
    let nearest = if is_positive(dir) {
        blockers.lsb()
    } else {
        blockers.msb()
    };
    match nearest {
        Some(blocker) => ray ^ RAYS[dir][blocker.index()],
        None => ray,
    }
}

/// Return rook attacks from `sq` given `occupied` squares.
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ROOK_DIRECTIONS
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(sq, occupied, dir))
}

/// Return bishop attacks from `sq` given `occupied` squares.
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    BISHOP_DIRECTIONS
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(sq, occupied, dir))
}

/// Return queen attacks from `sq` given `occupied` squares.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

/// Return the squares attacked by a `kind` of `color` standing on `sq`.
pub fn piece_attacks(kind: PieceKind, color: Color, sq: Square, occupied: Bitboard) -> Bitboard {
    match kind {
        PieceKind::Pawn => pawn_attacks(color, sq),
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::Bishop => bishop_attacks(sq, occupied),
        PieceKind::Rook => rook_attacks(sq, occupied),
        PieceKind::Queen => queen_attacks(sq, occupied),
        PieceKind::King => king_attacks(sq),
    }
}

/// Return the squares the piece on `sq` could capture on, given the board's occupancy.
///
/// Own pieces are not filtered out and legality is not considered. Empty when
/// `sq` holds no piece.
pub fn attacks_of(board: &Board, sq: Square) -> Bitboard {
    match board.piece_at(sq) {
        Some(piece) => piece_attacks(piece.kind(), piece.color(), sq, board.occupied()),
        None => Bitboard::EMPTY,
    }
}

impl Board {
    /// Return `true` if `sq` is attacked by any piece of `by_color`.
    ///
    /// Reverse lookup: each attack pattern is cast from the target square and
    /// intersected with the attacker's pieces of that kind.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        self.attackers_to(sq, by_color).is_nonempty()
    }

    /// Return every piece of `by_color` that attacks `sq`.
    pub fn attackers_to(&self, sq: Square, by_color: Color) -> Bitboard {
        let them = self.side(by_color);
        let occupied = self.occupied();

        // A pawn of `by_color` on X attacks `sq` iff a pawn of the other color on `sq` attacks X.
        let pawns = pawn_attacks(!by_color, sq) & self.pieces(PieceKind::Pawn);
        let knights = knight_attacks(sq) & self.pieces(PieceKind::Knight);
        let kings = king_attacks(sq) & self.pieces(PieceKind::King);

        let queens = self.pieces(PieceKind::Queen);
        let orthogonal = rook_attacks(sq, occupied) & (self.pieces(PieceKind::Rook) | queens);
        let diagonal = bishop_attacks(sq, occupied) & (self.pieces(PieceKind::Bishop) | queens);

        (pawns | knights | kings | orthogonal | diagonal) & them
    }

    /// Return `true` if the side to move has a king and it is attacked.
    pub fn in_check(&self) -> bool {
        let us = self.side_to_move();
        self.king_square(us)
            .is_some_and(|king| self.is_square_attacked(king, !us))
    }
}
