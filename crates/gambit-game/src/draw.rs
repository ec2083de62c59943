//! Draw rules: insufficient material, the fifty-move rule and repetition.

use gambit_core::{Bitboard, Board, Move, PieceKind};

/// Neither side can ever deliver mate.
///
/// True when there are no pawns, rooks or queens and either at most one minor
/// piece remains, or the only minors are bishops all on one square colour.
pub fn is_insufficient_material(board: &Board) -> bool {
    let heavy = board.pieces(PieceKind::Pawn)
        | board.pieces(PieceKind::Rook)
        | board.pieces(PieceKind::Queen);
    if heavy.is_nonempty() {
        return false;
    }

    let knights = board.pieces(PieceKind::Knight);
    let bishops = board.pieces(PieceKind::Bishop);
    if (knights | bishops).count() <= 1 {
        return true;
    }

    knights.is_empty()
        && ((bishops & Bitboard::DARK_SQUARES).is_empty()
            || (bishops & !Bitboard::DARK_SQUARES).is_empty())
}

/// The half-move clock has reached `limit`.
#[inline]
pub fn is_fifty_move_draw(board: &Board, limit: u16) -> bool {
    board.halfmove_clock() >= limit
}

/// How many times the position of `board` has occurred, counting itself.
///
/// `earlier` holds the preceding snapshots, oldest first, and `moves[i]` is
/// the move played from `earlier[i]`. The scan stops at the most recent
/// irreversible move, since no position before it can recur.
pub fn repetition_count(board: &Board, earlier: &[Board], moves: &[Move]) -> usize {
    let key = board.hash();
    let mut count = 1;
    for (past, mv) in earlier.iter().zip(moves).rev() {
        if mv.is_irreversible() {
            break;
        }
        if past.hash() == key {
            count += 1;
        }
    }
    count
}
