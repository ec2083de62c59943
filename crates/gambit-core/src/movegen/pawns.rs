//! Pawn move generation: pushes, double pushes, captures, en passant, promotions.

use crate::attacks::pawn_attacks;
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::PieceKind;
use crate::square::Square;

use super::MoveList;

/// Push `from -> to`, expanded into the four promotion choices on the last rank.
fn push_pawn_move(
    color: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    list: &mut MoveList,
) {
    if to.rank() == color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            list.push(Move::promotion(from, to, captured, kind));
        }
    } else {
        list.push(Move::new(from, to, PieceKind::Pawn, captured));
    }
}

/// Generate pseudo-legal moves for the pawn of `color` on `from`.
pub(super) fn gen_pawn(board: &Board, from: Square, color: Color, list: &mut MoveList) {
    let forward = color.forward();

    if let Some(one) = from.offset(0, forward)
        && !board.is_occupied(one)
    {
        push_pawn_move(color, from, one, None, list);

        // The double push is offered as one atomic move, never as two single steps.
        if from.rank() == color.pawn_rank()
            && let Some(two) = one.offset(0, forward)
            && !board.is_occupied(two)
        {
            list.push(Move::double_push(from, two));
        }
    }

    let targets = pawn_attacks(color, from);
    for to in targets & board.side(!color) {
        push_pawn_move(color, from, to, board.piece_on(to), list);
    }

    if let Some(ep) = board.en_passant()
        && targets.contains(ep)
        && !board.is_occupied(ep)
    {
        list.push(Move::en_passant(from, ep));
    }
}
