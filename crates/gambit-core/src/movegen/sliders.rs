//! Sliding piece move generation (bishops, rooks, queens).

use crate::attacks::piece_attacks;
use crate::board::Board;
use crate::color::Color;
use crate::piece::PieceKind;
use crate::square::Square;

use super::{MoveList, push_targets};

/// Generate pseudo-legal moves for the slider `kind` of `color` on `from`.
///
/// Each ray stops at the first occupied square; that square is a capture when
/// it holds an enemy piece and is dropped when it holds a friendly one.
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    kind: PieceKind,
    color: Color,
    list: &mut MoveList,
) {
    debug_assert!(kind.is_slider());
    let targets = piece_attacks(kind, color, from, board.occupied()) & !board.side(color);
    push_targets(board, from, kind, targets, list);
}

#[cfg(test)]
mod tests {
    use super::gen_slider;
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::MoveList;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    #[test]
    fn starting_sliders_are_boxed_in() {
        let board = Board::starting_position();
        for (sq, kind) in [
            (Square::A1, PieceKind::Rook),
            (Square::C1, PieceKind::Bishop),
            (Square::D1, PieceKind::Queen),
        ] {
            let mut list = MoveList::new();
            gen_slider(&board, sq, kind, Color::White, &mut list);
            assert!(list.is_empty(), "{kind:?} on {sq} should be blocked");
        }
    }

    #[test]
    fn rook_ray_stops_at_pieces() {
        let board = Board::empty()
            .with_piece(Square::D4, Piece::WHITE_ROOK)
            .with_piece(Square::D6, Piece::BLACK_PAWN)
            .with_piece(Square::F4, Piece::WHITE_PAWN);
        let mut list = MoveList::new();
        gen_slider(&board, Square::D4, PieceKind::Rook, Color::White, &mut list);
        // up: d5, d6(x); right: e4; down: d3 d2 d1; left: c4 b4 a4
        assert_eq!(list.len(), 9);
        assert!(list.iter().any(|m| m.to() == Square::D6 && m.is_capture()));
        assert!(!list.iter().any(|m| m.to() == Square::D7));
        assert!(!list.iter().any(|m| m.to() == Square::F4));
    }

    #[test]
    fn queen_in_open_board() {
        let board = Board::empty().with_piece(Square::D4, Piece::BLACK_QUEEN);
        let mut list = MoveList::new();
        gen_slider(&board, Square::D4, PieceKind::Queen, Color::Black, &mut list);
        assert_eq!(list.len(), 27);
    }
}
