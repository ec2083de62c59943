//! Knight move generation.

use crate::attacks::knight_attacks;
use crate::board::Board;
use crate::color::Color;
use crate::piece::PieceKind;
use crate::square::Square;

use super::{MoveList, push_targets};

/// Generate pseudo-legal moves for the knight of `color` on `from`.
pub(super) fn gen_knight(board: &Board, from: Square, color: Color, list: &mut MoveList) {
    let targets = knight_attacks(from) & !board.side(color);
    push_targets(board, from, PieceKind::Knight, targets, list);
}

#[cfg(test)]
mod tests {
    use super::gen_knight;
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::MoveList;
    use crate::piece::{Piece, PieceKind};
    use crate::square::Square;

    #[test]
    fn starting_knight_has_two_moves() {
        let board = Board::starting_position();
        let mut list = MoveList::new();
        gen_knight(&board, Square::B1, Color::White, &mut list);
        let targets: Vec<_> = list.iter().map(|m| m.to()).collect();
        assert_eq!(targets, vec![Square::A3, Square::C3]);
    }

    #[test]
    fn knight_captures_enemy_not_friend() {
        let board = Board::empty()
            .with_piece(Square::E4, Piece::WHITE_KNIGHT)
            .with_piece(Square::F6, Piece::BLACK_QUEEN)
            .with_piece(Square::D6, Piece::WHITE_PAWN);
        let mut list = MoveList::new();
        gen_knight(&board, Square::E4, Color::White, &mut list);
        assert_eq!(list.len(), 7);
        assert!(!list.iter().any(|m| m.to() == Square::D6));
        let capture = list.iter().find(|m| m.to() == Square::F6).unwrap();
        assert_eq!(capture.captured(), Some(PieceKind::Queen));
    }
}
