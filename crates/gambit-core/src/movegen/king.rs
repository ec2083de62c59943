//! King move generation, including castling.

use crate::attacks::king_attacks;
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

use super::{MoveList, push_targets};

/// Generate pseudo-legal moves for the king of `color` on `from`.
///
/// Ordinary steps are left to the legality filter. Castling is only offered
/// when the path is clear and none of the king's squares is attacked, since
/// make-and-test alone would only catch the destination.
pub(super) fn gen_king(board: &Board, from: Square, color: Color, list: &mut MoveList) {
    let targets = king_attacks(from) & !board.side(color);
    push_targets(board, from, PieceKind::King, targets, list);

    if from != CastleSide::king_from(color) {
        return;
    }
    for side in CastleSide::ALL {
        if can_castle(board, color, side) {
            list.push(Move::castle(from, side.king_to(color), side));
        }
    }
}

fn can_castle(board: &Board, color: Color, side: CastleSide) -> bool {
    if !board.castling().has(color, side) {
        return false;
    }
    if board.piece_at(side.rook_from(color)) != Some(Piece::new(PieceKind::Rook, color)) {
        return false;
    }
    if (side.between(color) & board.occupied()).is_nonempty() {
        return false;
    }
    side.king_path(color)
        .into_iter()
        .all(|sq| !board.is_square_attacked(sq, !color))
}

#[cfg(test)]
mod tests {
    use super::gen_king;
    use crate::board::Board;
    use crate::color::Color;
    use crate::movegen::MoveList;
    use crate::square::Square;

    fn king_moves(fen: &str, from: Square) -> MoveList {
        let board: Board = fen.parse().unwrap();
        let color = board.color_on(from).unwrap();
        let mut list = MoveList::new();
        gen_king(&board, from, color, &mut list);
        list
    }

    #[test]
    fn both_castles_available() {
        let moves = king_moves("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", Square::E1);
        assert!(moves.iter().any(|m| m.is_castle_kingside() && m.to() == Square::G1));
        assert!(moves.iter().any(|m| m.is_castle_queenside() && m.to() == Square::C1));
    }

    #[test]
    fn no_castle_without_right() {
        let moves = king_moves("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1", Square::E1);
        assert!(!moves.iter().any(|m| m.is_castle_kingside()));
        assert!(moves.iter().any(|m| m.is_castle_queenside()));
    }

    #[test]
    fn no_castle_through_attacked_square() {
        // The bishop on a6 covers f1.
        let moves = king_moves("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1", Square::E1);
        assert!(!moves.iter().any(|m| m.is_castle_kingside()));
        assert!(moves.iter().any(|m| m.is_castle_queenside()));
    }

    #[test]
    fn no_castle_out_of_check() {
        let moves = king_moves("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", Square::E1);
        assert!(!moves.iter().any(|m| m.castle_side().is_some()));
    }

    #[test]
    fn no_castle_with_blocked_path() {
        let moves = king_moves("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1", Square::E1);
        assert!(!moves.iter().any(|m| m.is_castle_queenside()));
        assert!(moves.iter().any(|m| m.is_castle_kingside()));
    }

    #[test]
    fn queenside_b_file_attack_does_not_matter() {
        // b1 must be empty but may be attacked; the king never crosses it.
        let moves = king_moves("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", Square::E1);
        assert!(moves.iter().any(|m| m.is_castle_queenside()));
    }

    #[test]
    fn black_castles_kingside() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1", Square::E8);
        assert!(moves.iter().any(|m| m.is_castle_kingside() && m.to() == Square::G8));
    }
}
