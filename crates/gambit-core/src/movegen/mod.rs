//! Move generation: pseudo-legal moves per piece, filtered to legal moves by make-and-test.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::piece::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

const CAPACITY: usize = 256;

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; CAPACITY],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; CAPACITY],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < CAPACITY);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list holds no moves.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the moves as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Iterate over the moves in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Return `true` if `mv` is in the list.
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    /// Keep only the moves for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut kept = 0;
        for i in 0..self.len() {
            let mv = self.moves[i];
            if keep(&mv) {
                self.moves[kept] = mv;
                kept += 1;
            }
        }
        self.len = kept as u16;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Push one move per target square, recording whatever stands there as captured.
pub(super) fn push_targets(
    board: &Board,
    from: Square,
    kind: PieceKind,
    targets: Bitboard,
    list: &mut MoveList,
) {
    for to in targets {
        list.push(Move::new(from, to, kind, board.piece_on(to)));
    }
}

/// Generate moves that follow the movement rules of the piece on `sq`,
/// without regard to the mover's king.
///
/// Empty when `sq` holds no piece or a piece of the side not to move.
pub fn pseudo_legal_moves(board: &Board, sq: Square) -> MoveList {
    let mut list = MoveList::new();
    let Some(piece) = board.piece_at(sq) else {
        return list;
    };
    let color = piece.color();
    if color != board.side_to_move() {
        return list;
    }
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, sq, color, &mut list),
        PieceKind::Knight => gen_knight(board, sq, color, &mut list),
        PieceKind::King => gen_king(board, sq, color, &mut list),
        kind => gen_slider(board, sq, kind, color, &mut list),
    }
    list
}

/// Return `true` if playing `mv` does not leave the mover's king attacked.
///
/// Kingless setups have nothing to expose, so every move passes.
fn keeps_king_safe(board: &Board, mv: Move) -> bool {
    let us = board.side_to_move();
    let next = board.make_move(mv);
    next.king_square(us)
        .is_none_or(|king| !next.is_square_attacked(king, !us))
}

/// Generate the legal moves of the piece on `sq`.
pub fn legal_moves(board: &Board, sq: Square) -> MoveList {
    let mut list = pseudo_legal_moves(board, sq);
    list.retain(|&mv| keeps_king_safe(board, mv));
    list
}

/// Generate all legal moves for the side to move.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    let mut list = MoveList::new();
    for sq in board.side(board.side_to_move()) {
        for &mv in &legal_moves(board, sq) {
            list.push(mv);
        }
    }
    list
}

/// Return `true` if the side to move has at least one legal move.
pub fn has_legal_moves(board: &Board) -> bool {
    board
        .side(board.side_to_move())
        .any(|sq| !legal_moves(board, sq).is_empty())
}

/// Return `true` if `mv` is one of the legal moves of `board`.
pub fn is_legal(board: &Board, mv: Move) -> bool {
    pseudo_legal_moves(board, mv.from()).contains(&mv) && keeps_king_safe(board, mv)
}

impl Board {
    /// Find the legal move from `from` to `to` with the given promotion choice.
    pub fn find_move(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> Option<Move> {
        legal_moves(self, from)
            .iter()
            .copied()
            .find(|mv| mv.to() == to && mv.promotion_kind() == promotion)
    }

    /// Find the legal move written in coordinate notation (`e2e4`, `e7e8q`).
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidSquare`] or [`MoveError::Unparsable`] for malformed
    /// text, [`MoveError::Illegal`] when the move is not legal here.
    pub fn parse_uci_move(&self, text: &str) -> Result<Move, MoveError> {
        let unparsable = || MoveError::Unparsable {
            text: text.to_string(),
        };
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(unparsable());
        }

        let from: Square = text[0..2].parse()?;
        let to: Square = text[2..4].parse()?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_fen_char(c) {
                Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
                _ => return Err(unparsable()),
            },
        };

        self.find_move(from, to, promotion).ok_or_else(|| MoveError::Illegal {
            notation: text.to_string(),
        })
    }
}
