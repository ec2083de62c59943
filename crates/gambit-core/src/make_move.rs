//! Move execution via copy-make.

use tracing::{debug, warn};

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::MoveError;
use crate::movegen::is_legal;
use crate::piece::{Piece, PieceKind};
use crate::zobrist;

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// `mv` is expected to come from this board's move generator. The moved
    /// piece is read from the board itself; if the origin is empty the board
    /// is returned unchanged.
    pub fn make_move(&self, mv: Move) -> Board {
        let mut b = *self;
        let us = self.side_to_move();
        let from = mv.from();
        let to = mv.to();

        let Some(moving) = b.remove_piece(from) else {
            warn!(%mv, "no piece on origin square; move ignored");
            return b;
        };

        // Strip the old castling and en passant contributions before anything changes.
        let stale = zobrist::CASTLING[self.castling().bits() as usize] ^ zobrist::en_passant(self);
        b.set_hash(b.hash() ^ stale);

        let captured = if mv.is_en_passant() {
            to.offset(0, -us.forward()).and_then(|sq| b.remove_piece(sq))
        } else {
            b.remove_piece(to)
        };

        let placed = match mv.promotion_kind() {
            Some(kind) if moving.kind() == PieceKind::Pawn => Piece::new(kind, us),
            _ => moving,
        };
        b.put_piece(to, placed);

        if let Some(side) = mv.castle_side()
            && let Some(rook) = b.remove_piece(side.rook_from(us))
        {
            b.put_piece(side.rook_to(us), rook);
        }

        let castling = self
            .castling()
            .remove(CastleRights::revoked_by(from))
            .remove(CastleRights::revoked_by(to));
        b.set_castling(castling);

        let is_pawn = moving.kind() == PieceKind::Pawn;
        let en_passant = if is_pawn && from.rank().abs_diff(to.rank()) == 2 {
            from.offset(0, us.forward())
        } else {
            None
        };
        b.set_en_passant(en_passant);

        if is_pawn || captured.is_some() {
            b.set_halfmove_clock(0);
        } else {
            b.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        }
        if us == Color::Black {
            b.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        b.set_side_to_move(!us);

        // The en passant key depends on the new side to move, so it goes in last.
        let fresh = zobrist::SIDE_TO_MOVE
            ^ zobrist::CASTLING[castling.bits() as usize]
            ^ zobrist::en_passant(&b);
        b.set_hash(b.hash() ^ fresh);
        b
    }

    /// Apply `mv` only if it is legal in this position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Illegal`] when `mv` is not among the legal moves of
    /// its origin square; `self` is left untouched either way.
    pub fn try_make_move(&self, mv: Move) -> Result<Board, MoveError> {
        if !is_legal(self, mv) {
            return Err(MoveError::Illegal {
                notation: mv.to_string(),
            });
        }
        debug!(%mv, "applying move");
        Ok(self.make_move(mv))
    }
}
