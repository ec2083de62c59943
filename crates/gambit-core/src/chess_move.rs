//! Chess move representation.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece::PieceKind;
use crate::square::Square;

/// The category of a chess move. Promotions and captures are carried as
/// separate fields on [`Move`], so they combine with `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    /// Pawn advancing two squares from its starting rank.
    DoublePush,
    EnPassant,
    CastleKingSide,
    CastleQueenSide,
}

/// A transition from one position to the next.
///
/// A `Move` is a plain value: it describes what happens and is meaningful only
/// for the board it was generated from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    piece: PieceKind,
    captured: Option<PieceKind>,
    promotion: Option<PieceKind>,
    kind: MoveKind,
}

impl Move {
    /// Placeholder used to fill unused slots of a [`MoveList`](crate::movegen::MoveList).
    pub(crate) const NULL: Move = Move::new(Square::A1, Square::A1, PieceKind::Pawn, None);

    /// A plain move or capture.
    pub const fn new(from: Square, to: Square, piece: PieceKind, captured: Option<PieceKind>) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
            promotion: None,
            kind: MoveKind::Normal,
        }
    }

    pub const fn double_push(from: Square, to: Square) -> Move {
        Move {
            kind: MoveKind::DoublePush,
            ..Move::new(from, to, PieceKind::Pawn, None)
        }
    }

    /// A pawn move to the last rank, with or without a capture.
    pub const fn promotion(
        from: Square,
        to: Square,
        captured: Option<PieceKind>,
        promotion: PieceKind,
    ) -> Move {
        Move {
            promotion: Some(promotion),
            ..Move::new(from, to, PieceKind::Pawn, captured)
        }
    }

    /// An en passant capture; `to` is the empty target square.
    pub const fn en_passant(from: Square, to: Square) -> Move {
        Move {
            kind: MoveKind::EnPassant,
            ..Move::new(from, to, PieceKind::Pawn, Some(PieceKind::Pawn))
        }
    }

    /// A castling move, described by the king's origin and destination.
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Move {
        let kind = match side {
            CastleSide::KingSide => MoveKind::CastleKingSide,
            CastleSide::QueenSide => MoveKind::CastleQueenSide,
        };
        Move {
            kind,
            ..Move::new(from, to, PieceKind::King, None)
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The kind of the piece that moves (a pawn for promotions).
    #[inline]
    pub const fn piece(self) -> PieceKind {
        self.piece
    }

    #[inline]
    pub const fn captured(self) -> Option<PieceKind> {
        self.captured
    }

    #[inline]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_castle_kingside(self) -> bool {
        matches!(self.kind, MoveKind::CastleKingSide)
    }

    #[inline]
    pub const fn is_castle_queenside(self) -> bool {
        matches!(self.kind, MoveKind::CastleQueenSide)
    }

    /// The wing castled toward, if this is a castling move.
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::CastleKingSide => Some(CastleSide::KingSide),
            MoveKind::CastleQueenSide => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Return `true` for pawn moves and captures, after which no earlier
    /// position can recur.
    #[inline]
    pub const fn is_irreversible(self) -> bool {
        matches!(self.piece, PieceKind::Pawn) || self.captured.is_some()
    }
}

/// Coordinate notation: `e2e4`, `e1g1`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}, {:?}", self.kind)?;
        if let Some(captured) = self.captured {
            write!(f, ", x{}", captured.san_char())?;
        }
        write!(f, ")")
    }
}
