//! Core chess rules: board representation, attacks, move generation and application,
//! and position notation.

pub mod attacks;
mod bitboard;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
pub mod movegen;
mod perft;
mod piece;
mod san;
mod square;
mod zobrist;

pub use attacks::attacks_of;
pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError, MoveError, SquareError};
pub use fen::STARTING_FEN;
pub use movegen::{
    MoveList, generate_legal_moves, has_legal_moves, is_legal, legal_moves, pseudo_legal_moves,
};
pub use perft::{divide, perft};
pub use piece::{Piece, PieceKind};
pub use san::San;
pub use square::Square;
