//! Perft: leaf-node counts of the legal move tree, the move generator's correctness oracle.

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Count the leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number of
/// legal moves without making them.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mv| perft(&board.make_move(mv), depth - 1))
        .sum()
}

/// Per-move breakdown of [`perft`] as `(coordinate move, node count)`, sorted by move.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = generate_legal_moves(board)
        .iter()
        .map(|&mv| {
            let count = perft(&board.make_move(mv), depth.saturating_sub(1));
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
