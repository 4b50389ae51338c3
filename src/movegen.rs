//! Move generation and static evaluation.
//!
//! Moves are always produced in row-major order (row ascending, then column
//! ascending). The search relies on this order to break ties between equally
//! valued moves in favour of the first one generated.

use crate::board::{Board, Move, Orientation};

/// All legal placements for `orientation`, in row-major order.
pub fn legal_moves(board: &Board, orientation: Orientation) -> Vec<Move> {
    let mut moves = Vec::with_capacity(board.rows() * board.cols());
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            if board.is_legal(row, col, orientation) {
                moves.push((row, col));
            }
        }
    }
    moves
}

/// Number of legal placements for `orientation`.
pub fn count_legal_moves(board: &Board, orientation: Orientation) -> usize {
    (0..board.rows())
        .map(|row| {
            (0..board.cols())
                .filter(|&col| board.is_legal(row, col, orientation))
                .count()
        })
        .sum()
}

/// Static evaluation from the point of view of the side to move:
/// its own mobility minus the opponent's.
pub fn evaluate(board: &Board, orientation: Orientation) -> f64 {
    let mine = count_legal_moves(board, orientation);
    let theirs = count_legal_moves(board, orientation.opposite());
    mine as f64 - theirs as f64
}
