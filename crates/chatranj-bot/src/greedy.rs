//! One-ply greedy capture selector.

use tracing::debug;

use chatranj_core::{Board, Color, Move, Square, possible_moves};

use crate::material::piece_value;

/// Bonus for landing on a center square, in tenths of a pawn.
const CENTER_BONUS: i32 = 1;

/// The four center squares that earn [`CENTER_BONUS`].
const CENTER: [(u8, u8); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];

/// Score a destination: the captured piece's value, plus the center bonus.
/// Non-captures score 0 (plus bonus if central).
fn score_destination(board: &Board, dst: Square) -> i32 {
    let mut score = board
        .piece_on(dst)
        .map_or(0, |target| piece_value(target.kind()));
    if CENTER.contains(&(dst.row().index() as u8, dst.col().index() as u8)) {
        score += CENTER_BONUS;
    }
    score
}

/// Pick the highest-scoring (piece, destination) pair for `side` across the
/// whole board, ties broken by first-found in board scan order.
///
/// Returns `None` when the side has no moves at all.
pub fn best_move(board: &Board, side: Color) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;

    for src in Square::all() {
        let Some(piece) = board.piece_on(src) else {
            continue;
        };
        if piece.color() != side {
            continue;
        }
        for &dst in possible_moves(board, src).as_slice() {
            let score = score_destination(board, dst);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((Move::new(src, dst), score));
            }
        }
    }

    if let Some((mv, score)) = best {
        debug!(%mv, score, %side, "greedy pick");
    }
    best.map(|(mv, _)| mv)
}
