//! King destination generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::Destinations;

/// The eight unit offsets, row-major scan order.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate king destinations: each adjacent on-board square that is empty
/// or holds an opposite-side piece. No castling, no check-safety filtering;
/// this engine knowingly allows the king to step into attacked squares.
pub(super) fn gen_king(board: &Board, src: Square, us: Color, list: &mut Destinations) {
    for &(dr, dc) in &KING_OFFSETS {
        let Some(dst) = src.offset(dr, dc) else {
            continue;
        };
        match board.piece_on(dst) {
            Some(occupant) if occupant.color() == us => {}
            _ => list.push(dst),
        }
    }
}
