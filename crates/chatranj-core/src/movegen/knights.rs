//! Knight destination generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::Destinations;

/// The eight knight jumps, row-major scan order.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate knight destinations: each on-board jump target that is empty or
/// holds an opposite-side piece. Intervening occupancy is irrelevant.
pub(super) fn gen_knight(board: &Board, src: Square, us: Color, list: &mut Destinations) {
    for &(dr, dc) in &KNIGHT_OFFSETS {
        let Some(dst) = src.offset(dr, dc) else {
            continue;
        };
        match board.piece_on(dst) {
            Some(occupant) if occupant.color() == us => {}
            _ => list.push(dst),
        }
    }
}
