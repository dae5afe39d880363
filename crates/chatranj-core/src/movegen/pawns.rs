//! Pawn destination generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::Destinations;

/// Generate pawn destinations in scan order: single push, double push,
/// left capture, right capture.
///
/// White advances toward row 0 from start row 6; Black toward row 7 from
/// start row 1. The double push requires the pawn to still be on its start
/// row with both cells ahead empty. Diagonal steps are generated only as
/// captures of an opposite-side piece; there is no en passant.
pub(super) fn gen_pawn(board: &Board, src: Square, us: Color, list: &mut Destinations) {
    let dir = us.pawn_dir();

    if let Some(one) = src.offset(dir, 0) {
        if !board.is_occupied(one) {
            list.push(one);
            if src.row().index() as u8 == us.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if !board.is_occupied(two) {
                        list.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(diag) = src.offset(dir, dc) else {
            continue;
        };
        if let Some(target) = board.piece_on(diag) {
            if target.color() != us {
                list.push(diag);
            }
        }
    }
}
