//! Sliding piece (rook, bishop, queen) destination generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::Destinations;

/// Axis ray directions in scan order: up, down, left, right.
const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions in scan order: up-left, up-right, down-left,
/// down-right.
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Generate rook destinations from `src` for a piece of color `us`.
pub(super) fn gen_rook(board: &Board, src: Square, us: Color, list: &mut Destinations) {
    scan_rays(board, src, us, &ROOK_DIRS, list);
}

/// Generate bishop destinations from `src` for a piece of color `us`.
pub(super) fn gen_bishop(board: &Board, src: Square, us: Color, list: &mut Destinations) {
    scan_rays(board, src, us, &BISHOP_DIRS, list);
}

/// Generate queen destinations: the rook rays followed by the bishop rays
/// from the same origin, for the queen's own color.
pub(super) fn gen_queen(board: &Board, src: Square, us: Color, list: &mut Destinations) {
    gen_rook(board, src, us, list);
    gen_bishop(board, src, us, list);
}

/// Walk each ray one step at a time. Empty squares are destinations; the
/// first occupied square halts the ray and is a destination only when it
/// holds an opposite-side piece.
fn scan_rays(
    board: &Board,
    src: Square,
    us: Color,
    dirs: &[(i8, i8)],
    list: &mut Destinations,
) {
    for &(dr, dc) in dirs {
        let mut sq = src;
        while let Some(next) = sq.offset(dr, dc) {
            match board.piece_on(next) {
                None => {
                    list.push(next);
                    sq = next;
                }
                Some(blocker) => {
                    if blocker.color() != us {
                        list.push(next);
                    }
                    break;
                }
            }
        }
    }
}
