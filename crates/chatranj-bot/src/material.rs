//! Relative piece values for capture scoring.

use chatranj_core::PieceKind;

/// Capture values in tenths of a pawn, indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   |  10   |
/// | Knight |  30   |
/// | Bishop |  30   |
/// | Rook   |  50   |
/// | Queen  |  90   |
/// | King   |   0   |
///
/// The tenth-of-a-pawn scale keeps the center-control bonus (worth 0.1
/// pawn, see [`greedy`](crate::greedy)) integral. Capturing a king scores
/// nothing; with no check rules, the king is just another piece and the
/// game ends by attrition, not mate.
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [10, 30, 30, 50, 90, 0];

/// Return the capture value of a piece kind, in tenths of a pawn.
#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    MATERIAL_VALUE[kind.index()]
}
