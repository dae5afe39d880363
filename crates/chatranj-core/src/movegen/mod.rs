//! Destination generation and move validation.
//!
//! Both queries share one rule function per piece kind, so the validator
//! can never drift from the generator: [`is_legal`] is defined as an
//! ownership check plus membership in [`possible_moves`].

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{gen_bishop, gen_queen, gen_rook};

/// Stack-allocated buffer for generated destination squares.
///
/// Capacity 32 covers the queen's 27-square maximum on an open board.
pub struct Destinations {
    squares: [Square; 32],
    len: u8,
}

impl Destinations {
    /// Create an empty destination list.
    pub fn new() -> Destinations {
        Destinations {
            squares: [Square::from_index_unchecked(0); 32],
            len: 0,
        }
    }

    /// Push a destination onto the list.
    #[inline]
    pub(crate) fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < 32);
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    /// Return the number of destinations in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the destinations, in generation order.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }

    /// Return `true` if `sq` is among the destinations.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for Destinations {
    type Output = Square;
    #[inline]
    fn index(&self, index: usize) -> &Square {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a Destinations {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate every destination the piece on `square` could move to,
/// ignoring check.
///
/// An empty `square` yields an empty list; this is an ordinary result, not
/// an error. The order of the result is fixed per kind (sliding rays up,
/// down, left, right, then the four diagonals; see the per-kind modules)
/// so callers can compare sequences deterministically.
pub fn possible_moves(board: &Board, square: Square) -> Destinations {
    let mut list = Destinations::new();
    let Some(piece) = board.piece_on(square) else {
        return list;
    };

    let us = piece.color();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, square, us, &mut list),
        PieceKind::Knight => gen_knight(board, square, us, &mut list),
        PieceKind::Bishop => gen_bishop(board, square, us, &mut list),
        PieceKind::Rook => gen_rook(board, square, us, &mut list),
        PieceKind::Queen => gen_queen(board, square, us, &mut list),
        PieceKind::King => gen_king(board, square, us, &mut list),
    }

    trace!(%square, piece = %piece, count = list.len(), "generated destinations");
    list
}

/// Return `true` when moving the piece on `start` to `end` is legal for
/// `side`.
///
/// Legal means: `start` holds a piece belonging to `side`, and `end` is
/// among that piece's generated destinations (which already excludes
/// same-side captures and off-board squares). Empty or opposing `start`
/// squares simply return `false`.
pub fn is_legal(board: &Board, start: Square, end: Square, side: Color) -> bool {
    match board.piece_on(start) {
        Some(piece) if piece.color() == side => possible_moves(board, start).contains(end),
        _ => false,
    }
}
