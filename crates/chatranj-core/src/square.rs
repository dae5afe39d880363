//! Board squares, encoded as a row-major index.

use std::fmt;

use crate::col::Col;
use crate::row::Row;

/// A square on the board, encoded as a `u8`.
///
/// Index = row * 8 + col, so (0,0) = 0, (0,1) = 1, ..., (7,7) = 63.
/// Row 0 is Black's back rank, row 7 is White's.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column.
    #[inline]
    pub const fn new(row: Row, col: Col) -> Square {
        Square(row.index() as u8 * 8 + col.index() as u8)
    }

    /// Create a square from raw row/column indices, returning `None` when
    /// either is out of range. This is the engine's only bounds check;
    /// everything downstream works with squares that are valid by
    /// construction.
    #[inline]
    pub const fn at(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse a two-digit coordinate string (e.g. "64" for row 6, column 4)
    /// into a square.
    pub fn from_digits(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let row_byte = bytes[0];
        let col_byte = bytes[1];

        if !(b'0'..=b'7').contains(&row_byte) || !(b'0'..=b'7').contains(&col_byte) {
            return None;
        }

        Square::at(row_byte - b'0', col_byte - b'0')
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row of this square.
    #[inline]
    pub const fn row(self) -> Row {
        match self.0 / 8 {
            0 => Row::Row0,
            1 => Row::Row1,
            2 => Row::Row2,
            3 => Row::Row3,
            4 => Row::Row4,
            5 => Row::Row5,
            6 => Row::Row6,
            _ => Row::Row7,
        }
    }

    /// Return the column of this square.
    #[inline]
    pub const fn col(self) -> Col {
        match self.0 % 8 {
            0 => Col::Col0,
            1 => Col::Col1,
            2 => Col::Col2,
            3 => Col::Col3,
            4 => Col::Col4,
            5 => Col::Col5,
            6 => Col::Col6,
            _ => Col::Col7,
        }
    }

    /// Return the square displaced by `(dr, dc)`, or `None` off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = (self.0 / 8) as i8 + dr;
        let col = (self.0 % 8) as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in index order ((0,0), (0,1), ..., (7,7)).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row(), self.col())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({},{})", self.row(), self.col())
    }
}
