//! Board rows (0-7, top to bottom).

use std::fmt;

/// A row on the board. Row0 is Black's back rank (top of the printed grid);
/// Row7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Row {
    Row0 = 0,
    Row1 = 1,
    Row2 = 2,
    Row3 = 3,
    Row4 = 4,
    Row5 = 5,
    Row6 = 6,
    Row7 = 7,
}

impl Row {
    /// Total number of rows.
    pub const COUNT: usize = 8;

    /// All rows in index order.
    pub const ALL: [Row; 8] = [
        Row::Row0,
        Row::Row1,
        Row::Row2,
        Row::Row3,
        Row::Row4,
        Row::Row5,
        Row::Row6,
        Row::Row7,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a row from a zero-based index.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Row> {
        match index {
            0 => Some(Row::Row0),
            1 => Some(Row::Row1),
            2 => Some(Row::Row2),
            3 => Some(Row::Row3),
            4 => Some(Row::Row4),
            5 => Some(Row::Row5),
            6 => Some(Row::Row6),
            7 => Some(Row::Row7),
            _ => None,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
