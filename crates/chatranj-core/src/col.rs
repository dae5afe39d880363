//! Board columns (0-7, left to right).

use std::fmt;

/// A column on the board, from Col0 (leftmost) to Col7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Col {
    Col0 = 0,
    Col1 = 1,
    Col2 = 2,
    Col3 = 3,
    Col4 = 4,
    Col5 = 5,
    Col6 = 6,
    Col7 = 7,
}

impl Col {
    /// Total number of columns.
    pub const COUNT: usize = 8;

    /// All columns in index order.
    pub const ALL: [Col; 8] = [
        Col::Col0,
        Col::Col1,
        Col::Col2,
        Col::Col3,
        Col::Col4,
        Col::Col5,
        Col::Col6,
        Col::Col7,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a column from a zero-based index.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Col> {
        match index {
            0 => Some(Col::Col0),
            1 => Some(Col::Col1),
            2 => Some(Col::Col2),
            3 => Some(Col::Col3),
            4 => Some(Col::Col4),
            5 => Some(Col::Col5),
            6 => Some(Col::Col6),
            7 => Some(Col::Col7),
            _ => None,
        }
    }
}

impl fmt::Display for Col {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::Col;

    #[test]
    fn index_values() {
        assert_eq!(Col::Col0.index(), 0);
        assert_eq!(Col::Col7.index(), 7);
    }

    #[test]
    fn from_index_roundtrip() {
        for col in Col::ALL {
            assert_eq!(Col::from_index(col.index() as u8), Some(col));
        }
    }

    #[test]
    fn from_index_out_of_range() {
        assert_eq!(Col::from_index(8), None);
        assert_eq!(Col::from_index(255), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Col::Col0), "0");
        assert_eq!(format!("{}", Col::Col7), "7");
    }

    #[test]
    fn ordering() {
        assert!(Col::Col0 < Col::Col7);
        assert!(Col::Col2 < Col::Col4);
    }

    #[test]
    fn all_and_count() {
        assert_eq!(Col::COUNT, 8);
        assert_eq!(Col::ALL.len(), Col::COUNT);
    }
}
