//! Error types for grid-string parsing.

/// Errors that occur when parsing a board grid string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid does not have exactly 8 newline-separated rows.
    #[error("expected 8 rows in grid, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not describe exactly 8 cells.
    #[error("row {row_index} describes {length} cells, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row_index: usize,
        /// Number of cells described.
        length: usize,
    },
    /// A cell holds a character that is neither `' '` nor a piece letter.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}
