//! Grid-string parsing and serialization for [`Board`].
//!
//! A board is exchanged as 8 newline-separated rows of 8 characters each:
//! `' '` for an empty cell, an uppercase letter for a White piece, a
//! lowercase letter for a Black piece (P/N/B/R/Q/K for pawn, knight,
//! bishop, rook, queen, king).

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::GridError;
use crate::piece::Piece;
use crate::square::Square;

/// The grid string for the standard starting position.
pub const STARTING_GRID: &str = "rnbqkbnr\n\
                                 pppppppp\n\
                                 \u{20}       \n\
                                 \u{20}       \n\
                                 \u{20}       \n\
                                 \u{20}       \n\
                                 PPPPPPPP\n\
                                 RNBQKBNR";

impl FromStr for Board {
    type Err = GridError;

    fn from_str(grid: &str) -> Result<Board, GridError> {
        let rows: Vec<&str> = grid.split('\n').collect();
        if rows.len() != 8 {
            return Err(GridError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();

        for (row_index, row_str) in rows.iter().enumerate() {
            let chars: Vec<char> = row_str.chars().collect();
            if chars.len() != 8 {
                return Err(GridError::BadRowLength {
                    row_index,
                    length: chars.len(),
                });
            }

            for (col_index, &c) in chars.iter().enumerate() {
                if c == ' ' {
                    continue;
                }
                let piece = Piece::from_grid_char(c)
                    .ok_or(GridError::InvalidPieceChar { character: c })?;
                let sq = Square::from_index_unchecked((row_index * 8 + col_index) as u8);
                board.set(sq, Some(piece));
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            for col in 0u8..8 {
                let sq = Square::from_index_unchecked(row * 8 + col);
                let c = match self.piece_on(sq) {
                    Some(piece) => piece.grid_char(),
                    None => ' ',
                };
                write!(f, "{c}")?;
            }
            if row < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_GRID;
    use crate::board::Board;
    use crate::error::GridError;
    use crate::piece::Piece;
    use crate::square::Square;

    fn roundtrip(grid: &str) {
        let board: Board = grid.parse().unwrap();
        let output = format!("{board}");
        assert_eq!(output, grid, "grid roundtrip failed");
        let board2: Board = output.parse().unwrap();
        assert_eq!(board, board2);
    }

    #[test]
    fn starting_grid_shape() {
        let rows: Vec<&str> = STARTING_GRID.split('\n').collect();
        assert_eq!(rows.len(), 8);
        for row in rows {
            assert_eq!(row.chars().count(), 8);
        }
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_GRID);
    }

    #[test]
    fn roundtrip_sparse() {
        let grid = "\u{20}       \n\
                    \u{20}       \n\
                    \u{20} k     \n\
                    \u{20}       \n\
                    \u{20}   R   \n\
                    \u{20}       \n\
                    \u{20}  K    \n\
                    \u{20}       ";
        roundtrip(grid);
    }

    #[test]
    fn starting_position_matches_grid() {
        let from_constructor = Board::starting_position();
        let from_grid: Board = STARTING_GRID.parse().unwrap();
        assert_eq!(from_constructor, from_grid);
    }

    #[test]
    fn parse_places_pieces() {
        let board: Board = STARTING_GRID.parse().unwrap();
        assert_eq!(board.piece_on(Square::at(0, 3).unwrap()), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.piece_on(Square::at(7, 4).unwrap()), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_on(Square::at(3, 3).unwrap()), None);
    }

    #[test]
    fn error_wrong_row_count() {
        let result = "rnbqkbnr\npppppppp".parse::<Board>();
        assert_eq!(result.unwrap_err(), GridError::WrongRowCount { found: 2 });
    }

    #[test]
    fn error_bad_row_length() {
        let grid = "rnbqkbnr\n\
                    ppppppp\n\
                    \u{20}       \n\
                    \u{20}       \n\
                    \u{20}       \n\
                    \u{20}       \n\
                    PPPPPPPP\n\
                    RNBQKBNR";
        let result = grid.parse::<Board>();
        assert_eq!(
            result.unwrap_err(),
            GridError::BadRowLength {
                row_index: 1,
                length: 7
            }
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        let grid = "rnbqkbnr\n\
                    pppppppp\n\
                    \u{20}       \n\
                    \u{20}  X    \n\
                    \u{20}       \n\
                    \u{20}       \n\
                    PPPPPPPP\n\
                    RNBQKBNR";
        let result = grid.parse::<Board>();
        assert_eq!(
            result.unwrap_err(),
            GridError::InvalidPieceChar { character: 'X' }
        );
    }
}
