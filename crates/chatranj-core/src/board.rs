//! The board: an 8×8 mailbox grid of piece placement.

use std::fmt;

use crate::color::Color;
use crate::moves::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// An 8×8 grid of occupancy, indexed row-major by [`Square`].
///
/// The board is plain data owned by the caller. The rule engine borrows it
/// for the duration of a single query and never mutates it; applying a move
/// after a positive validation is the caller's job (see [`Board::make_move`]).
/// It carries no side-to-move, no history, and enforces no positional
/// invariants beyond one-piece-per-cell.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

/// Back-rank piece layout shared by both sides, left to right.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board { cells: [None; 64] }
    }

    /// Return the standard starting position: Black on rows 0-1, White on
    /// rows 6-7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for col in 0..8usize {
            board.cells[col] = Some(Piece::new(BACK_RANK[col], Color::Black));
            board.cells[8 + col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.cells[48 + col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.cells[56 + col] = Some(Piece::new(BACK_RANK[col], Color::White));
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub const fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(Piece::color)
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub const fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Place a piece on (or clear) the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Apply a move, returning the captured piece if any.
    ///
    /// This is the caller-side mutation step after [`is_legal`] has said
    /// yes; it performs no legality checking of its own. Moving from an
    /// empty square clears the destination.
    ///
    /// [`is_legal`]: crate::movegen::is_legal
    pub fn make_move(&mut self, mv: Move) -> Option<Piece> {
        let piece = self.cells[mv.source().index()].take();
        std::mem::replace(&mut self.cells[mv.dest().index()], piece)
    }

    /// Return the number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", format!("{self}"))
    }
}

/// Wrapper for pretty-printing a board as a labelled 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..8 {
            write!(f, "{row}  ")?;
            for col in 0u8..8 {
                let sq = Square::from_index_unchecked(row * 8 + col);
                let c = match board.piece_on(sq) {
                    Some(piece) => piece.grid_char(),
                    None => '.',
                };
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   0 1 2 3 4 5 6 7")
    }
}
