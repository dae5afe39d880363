//! Colored piece, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece, bit-packed into a single byte.
///
/// Bit layout:
/// - bits 0-2: [`PieceKind`] (values 0-5)
/// - bit 3: [`Color`] (0 = White, 1 = Black)
///
/// An empty square is `Option::<Piece>::None`, not a sentinel value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// All 12 valid pieces.
    pub const COUNT: usize = 12;

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All 12 pieces: White pieces (indices 0-5) followed by Black pieces (indices 6-11).
    pub const ALL: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 3 | (kind as u8))
    }

    /// Parse a grid character into a piece.
    ///
    /// Uppercase letters produce White pieces; lowercase letters produce Black
    /// pieces. Returns `None` for characters that are not valid piece letters
    /// (including the `' '` empty-cell marker).
    #[inline]
    pub fn from_grid_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_grid_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// Return the piece kind (the lower 3 bits).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Return the color (bit 3: 0 = White, 1 = Black).
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 3 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Return the grid character for this piece.
    ///
    /// Uppercase for White pieces, lowercase for Black pieces.
    #[inline]
    pub fn grid_char(self) -> char {
        let base = self.kind().grid_char();
        match self.color() {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind().grid_char().to_ascii_uppercase();
        write!(f, "{}{}", color_prefix, kind_char)
    }
}
