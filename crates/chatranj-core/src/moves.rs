//! Move representation, bit-packed into a u16.

use std::fmt;

use crate::square::Square;

const SRC_MASK: u16 = 0x003F;
const DST_MASK: u16 = 0x0FC0;
const DST_SHIFT: u32 = 6;

/// A move: an ordered (start, end) square pair encoded in 12 bits of a u16.
///
/// ```text
/// bits 0-5:  source square      (0-63)
/// bits 6-11: destination square (0-63)
/// ```
///
/// Carries no capture record and no special-move flags; castling, en
/// passant, and promotion do not exist in this rule set.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Create a move from source and destination squares.
    pub const fn new(source: Square, dest: Square) -> Move {
        Move((source.index() as u16) | ((dest.index() as u16) << DST_SHIFT))
    }

    /// Parse a four-digit coordinate string ("rrcc" as two [`Square`]
    /// digit pairs, e.g. "6444" for (6,4)→(4,4)).
    pub fn from_digits(s: &str) -> Option<Move> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let source = Square::from_digits(&s[..2])?;
        let dest = Square::from_digits(&s[2..])?;
        Some(Move::new(source, dest))
    }

    /// Extract the source square.
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & SRC_MASK) as u8)
    }

    /// Extract the destination square.
    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 & DST_MASK) >> DST_SHIFT) as u8)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source(), self.dest())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({:?} -> {:?})", self.source(), self.dest())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Move;
    use crate::square::Square;

    #[test]
    fn size_of_move() {
        assert_eq!(std::mem::size_of::<Move>(), 2);
    }

    #[test]
    fn roundtrip() {
        let src = Square::at(6, 4).unwrap();
        let dst = Square::at(4, 4).unwrap();
        let mv = Move::new(src, dst);
        assert_eq!(mv.source(), src);
        assert_eq!(mv.dest(), dst);
    }

    #[test]
    fn exhaustive_roundtrip() {
        for src in Square::all() {
            for dst in Square::all() {
                let mv = Move::new(src, dst);
                assert_eq!(mv.source(), src, "source mismatch for {src:?}->{dst:?}");
                assert_eq!(mv.dest(), dst, "dest mismatch for {src:?}->{dst:?}");
            }
        }
    }

    #[test]
    fn digits_notation() {
        let mv = Move::from_digits("6444").unwrap();
        assert_eq!(mv.source(), Square::at(6, 4).unwrap());
        assert_eq!(mv.dest(), Square::at(4, 4).unwrap());
        assert_eq!(format!("{mv}"), "6444");
    }

    #[test]
    fn digits_invalid() {
        assert!(Move::from_digits("").is_none());
        assert!(Move::from_digits("644").is_none());
        assert!(Move::from_digits("64445").is_none());
        assert!(Move::from_digits("8444").is_none());
        assert!(Move::from_digits("64a4").is_none());
    }

    #[test]
    fn equality_and_hash() {
        let a = Square::at(6, 4).unwrap();
        let b = Square::at(4, 4).unwrap();
        let c = Square::at(5, 4).unwrap();

        let mv1 = Move::new(a, b);
        let mv2 = Move::new(a, b);
        let mv3 = Move::new(a, c);

        assert_eq!(mv1, mv2);
        assert_ne!(mv1, mv3);

        let mut set = HashSet::new();
        set.insert(mv1);
        set.insert(mv2);
        assert_eq!(set.len(), 1);
        set.insert(mv3);
        assert_eq!(set.len(), 2);
    }
}
