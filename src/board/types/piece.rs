//! Side and cell content types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::BOARD_SIZE;

/// The two players.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Both sides in turn order (Black moves first)
    pub const BOTH: [Side; 2] = [Side::Black, Side::White];

    /// Returns the opposite side
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Row step of a forward move (+1 for Black, -1 for White)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }

    /// Farthest row from this side's starting edge
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> i32 {
        match self {
            Side::Black => BOARD_SIZE as i32 - 1,
            Side::White => 0,
        }
    }

    /// Rows filled with this side's pieces at the start of a game
    #[must_use]
    pub const fn home_rows(self) -> std::ops::Range<i32> {
        match self {
            Side::Black => 0..3,
            Side::White => BOARD_SIZE as i32 - 3..BOARD_SIZE as i32,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Contents of a single board square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellContent {
    #[default]
    Empty,
    Black,
    White,
    BlackKing,
    WhiteKing,
}

impl CellContent {
    /// Build the content for a piece of `side`
    #[inline]
    #[must_use]
    pub const fn piece(side: Side, king: bool) -> Self {
        match (side, king) {
            (Side::Black, false) => CellContent::Black,
            (Side::Black, true) => CellContent::BlackKing,
            (Side::White, false) => CellContent::White,
            (Side::White, true) => CellContent::WhiteKing,
        }
    }

    /// Owning side, or `None` for an empty square
    #[inline]
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            CellContent::Black | CellContent::BlackKing => Some(Side::Black),
            CellContent::White | CellContent::WhiteKing => Some(Side::White),
            CellContent::Empty => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, CellContent::BlackKing | CellContent::WhiteKing)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, CellContent::Empty)
    }

    /// The king version of this piece. Kings and empty squares are unchanged.
    #[inline]
    #[must_use]
    pub const fn promoted(self) -> Self {
        match self {
            CellContent::Black => CellContent::BlackKing,
            CellContent::White => CellContent::WhiteKing,
            other => other,
        }
    }

    /// Diagram glyph: `.` empty, `b`/`w` men, `B`/`W` kings
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            CellContent::Empty => '.',
            CellContent::Black => 'b',
            CellContent::White => 'w',
            CellContent::BlackKing => 'B',
            CellContent::WhiteKing => 'W',
        }
    }

    /// Parse a diagram glyph. `-` and `_` are accepted as empty as well.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '-' | '_' => Some(CellContent::Empty),
            'b' => Some(CellContent::Black),
            'w' => Some(CellContent::White),
            'B' => Some(CellContent::BlackKing),
            'W' => Some(CellContent::WhiteKing),
            _ => None,
        }
    }
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_of_kings() {
        assert_eq!(CellContent::BlackKing.side(), Some(Side::Black));
        assert_eq!(CellContent::WhiteKing.side(), Some(Side::White));
        assert_eq!(CellContent::Empty.side(), None);
    }

    #[test]
    fn test_promotion_is_idempotent() {
        assert_eq!(CellContent::Black.promoted(), CellContent::BlackKing);
        assert_eq!(CellContent::BlackKing.promoted(), CellContent::BlackKing);
        assert_eq!(CellContent::Empty.promoted(), CellContent::Empty);
    }

    #[test]
    fn test_glyphs() {
        for cell in [
            CellContent::Empty,
            CellContent::Black,
            CellContent::White,
            CellContent::BlackKing,
            CellContent::WhiteKing,
        ] {
            assert_eq!(CellContent::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(CellContent::from_char('x'), None);
    }

    #[test]
    fn test_sides_face_each_other() {
        assert_eq!(Side::Black.forward(), -Side::White.forward());
        assert_eq!(Side::Black.promotion_row(), 7);
        assert_eq!(Side::White.promotion_row(), 0);
        assert_eq!(Side::White.home_rows(), 5..8);
    }
}
