//! Board coordinates and diagonal directions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionParseError;

/// A board coordinate, `(row, col)` with row 0 at the top edge.
///
/// Positions may lie off the board; only `Board` decides whether one is in
/// bounds, and nothing indexes cells without asking it first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Step `count` times in `direction`
    #[inline]
    #[must_use]
    pub const fn offset(self, direction: Direction, count: i32) -> Self {
        Position {
            row: self.row + direction.vertical * count,
            col: self.col + direction.horizontal * count,
        }
    }

    /// Squares with odd `row + col` are the playable ones
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col).rem_euclid(2) == 1
    }

    /// Swap row and column
    #[inline]
    #[must_use]
    pub const fn transposed(self) -> Self {
        Position {
            row: self.col,
            col: self.row,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position { row, col }
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Accepts `r,c`, `(r,c)` or `r c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PositionParseError::Malformed {
            input: s.to_string(),
        };
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(malformed());
        }
        let row = parts[0].parse::<i32>().map_err(|_| malformed())?;
        let col = parts[1].parse::<i32>().map_err(|_| malformed())?;
        Ok(Position { row, col })
    }
}

/// A unit step; diagonal steps have both components non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    pub vertical: i32,
    pub horizontal: i32,
}

impl Direction {
    pub const NORTH_WEST: Direction = Direction::new(-1, -1);
    pub const NORTH_EAST: Direction = Direction::new(-1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(1, 1);

    /// All four diagonals
    pub const DIAGONALS: [Direction; 4] = [
        Direction::NORTH_WEST,
        Direction::NORTH_EAST,
        Direction::SOUTH_WEST,
        Direction::SOUTH_EAST,
    ];

    #[inline]
    #[must_use]
    pub const fn new(vertical: i32, horizontal: i32) -> Self {
        Direction {
            vertical,
            horizontal,
        }
    }

    /// Same vertical sense, mirrored horizontally
    #[inline]
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Direction::new(self.vertical, -self.horizontal)
    }

    /// Opposite vertical sense, same horizontal
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> Self {
        Direction::new(-self.vertical, self.horizontal)
    }
}
