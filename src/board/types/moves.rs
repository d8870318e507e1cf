//! Move types and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::position::{Direction, Position};

/// A candidate or legal transition from one square to another.
///
/// Two moves are equal when their endpoints are equal; direction and length
/// are derived on demand.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub source: Position,
    pub destination: Position,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(source: Position, destination: Position) -> Self {
        Move {
            source,
            destination,
        }
    }

    /// Per-axis signum of the displacement, each component in `-1..=1`
    #[inline]
    #[must_use]
    pub const fn direction(self) -> Direction {
        Direction::new(
            (self.destination.row - self.source.row).signum(),
            (self.destination.col - self.source.col).signum(),
        )
    }

    /// Chebyshev distance between the endpoints
    #[inline]
    #[must_use]
    pub const fn length(self) -> i32 {
        let dr = (self.destination.row - self.source.row).abs();
        let dc = (self.destination.col - self.source.col).abs();
        if dr > dc {
            dr
        } else {
            dc
        }
    }

    /// Returns true if source and destination coincide
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.length() == 0
    }

    #[inline]
    #[must_use]
    const fn is_exact_diagonal(self) -> bool {
        (self.destination.row - self.source.row).abs()
            == (self.destination.col - self.source.col).abs()
    }

    /// One diagonal step
    #[inline]
    #[must_use]
    pub const fn is_step(self) -> bool {
        self.length() == 1 && self.is_exact_diagonal()
    }

    /// Two diagonal steps
    #[inline]
    #[must_use]
    pub const fn is_jump(self) -> bool {
        self.length() == 2 && self.is_exact_diagonal()
    }

    /// The square a jump passes over, one step short of the destination
    #[inline]
    #[must_use]
    pub const fn captured_position(self) -> Option<Position> {
        if self.is_jump() {
            Some(self.source.offset(self.direction(), 1))
        } else {
            None
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}->{}", self.source, self.destination)?;
        if self.is_jump() {
            write!(f, " jump")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}

/// Upper bound on moves of one kind: every dark square owned, four directions each.
pub(crate) const MAX_MOVES: usize = 128;
const EMPTY_MOVE: Move = Move::new(Position::new(0, 0), Position::new(0, 0));

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "MoveList overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Returns true if a move with the same endpoints is listed
    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}
