//! Two-click move selection.

use crate::board::{Move, Position};

/// Buffers the first selection as a move source until a destination arrives.
///
/// Owned by the engine; it never talks back to it. `complete` hands the
/// finished move up as a return value and leaves the accumulator empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionAccumulator {
    source: Option<Position>,
}

impl SelectionAccumulator {
    #[must_use]
    pub const fn new() -> Self {
        SelectionAccumulator { source: None }
    }

    #[inline]
    #[must_use]
    pub const fn pending_source(&self) -> Option<Position> {
        self.source
    }

    #[inline]
    #[must_use]
    pub const fn is_latched(&self) -> bool {
        self.source.is_some()
    }

    pub fn latch(&mut self, source: Position) {
        self.source = Some(source);
    }

    /// Pair the latched source with `destination` and reset.
    ///
    /// Returns `None` if nothing was latched.
    pub fn complete(&mut self, destination: Position) -> Option<Move> {
        self.source
            .take()
            .map(|source| Move::new(source, destination))
    }

    pub fn reset(&mut self) {
        self.source = None;
    }
}
