//! Fluent builder for constructing checkers positions.
//!
//! Allows creating positions piece by piece rather than parsing diagrams.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, CellContent, Position, Side};
//!
//! let board = BoardBuilder::new()
//!     .piece(Position::new(2, 3), CellContent::Black)
//!     .piece(Position::new(3, 4), CellContent::White)
//!     .side_to_move(Side::Black)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_count(Side::White), 1);
//! ```

use super::{Board, BoardError, CellContent, Position, Side};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Position, CellContent)>,
    side_to_move: Side,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder. Black moves first.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Side::Black,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for side in Side::BOTH {
            builder.pieces.extend(board.pieces(side));
        }
        builder
    }

    /// Place a piece, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, position: Position, content: CellContent) -> Self {
        self.pieces.retain(|(p, _)| *p != position);
        if !content.is_empty() {
            self.pieces.push((position, content));
        }
        self
    }

    /// Place a king of `side`.
    #[must_use]
    pub fn king(self, position: Position, side: Side) -> Self {
        self.piece(position, CellContent::piece(side, true))
    }

    /// Place a man of `side`.
    #[must_use]
    pub fn man(self, position: Position, side: Side) -> Self {
        self.piece(position, CellContent::piece(side, false))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, position: Position) -> Self {
        self.pieces.retain(|(p, _)| *p != position);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, side: Side) -> Self {
        self.side_to_move = side;
        self
    }

    /// The side that will be on move
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side_to_move
    }

    /// Build the board.
    ///
    /// Fails if any piece lies off the board or on a light square.
    pub fn build(&self) -> Result<Board, BoardError> {
        let mut board = Board::empty();
        for &(position, content) in &self.pieces {
            board.set_cell_at(position, content)?;
        }
        Ok(board)
    }
}
