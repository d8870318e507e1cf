//! Error types for board access and move validation.

use std::fmt;

use super::types::{Move, Position};

/// Error type for board access failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Position lies outside the board
    OutOfBounds { row: i32, col: i32 },
    /// A piece was written to a light square
    LightSquare { row: i32, col: i32 },
    /// Unknown cell glyph in a board diagram
    InvalidGlyph { glyph: char },
    /// Board diagram has the wrong shape
    InvalidDiagram { reason: String },
}

impl BoardError {
    pub(crate) fn out_of_bounds(position: Position) -> Self {
        BoardError::OutOfBounds {
            row: position.row,
            col: position.col,
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Position ({row},{col}) is off the board")
            }
            BoardError::LightSquare { row, col } => {
                write!(f, "Position ({row},{col}) is a light square and cannot hold a piece")
            }
            BoardError::InvalidGlyph { glyph } => {
                write!(f, "Invalid cell glyph '{glyph}' in board diagram")
            }
            BoardError::InvalidDiagram { reason } => {
                write!(f, "Invalid board diagram: {reason}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for parsing a position from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionParseError {
    /// Text is not two integers separated by a comma or whitespace
    Malformed { input: String },
}

impl fmt::Display for PositionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionParseError::Malformed { input } => {
                write!(f, "Expected 'row,col' but found '{input}'")
            }
        }
    }
}

impl std::error::Error for PositionParseError {}

/// Reasons a candidate move is refused.
///
/// Every variant is recoverable: the board and turn are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// An endpoint lies off the board
    OutOfBounds { mv: Move },
    /// Source and destination are the same square
    NoMovement { mv: Move },
    /// Nothing stands on the source square
    EmptySource { mv: Move },
    /// The source piece belongs to the side not on move
    NotYourPiece { mv: Move },
    /// A jump is available, so a simple move is not allowed
    CaptureRequired { mv: Move },
    /// A chain is in progress and only its continuation jumps are playable
    MustContinueChain { mv: Move, from: Position },
    /// Not in the current legal-move set
    Illegal { mv: Move },
}

impl MoveError {
    /// The move that was refused
    #[must_use]
    pub fn attempted(&self) -> Move {
        match self {
            MoveError::OutOfBounds { mv }
            | MoveError::NoMovement { mv }
            | MoveError::EmptySource { mv }
            | MoveError::NotYourPiece { mv }
            | MoveError::CaptureRequired { mv }
            | MoveError::MustContinueChain { mv, .. }
            | MoveError::Illegal { mv } => *mv,
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { mv } => write!(f, "Move {mv} leaves the board"),
            MoveError::NoMovement { mv } => write!(f, "Move {mv} does not go anywhere"),
            MoveError::EmptySource { mv } => write!(f, "No piece to move for {mv}"),
            MoveError::NotYourPiece { mv } => {
                write!(f, "Move {mv} starts from an opponent's piece")
            }
            MoveError::CaptureRequired { mv } => {
                write!(f, "Move {mv} rejected: a capture is available and must be taken")
            }
            MoveError::MustContinueChain { mv, from } => {
                write!(f, "Move {mv} rejected: the jump chain must continue from {from}")
            }
            MoveError::Illegal { mv } => write!(f, "Illegal move {mv}"),
        }
    }
}

impl std::error::Error for MoveError {}
