//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, CellContent, Direction, Move, MoveError, MoveList, Position,
    Side,
};
pub use crate::engine::{Engine, GameStatus, MoveOutcome, SelectionEvent};
