//! Core checkers types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Side` and `CellContent` - the two players and what a square holds
//! - `Position` and `Direction` - board coordinates and diagonal steps
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod position;

pub use moves::{Move, MoveList};
pub use piece::{CellContent, Side};
pub use position::{Direction, Position};
