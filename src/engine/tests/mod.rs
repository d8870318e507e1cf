//! Engine tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Move legality, captures, chains and promotion
//! - `selection.rs` - Two-click selection handling
//! - `proptest.rs` - Property-based tests over random games


use crate::board::{BoardBuilder, Move, Position};
use crate::engine::Engine;

pub(super) fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

pub(super) fn mv(from: (i32, i32), to: (i32, i32)) -> Move {
    Move::new(p(from.0, from.1), p(to.0, to.1))
}

pub(super) fn engine_from(builder: BoardBuilder) -> Engine {
    Engine::from_builder(&builder).expect("test position must be valid")
}
