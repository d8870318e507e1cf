//! Checkers board representation.
//!
//! A fixed 8x8 grid of cell contents with bounds and occupancy queries.
//! The board knows nothing about turns or legality; see [`crate::engine`].
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Position, Side};
//!
//! let board = Board::new();
//! assert_eq!(board.piece_count(Side::Black), 12);
//! assert!(board.is_owned_by(Position::new(2, 1), Side::Black));
//! ```

mod builder;
mod display;
mod error;
pub mod prelude;
mod state;
mod types;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, MoveError, PositionParseError};
pub use state::Board;
pub use types::{CellContent, Direction, Move, MoveList, Position, Side};

/// Edge length of the board
pub const BOARD_SIZE: usize = 8;
