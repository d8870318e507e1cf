pub mod board;
pub mod console;
pub mod engine;

pub use board::{Board, BoardBuilder, CellContent, Move, Position, Side};
pub use engine::{Engine, GameStatus, MoveOutcome, SelectionEvent};
