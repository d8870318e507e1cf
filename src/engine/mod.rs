//! Move rules engine.
//!
//! The single owner of the board, the side to move and the legal-move set.
//! Input arrives as board-coordinate selections or fully formed moves;
//! every call runs to completion and reports what happened as a value.
//!
//! Rules enforced:
//! - men step and jump diagonally forward only, kings in all four directions
//! - a jump must be played whenever one is available
//! - after a jump, the same piece keeps jumping while it can; the turn
//!   passes only when the chain is exhausted
//! - a man landing on its farthest row is crowned
//!
//! # Example
//! ```
//! use checkers_engine::board::{Position, Side};
//! use checkers_engine::engine::{Engine, SelectionEvent};
//!
//! let mut engine = Engine::new();
//! engine.on_selection(Position::new(2, 1));
//! let event = engine.on_selection(Position::new(3, 2));
//! assert!(matches!(event, SelectionEvent::Attempted(ref outcome) if outcome.is_executed()));
//! assert_eq!(engine.side_to_move(), Side::White);
//! ```

mod movegen;
mod outcome;
mod selection;

#[cfg(test)]
mod tests;

use log::{debug, info, warn};

use crate::board::{
    Board, BoardBuilder, BoardError, CellContent, Move, MoveError, MoveList, Position, Side,
};

use movegen::LegalMoves;
pub use outcome::{GameStatus, MoveOutcome, SelectionEvent};
pub use selection::SelectionAccumulator;

/// Checkers rules engine: board, turn, legal moves and pending selection.
#[derive(Clone, Debug)]
pub struct Engine {
    board: Board,
    side_to_move: Side,
    legal: LegalMoves,
    selection: SelectionAccumulator,
    chain: Option<Position>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// A new game from the standard position, Black to move.
    #[must_use]
    pub fn new() -> Self {
        Engine::from_board(Board::new(), Side::Black)
    }

    /// Start play from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let mut engine = Engine {
            board,
            side_to_move,
            legal: LegalMoves::default(),
            selection: SelectionAccumulator::new(),
            chain: None,
        };
        engine.populate_legal_turn_moves();
        engine
    }

    /// Start play from a builder's position and side to move.
    pub fn from_builder(builder: &BoardBuilder) -> Result<Self, BoardError> {
        Ok(Engine::from_board(builder.build()?, builder.side()))
    }

    /// Replace the board wholesale with the starting position.
    pub fn new_game(&mut self) {
        info!("new game");
        *self = Engine::new();
    }

    /// Read-only board snapshot
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn simple_moves(&self) -> &MoveList {
        &self.legal.simple
    }

    #[inline]
    #[must_use]
    pub fn jump_moves(&self) -> &MoveList {
        &self.legal.jumps
    }

    /// The moves the side to move may actually play: jumps if any exist,
    /// otherwise simple moves.
    #[must_use]
    pub fn playable_moves(&self) -> &MoveList {
        if self.legal.jumps.is_empty() {
            &self.legal.simple
        } else {
            &self.legal.jumps
        }
    }

    /// Landing square of the piece that must keep jumping, if a chain is in progress
    #[inline]
    #[must_use]
    pub fn chain_square(&self) -> Option<Position> {
        self.chain
    }

    /// Source latched by a first selection, if any
    #[inline]
    #[must_use]
    pub fn pending_source(&self) -> Option<Position> {
        self.selection.pending_source()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.playable_moves().is_empty() {
            GameStatus::Won(self.side_to_move.opponent())
        } else {
            GameStatus::InProgress
        }
    }

    /// Feed one board selection.
    ///
    /// The first selection latches an occupied square as the move source;
    /// the second completes the move and attempts it. Selecting the latched
    /// square again drops the pending move. The accumulator is empty after
    /// every second selection, whatever the outcome.
    pub fn on_selection(&mut self, position: Position) -> SelectionEvent {
        if !self.board.is_in_bounds(position) {
            warn!("selection {position} is off the board");
            return SelectionEvent::OutOfBounds(position);
        }

        let Some(mv) = self.selection.complete(position) else {
            if self.board.contains_piece(position) {
                debug!("latched source {position}");
                self.selection.latch(position);
                return SelectionEvent::SourceLatched(position);
            }
            debug!("ignored selection of empty square {position}");
            return SelectionEvent::IgnoredEmpty(position);
        };

        if mv.is_null() {
            debug!("selection at {position} cancelled");
            return SelectionEvent::Cancelled(position);
        }
        SelectionEvent::Attempted(self.attempt_move(mv))
    }

    /// Drop a latched source without attempting anything.
    pub fn clear_selection(&mut self) {
        self.selection.reset();
    }

    /// Validate `mv` against the legal-move set and play it if allowed.
    pub fn attempt_move(&mut self, mv: Move) -> MoveOutcome {
        let jumps_available = !self.legal.jumps.is_empty();

        if self.legal.jumps.contains(&mv) {
            return self.execute_jump(mv);
        }
        // Forced capture: simple moves only count when no jump exists.
        if !jumps_available && self.legal.simple.contains(&mv) {
            return self.execute_simple(mv);
        }

        let reason = self.diagnose_rejection(mv, jumps_available);
        warn!("{reason}");
        MoveOutcome::Rejected { reason }
    }

    fn execute_simple(&mut self, mv: Move) -> MoveOutcome {
        let promoted = self.relocate(mv);
        debug!("{} moved {mv}", self.side_to_move);
        self.switch_turns();
        MoveOutcome::Executed {
            captured: None,
            promoted,
            continued_jump: false,
        }
    }

    fn execute_jump(&mut self, mv: Move) -> MoveOutcome {
        let Some(captured) = mv.captured_position() else {
            return MoveOutcome::Rejected {
                reason: MoveError::Illegal { mv },
            };
        };
        let direction = mv.direction();
        let was_king = self.board.get(mv.source).is_king();

        let promoted = self.relocate(mv);
        self.board.put(captured, CellContent::Empty);
        debug!("{} jumped {mv}, capturing {captured}", self.side_to_move);

        self.legal.populate_continuations(
            &self.board,
            mv.destination,
            direction,
            was_king,
            self.side_to_move,
        );

        let continued_jump = !self.legal.jumps.is_empty();
        if continued_jump {
            info!("{} must continue jumping from {}", self.side_to_move, mv.destination);
            self.chain = Some(mv.destination);
        } else {
            self.switch_turns();
        }

        MoveOutcome::Executed {
            captured: Some(captured),
            promoted,
            continued_jump,
        }
    }

    /// Move the piece, crowning it on its farthest row. Returns true on crowning.
    fn relocate(&mut self, mv: Move) -> bool {
        let piece = self.board.get(mv.source);
        let promoted =
            !piece.is_king() && self.board.is_promotion_row(mv.destination, self.side_to_move);
        let landed = if promoted { piece.promoted() } else { piece };

        self.board.put(mv.destination, landed);
        self.board.put(mv.source, CellContent::Empty);
        if promoted {
            info!("{} crowned at {}", self.side_to_move, mv.destination);
        }
        promoted
    }

    fn switch_turns(&mut self) {
        self.chain = None;
        self.side_to_move = self.side_to_move.opponent();
        self.populate_legal_turn_moves();
        info!("{} to move", self.side_to_move);
        if let GameStatus::Won(winner) = self.status() {
            info!("game over: {winner} wins");
        }
    }

    fn populate_legal_turn_moves(&mut self) {
        self.legal.populate(&self.board, self.side_to_move);
    }

    fn diagnose_rejection(&self, mv: Move, jumps_available: bool) -> MoveError {
        if !self.board.is_in_bounds(mv.source) || !self.board.is_in_bounds(mv.destination) {
            return MoveError::OutOfBounds { mv };
        }
        if mv.is_null() {
            return MoveError::NoMovement { mv };
        }
        let piece = self.board.get(mv.source);
        if piece.is_empty() {
            return MoveError::EmptySource { mv };
        }
        if piece.side() != Some(self.side_to_move) {
            return MoveError::NotYourPiece { mv };
        }
        if let Some(from) = self.chain {
            return MoveError::MustContinueChain { mv, from };
        }
        if jumps_available && self.legal.simple.contains(&mv) {
            return MoveError::CaptureRequired { mv };
        }
        MoveError::Illegal { mv }
    }
}
