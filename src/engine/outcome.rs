//! Results reported by the engine to its caller.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{MoveError, Position, Side};

/// Result of `Engine::attempt_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played.
    Executed {
        /// Square of the piece removed by a jump
        captured: Option<Position>,
        /// The moving piece became a king on landing
        promoted: bool,
        /// A further jump is required from the landing square; the turn did not pass
        continued_jump: bool,
    },
    /// The move was refused; board and turn are unchanged.
    Rejected { reason: MoveError },
}

impl MoveOutcome {
    #[must_use]
    pub fn is_executed(&self) -> bool {
        matches!(self, MoveOutcome::Executed { .. })
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected { .. })
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Executed {
                captured,
                promoted,
                continued_jump,
            } => {
                write!(f, "moved")?;
                if let Some(square) = captured {
                    write!(f, ", captured {square}")?;
                }
                if *promoted {
                    write!(f, ", crowned")?;
                }
                if *continued_jump {
                    write!(f, ", must jump again")?;
                }
                Ok(())
            }
            MoveOutcome::Rejected { reason } => write!(f, "rejected: {reason}"),
        }
    }
}

/// What a single board selection did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Off-board coordinate; nothing changed
    OutOfBounds(Position),
    /// First selection on an empty square; nothing latched
    IgnoredEmpty(Position),
    /// First selection latched as the move source
    SourceLatched(Position),
    /// The latched square was selected again; the pending move was dropped
    Cancelled(Position),
    /// Second selection completed a move and it was attempted
    Attempted(MoveOutcome),
}

/// Whether play continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    /// The other side has no playable move
    Won(Side),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(side) => write!(f, "{side} wins"),
        }
    }
}
