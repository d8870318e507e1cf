//! Legal move enumeration.

use crate::board::{Board, CellContent, Direction, Move, MoveList, Position, Side};

/// Simple moves and jumps available to the side to move.
///
/// Both lists may be populated at once; whenever `jumps` is non-empty the
/// simple moves are not playable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LegalMoves {
    pub(crate) simple: MoveList,
    pub(crate) jumps: MoveList,
}

impl LegalMoves {
    pub(crate) fn clear(&mut self) {
        self.simple.clear();
        self.jumps.clear();
    }

    /// Full board scan for `side`.
    pub(crate) fn populate(&mut self, board: &Board, side: Side) {
        self.clear();
        for (position, piece) in board.pieces(side) {
            for &direction in piece_directions(piece, side) {
                self.add_moves_for_direction(board, position, direction, side);
            }
        }
    }

    /// Replace the jump list with continuations from `landing` after a jump
    /// in `direction`. Simple moves are left as they were.
    ///
    /// Looks ahead in the same direction and its horizontal mirror; a piece
    /// that was already a king before landing also looks backward on the
    /// same horizontal. A man crowned by this very jump passes `was_king =
    /// false`: crowning ends the turn, so its new king moves wait for the
    /// next one.
    pub(crate) fn populate_continuations(
        &mut self,
        board: &Board,
        landing: Position,
        direction: Direction,
        was_king: bool,
        side: Side,
    ) {
        self.jumps.clear();
        self.add_jump_for_direction(board, landing, direction, side);
        self.add_jump_for_direction(board, landing, direction.mirrored(), side);
        if was_king {
            self.add_jump_for_direction(board, landing, direction.reversed(), side);
        }
    }

    fn add_moves_for_direction(
        &mut self,
        board: &Board,
        from: Position,
        direction: Direction,
        side: Side,
    ) {
        let step = from.offset(direction, 1);
        if board.is_in_bounds(step) && !board.contains_piece(step) {
            self.simple.push(Move::new(from, step));
        }
        self.add_jump_for_direction(board, from, direction, side);
    }

    fn add_jump_for_direction(
        &mut self,
        board: &Board,
        from: Position,
        direction: Direction,
        side: Side,
    ) {
        let middle = from.offset(direction, 1);
        let landing = from.offset(direction, 2);
        if board.is_opponent_of(middle, side)
            && board.is_in_bounds(landing)
            && !board.contains_piece(landing)
        {
            self.jumps.push(Move::new(from, landing));
        }
    }
}

/// Directions a piece may travel: kings go all four ways, men only forward.
pub(crate) fn piece_directions(piece: CellContent, side: Side) -> &'static [Direction] {
    match (piece.is_king(), side) {
        (true, _) => &Direction::DIAGONALS,
        (false, Side::Black) => &[Direction::SOUTH_WEST, Direction::SOUTH_EAST],
        (false, Side::White) => &[Direction::NORTH_WEST, Direction::NORTH_EAST],
    }
}
