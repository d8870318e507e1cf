#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{BoardError, CellContent, Position, Side, BOARD_SIZE};

/// An `N x N` grid of cell contents.
///
/// Only dark squares ever hold a piece; `set_cell_at` refuses anything else.
/// The board carries no rule knowledge beyond bounds and occupancy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) cells: [[CellContent; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Standard starting placement: twelve men per side on the dark squares
    /// of their three home rows, middle two rows empty.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for side in Side::BOTH {
            for row in side.home_rows() {
                for col in 0..BOARD_SIZE as i32 {
                    let position = Position::new(row, col);
                    if position.is_dark() {
                        board.cells[row as usize][col as usize] = CellContent::piece(side, false);
                    }
                }
            }
        }
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[CellContent::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Edge length of the board
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        BOARD_SIZE
    }

    #[inline]
    #[must_use]
    pub fn is_in_bounds(&self, position: Position) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&position.row) && (0..n).contains(&position.col)
    }

    pub fn cell_at(&self, position: Position) -> Result<CellContent, BoardError> {
        if !self.is_in_bounds(position) {
            return Err(BoardError::out_of_bounds(position));
        }
        Ok(self.cells[position.row as usize][position.col as usize])
    }

    /// Write a cell. Pieces may only go on dark squares; clearing is always allowed.
    pub fn set_cell_at(&mut self, position: Position, content: CellContent) -> Result<(), BoardError> {
        if !self.is_in_bounds(position) {
            return Err(BoardError::out_of_bounds(position));
        }
        if !content.is_empty() && !position.is_dark() {
            return Err(BoardError::LightSquare {
                row: position.row,
                col: position.col,
            });
        }
        self.cells[position.row as usize][position.col as usize] = content;
        Ok(())
    }

    /// Read a square already known to be in bounds.
    #[inline]
    pub(crate) fn get(&self, position: Position) -> CellContent {
        debug_assert!(self.is_in_bounds(position), "read off board at {position}");
        self.cells[position.row as usize][position.col as usize]
    }

    /// Write a dark square already known to be in bounds.
    #[inline]
    pub(crate) fn put(&mut self, position: Position, content: CellContent) {
        debug_assert!(self.is_in_bounds(position), "write off board at {position}");
        debug_assert!(content.is_empty() || position.is_dark());
        self.cells[position.row as usize][position.col as usize] = content;
    }

    /// In bounds and not empty
    #[inline]
    #[must_use]
    pub fn contains_piece(&self, position: Position) -> bool {
        self.cell_at(position).is_ok_and(|cell| !cell.is_empty())
    }

    /// In bounds and holding a man or king of `side`
    #[inline]
    #[must_use]
    pub fn is_owned_by(&self, position: Position, side: Side) -> bool {
        self.cell_at(position)
            .is_ok_and(|cell| cell.side() == Some(side))
    }

    /// In bounds, occupied, and not owned by `side`
    #[inline]
    #[must_use]
    pub fn is_opponent_of(&self, position: Position, side: Side) -> bool {
        self.cell_at(position)
            .is_ok_and(|cell| cell.side() == Some(side.opponent()))
    }

    /// Returns true if `position` is on the farthest row from `side`'s start
    #[inline]
    #[must_use]
    pub fn is_promotion_row(&self, position: Position, side: Side) -> bool {
        position.row == side.promotion_row()
    }

    /// Read-only snapshot of every row, top to bottom
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[[CellContent; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let n = BOARD_SIZE as i32;
        (0..n).flat_map(move |row| (0..n).map(move |col| Position::new(row, col)))
    }

    /// Occupied positions of `side` in row-major order
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Position, CellContent)> + '_ {
        self.positions().filter_map(move |position| {
            let cell = self.cells[position.row as usize][position.col as usize];
            (cell.side() == Some(side)).then_some((position, cell))
        })
    }

    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    #[must_use]
    pub fn king_count(&self, side: Side) -> usize {
        self.pieces(side).filter(|(_, cell)| cell.is_king()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
