//! Text diagrams of the board.
//!
//! A diagram is eight lines of eight glyphs, row 0 first:
//! `.` empty, `b`/`w` men, `B`/`W` kings. Whitespace inside a line is ignored.

use std::fmt;

use super::{Board, BoardError, CellContent, Position, BOARD_SIZE};

impl Board {
    /// Parse a board from a glyph diagram.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let lines: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != BOARD_SIZE {
            return Err(BoardError::InvalidDiagram {
                reason: format!("expected {BOARD_SIZE} rows, found {}", lines.len()),
            });
        }

        let mut board = Board::empty();
        for (row, line) in lines.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != BOARD_SIZE {
                return Err(BoardError::InvalidDiagram {
                    reason: format!(
                        "row {row} has {} cells, expected {BOARD_SIZE}",
                        glyphs.len()
                    ),
                });
            }
            for (col, glyph) in glyphs.into_iter().enumerate() {
                let cell =
                    CellContent::from_char(glyph).ok_or(BoardError::InvalidGlyph { glyph })?;
                board.set_cell_at(Position::new(row as i32, col as i32), cell)?;
            }
        }
        Ok(board)
    }

    /// Plain diagram without labels, accepted by `from_diagram`
    #[must_use]
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1));
        for row in self.rows() {
            out.extend(row.iter().map(|cell| cell.to_char()));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.rows().iter().enumerate() {
            write!(f, "{row:>2} ")?;
            for cell in cells {
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    const START: &str = "
        .b.b.b.b
        b.b.b.b.
        .b.b.b.b
        ........
        ........
        w.w.w.w.
        .w.w.w.w
        w.w.w.w.
    ";

    #[test]
    fn test_start_diagram_matches_new() {
        assert_eq!(Board::from_diagram(START), Ok(Board::new()));
    }

    #[test]
    fn test_diagram_round_trip() {
        let board = Board::new();
        assert_eq!(Board::from_diagram(&board.to_diagram()), Ok(board));
    }

    #[test]
    fn test_kings_parse() {
        let board = Board::from_diagram(
            "
            ........
            ........
            ........
            ....W...
            ...B....
            ........
            ........
            ........
            ",
        )
        .unwrap();
        assert_eq!(board.king_count(Side::White), 1);
        assert_eq!(board.king_count(Side::Black), 1);
        assert!(board.contains_piece(Position::new(4, 3)));
    }

    #[test]
    fn test_rejects_light_square_piece() {
        let diagram = "b.......\n........\n........\n........\n........\n........\n........\n........";
        assert_eq!(
            Board::from_diagram(diagram),
            Err(BoardError::LightSquare { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_rejects_bad_shape_and_glyph() {
        assert!(matches!(
            Board::from_diagram("........\n........"),
            Err(BoardError::InvalidDiagram { .. })
        ));
        let bad = ".x......\n........\n........\n........\n........\n........\n........\n........";
        assert_eq!(
            Board::from_diagram(bad),
            Err(BoardError::InvalidGlyph { glyph: 'x' })
        );
    }

    #[test]
    fn test_display_has_labels() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].contains('7'));
        assert!(lines[1].starts_with(" 0"));
        assert!(lines[1].contains('b'));
        assert!(lines[8].contains('w'));
    }
}
