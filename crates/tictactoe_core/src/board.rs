//! The 3×3 board and its accessors.

use crate::error::{BoardParseError, IllegalMove};
use crate::types::{Cell, Mark, Move};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of rows and columns.
pub const SIZE: usize = 3;

/// 3×3 tic-tac-toe board addressed by `(row, col)`.
///
/// `Clone` is a full structural copy; the search explores hypothetical
/// futures on clones and never touches the board it was handed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a board with all nine cells empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..3`, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn try_get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// This is the single mutation entry point for applied moves.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfRange`] for coordinates off the board and
    /// [`IllegalMove::Occupied`] if the cell already holds a mark. The board
    /// is left untouched on error.
    #[instrument(level = "trace", skip(self))]
    pub fn set(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), IllegalMove> {
        match self.try_get(row, col) {
            None => Err(IllegalMove::OutOfRange { row, col }),
            Some(Cell::Occupied(occupant)) => Err(IllegalMove::Occupied {
                row,
                col,
                occupant,
            }),
            Some(Cell::Empty) => {
                self.cells[row][col] = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Places `mark` at the cell named by `mv`. See [`Board::set`].
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), IllegalMove> {
        self.set(mv.row, mv.col, mark)
    }

    /// Checks if `mv` names an empty cell on the board.
    pub fn is_legal(&self, mv: Move) -> bool {
        matches!(self.try_get(mv.row, mv.col), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `mark` placed at `mv`.
    ///
    /// Only for moves taken from [`Board::empty_cells`].
    pub(crate) fn successor(&self, mv: Move, mark: Mark) -> Board {
        debug_assert!(self.is_legal(mv), "successor on illegal move {mv}");
        let mut next = self.clone();
        next.cells[mv.row][mv.col] = Cell::Occupied(mark);
        next
    }

    /// Returns row `i`, left to right.
    pub fn row(&self, i: usize) -> [Cell; SIZE] {
        self.cells[i]
    }

    /// Returns column `i`, top to bottom.
    pub fn column(&self, i: usize) -> [Cell; SIZE] {
        [self.cells[0][i], self.cells[1][i], self.cells[2][i]]
    }

    /// Returns the two diagonals: top-left to bottom-right, then top-right
    /// to bottom-left.
    pub fn diagonals(&self) -> ([Cell; SIZE], [Cell; SIZE]) {
        (
            [self.cells[0][0], self.cells[1][1], self.cells[2][2]],
            [self.cells[0][2], self.cells[1][1], self.cells[2][0]],
        )
    }

    /// Returns the center cell.
    pub fn center(&self) -> Cell {
        self.cells[1][1]
    }

    /// Returns all rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Checks if no cell holds a mark.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_empty())
    }

    /// Lists the empty cells in row-major order.
    ///
    /// The order is what the search enumerates candidates in, so it decides
    /// ties between equally good moves.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(SIZE * SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }
}

/// Compact form: three rows of `X`, `O` and `.` joined by `/`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and `-` are empty cells; `/`,
    /// `,` and whitespace are ignored. Any arrangement is accepted, reachable
    /// or not; see [`rules::is_balanced`](crate::rules::is_balanced).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for symbol in s.chars() {
            match symbol {
                'x' | 'X' => cells.push(Cell::Occupied(Mark::X)),
                'o' | 'O' => cells.push(Cell::Occupied(Mark::O)),
                '.' | '_' | '-' => cells.push(Cell::Empty),
                '/' | ',' => {}
                c if c.is_whitespace() => {}
                c => return Err(BoardParseError::Symbol { symbol: c }),
            }
        }
        if cells.len() != SIZE * SIZE {
            return Err(BoardParseError::Length { found: cells.len() });
        }

        let mut board = Board::empty();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / SIZE][i % SIZE] = cell;
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert!(board.is_blank());
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_set_marks_cell() {
        let mut board = Board::empty();
        board.set(1, 2, Mark::X).unwrap();
        assert_eq!(board.get(1, 2), Cell::Occupied(Mark::X));
        assert_eq!(board.count(Mark::X), 1);
    }

    #[test]
    fn test_set_occupied_fails_without_overwrite() {
        let mut board = Board::empty();
        board.set(0, 0, Mark::X).unwrap();
        let err = board.set(0, 0, Mark::O).unwrap_err();
        assert_eq!(
            err,
            IllegalMove::Occupied {
                row: 0,
                col: 0,
                occupant: Mark::X
            }
        );
        assert_eq!(board.get(0, 0), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_set_out_of_range_fails() {
        let mut board = Board::empty();
        assert_eq!(
            board.set(3, 0, Mark::X),
            Err(IllegalMove::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            board.place(Move::new(0, 7), Mark::X),
            Err(IllegalMove::OutOfRange { row: 0, col: 7 })
        );
        assert!(board.is_blank());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        assert_eq!(
            board.empty_cells(),
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 2),
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_lines() {
        let board: Board = "XOX/.O./X..".parse().unwrap();
        let x = Cell::Occupied(Mark::X);
        let o = Cell::Occupied(Mark::O);
        let e = Cell::Empty;
        assert_eq!(board.row(0), [x, o, x]);
        assert_eq!(board.column(1), [o, o, e]);
        assert_eq!(board.diagonals(), ([x, o, e], [x, o, x]));
    }

    #[test]
    fn test_clone_is_independent() {
        let original: Board = "X../.O./...".parse().unwrap();
        let mut copy = original.clone();
        copy.set(2, 2, Mark::X).unwrap();
        assert_eq!(original.get(2, 2), Cell::Empty);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_display_round_trips_text_form() {
        let board: Board = "xo. / .x. / o..".parse().unwrap();
        assert_eq!(board.to_string(), "XO./.X./O..");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::Length { found: 2 })
        );
        assert_eq!(
            "XO?/.../...".parse::<Board>(),
            Err(BoardParseError::Symbol { symbol: '?' })
        );
        assert_eq!(
            "XOX/OXO/OX".parse::<Board>(),
            Err(BoardParseError::Length { found: 8 })
        );
    }
}
