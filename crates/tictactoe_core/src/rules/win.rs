//! Win detection logic for tic-tac-toe.

use crate::board::{Board, SIZE};
use crate::types::{Cell, Mark};

/// Returns the mark owning all three cells of `line`, if any.
fn line_owner(line: [Cell; SIZE]) -> Option<Mark> {
    match line {
        [Cell::Occupied(a), Cell::Occupied(b), Cell::Occupied(c)] if a == b && b == c => Some(a),
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row, column or diagonal.
/// Lines are not ranked: in a legal game at most one mark can own a line.
pub fn winner(board: &Board) -> Option<Mark> {
    (0..SIZE)
        .find_map(|i| line_owner(board.row(i)))
        .or_else(|| (0..SIZE).find_map(|i| line_owner(board.column(i))))
        .or_else(|| diagonal_winner(board))
}

fn diagonal_winner(board: &Board) -> Option<Mark> {
    // Both diagonals run through the center.
    if board.center().is_empty() {
        return None;
    }
    let (main, anti) = board.diagonals();
    line_owner(main).or_else(|| line_owner(anti))
}
