//! Mark counting.
//!
//! X always moves first and turns strictly alternate, so the mark counts
//! alone say who moved last and who moves next.

use crate::board::Board;
use crate::types::Mark;
use tracing::warn;

/// Checks the move-count invariant: `count(X) - count(O)` is 0 or 1.
pub fn is_balanced(board: &Board) -> bool {
    let (x, o) = (board.count(Mark::X), board.count(Mark::O));
    let balanced = x == o || x == o + 1;
    if !balanced {
        warn!(x, o, "Board violates move-count invariant");
    }
    balanced
}

/// Returns the mark of the last mover: X if X has more marks, otherwise O.
///
/// Used to name the winner when narrating a finished game. The search never
/// consults it.
pub fn leading_mark(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns the mark due to move next on a balanced board.
pub fn side_to_move(board: &Board) -> Mark {
    leading_mark(board).opponent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_x_to_move() {
        let board = Board::empty();
        assert!(is_balanced(&board));
        assert_eq!(side_to_move(&board), Mark::X);
    }

    #[test]
    fn test_x_ahead_leads() {
        let board: Board = "XO./X../...".parse().unwrap();
        assert_eq!(leading_mark(&board), Mark::X);
        assert_eq!(side_to_move(&board), Mark::O);
    }

    #[test]
    fn test_equal_counts_o_led() {
        let board: Board = "XO./.../...".parse().unwrap();
        assert_eq!(leading_mark(&board), Mark::O);
        assert_eq!(side_to_move(&board), Mark::X);
    }

    #[test]
    fn test_unbalanced_boards() {
        assert!(!is_balanced(&"XX./.../...".parse().unwrap()));
        assert!(!is_balanced(&"O../.../...".parse().unwrap()));
    }
}
