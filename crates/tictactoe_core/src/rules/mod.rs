//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the search, the players and the game loop can all consult them without
//! depending on each other.

pub mod tally;
pub mod win;

pub use tally::{is_balanced, leading_mark, side_to_move};
pub use win::winner;

use crate::board::Board;
use crate::outcome::Outcome;

/// Classifies `board`.
///
/// Any winning line decides the game; otherwise a full board is a tie and
/// anything else is still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Win(mark)
    } else if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_top_row_wins() {
        assert_eq!(evaluate(&board("XXX/OO./...")), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_ties() {
        assert_eq!(evaluate(&board("XOX/OXO/OXO")), Outcome::Tie);
    }

    #[test]
    fn test_diagonal_completes_win() {
        let mut b = board("XO./.X./O..");
        assert_eq!(evaluate(&b), Outcome::InProgress);
        b.set(2, 2, Mark::X).unwrap();
        assert_eq!(evaluate(&b), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::empty()), Outcome::InProgress);
    }

    #[test]
    fn test_win_on_last_cell_is_not_tie() {
        assert_eq!(evaluate(&board("XOX/OXO/XOX")), Outcome::Win(Mark::X));
    }
}
