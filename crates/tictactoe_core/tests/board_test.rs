//! Board mutation and outcome classification through the public API.

use tictactoe_core::rules::{evaluate, is_balanced};
use tictactoe_core::{Board, Cell, IllegalMove, Mark, Outcome};

#[test]
fn test_top_row_win() {
    let board: Board = "XXX/OO_/___".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
}

#[test]
fn test_full_board_tie() {
    let board: Board = "XOX/OXO/OXO".parse().unwrap();
    assert_eq!(evaluate(&board), Outcome::Tie);
}

#[test]
fn test_main_diagonal_completes_on_third_cell() {
    let mut board = Board::empty();
    board.set(0, 0, Mark::X).unwrap();
    board.set(0, 1, Mark::O).unwrap();
    board.set(1, 1, Mark::X).unwrap();
    board.set(2, 0, Mark::O).unwrap();
    assert_eq!(evaluate(&board), Outcome::InProgress);
    board.set(2, 2, Mark::X).unwrap();
    assert_eq!(evaluate(&board), Outcome::Win(Mark::X));
}

#[test]
fn test_occupied_cell_never_overwritten() {
    let mut board = Board::empty();
    board.set(1, 1, Mark::X).unwrap();
    assert_eq!(
        board.set(1, 1, Mark::O),
        Err(IllegalMove::Occupied {
            row: 1,
            col: 1,
            occupant: Mark::X
        })
    );
    assert_eq!(board.get(1, 1), Cell::Occupied(Mark::X));
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
fn test_balance_along_alternating_play() {
    let mut board = Board::empty();
    let mut mark = Mark::X;
    for mv in board.empty_cells() {
        board.place(mv, mark).unwrap();
        assert!(is_balanced(&board), "after {mv}: {board}");
        mark = mark.opponent();
    }
    assert!(board.is_full());
}
