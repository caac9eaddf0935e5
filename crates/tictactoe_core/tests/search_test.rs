//! Exhaustive checks of the minimax engine over every reachable position.

use std::collections::HashSet;
use tictactoe_core::rules::{evaluate, side_to_move};
use tictactoe_core::search::{OPENING_MOVE, TIE};
use tictactoe_core::{Board, Mark, Move, SearchEngine, best_move, minimax};

/// Every in-progress board reachable from the empty board by legal play.
fn reachable_positions() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![Board::empty()];
    let mut positions = Vec::new();
    while let Some(board) = stack.pop() {
        if !seen.insert(board.clone()) || evaluate(&board).is_terminal() {
            continue;
        }
        let mark = side_to_move(&board);
        for mv in board.empty_cells() {
            let mut next = board.clone();
            next.place(mv, mark).unwrap();
            stack.push(next);
        }
        positions.push(board);
    }
    positions
}

fn value_after(engine: &mut SearchEngine, board: &Board, mv: Move, mark: Mark) -> i32 {
    let mut next = board.clone();
    next.place(mv, mark).unwrap();
    engine.value(&next, !mark.is_maximizing())
}

#[test]
fn test_reachable_position_count() {
    // 5478 legal boards minus the 958 finished ones.
    assert_eq!(reachable_positions().len(), 4520);
}

#[test]
fn test_best_move_is_optimal_everywhere() {
    let mut engine = SearchEngine::new();
    for board in reachable_positions() {
        let mark = side_to_move(&board);
        let mv = engine.best_move(&board, mark).unwrap();
        assert!(board.is_legal(mv), "illegal choice {mv} on {board}");
        assert_eq!(
            value_after(&mut engine, &board, mv, mark),
            engine.value(&board, mark.is_maximizing()),
            "suboptimal choice {mv} on {board}"
        );
    }
}

#[test]
fn test_ties_resolve_to_first_row_major_candidate() {
    let mut engine = SearchEngine::new().with_opening_shortcut(false);
    for board in reachable_positions() {
        let mark = side_to_move(&board);
        let analysis = engine.analyze(&board, mark).unwrap();
        let first_optimal = analysis
            .candidates
            .iter()
            .find(|(_, value)| *value == analysis.value)
            .map(|(mv, _)| *mv);
        assert_eq!(Some(analysis.best), first_optimal, "on {board}");
    }
}

#[test]
fn test_cached_and_plain_search_agree() {
    let mut engine = SearchEngine::new();
    for board in reachable_positions()
        .into_iter()
        .filter(|b| b.empty_cells().len() <= 5)
    {
        let mark = side_to_move(&board);
        assert_eq!(
            engine.best_move(&board, mark),
            best_move(&board, mark),
            "on {board}"
        );
        assert_eq!(
            engine.value(&board, mark.is_maximizing()),
            minimax(&board, mark.is_maximizing())
        );
    }
}

#[test]
fn test_empty_board_without_shortcut_opens_top_left() {
    let mut engine = SearchEngine::new().with_opening_shortcut(false);
    assert_eq!(engine.best_move(&Board::empty(), Mark::X), Ok(OPENING_MOVE));
    assert_eq!(engine.value(&Board::empty(), true), TIE);
    assert!(engine.nodes() > 1);
}

#[test]
fn test_must_block_vertical_threat() {
    let board: Board = "X../XO./...".parse().unwrap();
    assert_eq!(best_move(&board, Mark::O), Ok(Move::new(2, 0)));
}

#[test]
fn test_prefers_win_over_block() {
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(best_move(&board, Mark::X), Ok(Move::new(0, 2)));
}

#[test]
fn test_search_leaves_board_untouched() {
    let board: Board = "X../.O./...".parse().unwrap();
    let snapshot = board.clone();
    best_move(&board, Mark::X).unwrap();
    SearchEngine::new().analyze(&board, Mark::X).unwrap();
    assert_eq!(board, snapshot);
}
