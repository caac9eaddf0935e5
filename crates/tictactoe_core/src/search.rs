//! Exhaustive minimax search.
//!
//! X is always the maximizing side and O the minimizing side, whichever
//! player asks. Terminal boards score `+1` for an X win, `-1` for an O win
//! and `0` for a tie. There is no depth limit and no heuristic: every line
//! is played out to the end.
//!
//! [`minimax`] and [`best_move`] are the plain recursive definitions.
//! [`SearchEngine`] selects exactly the same moves but remembers the value of
//! every position it has solved, which makes repeated searches over one game
//! (or over every reachable position) cheap.

use crate::board::Board;
use crate::error::InvalidCallContext;
use crate::outcome::Outcome;
use crate::rules::evaluate;
use crate::types::{Mark, Move};
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// Score of a position X wins.
pub const X_WIN: i32 = 1;
/// Score of a position O wins.
pub const O_WIN: i32 = -1;
/// Score of a tied position.
pub const TIE: i32 = 0;

/// Move played by X on an empty board without searching.
pub const OPENING_MOVE: Move = Move { row: 0, col: 0 };

/// Score of a terminal outcome; `None` while the game is in progress.
pub fn score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::Win(Mark::X) => Some(X_WIN),
        Outcome::Win(Mark::O) => Some(O_WIN),
        Outcome::Tie => Some(TIE),
        Outcome::InProgress => None,
    }
}

/// Game-theoretic value of `board` with X (`maximizing`) or O to move.
pub fn minimax(board: &Board, maximizing: bool) -> i32 {
    if let Some(value) = score(evaluate(board)) {
        return value;
    }
    let mark = Mark::from_maximizing(maximizing);
    let values = board
        .empty_cells()
        .into_iter()
        .map(|mv| minimax(&board.successor(mv, mark), !maximizing));
    let best = if maximizing { values.max() } else { values.min() };
    best.unwrap_or(TIE)
}

/// Chooses the move for `mark` on `board` by exhaustive search.
///
/// Among equally good moves the first in row-major order wins. X on an empty
/// board plays [`OPENING_MOVE`] without searching.
///
/// # Errors
///
/// Returns [`InvalidCallContext`] if the board is already decided or full.
pub fn best_move(board: &Board, mark: Mark) -> Result<Move, InvalidCallContext> {
    select_move(board, mark, true, minimax)
}

/// Top-level selection shared by [`best_move`] and [`SearchEngine`].
///
/// `value_of` returns the minimax value of a successor board given whether
/// the side to move there is maximizing.
fn select_move(
    board: &Board,
    mark: Mark,
    opening_shortcut: bool,
    mut value_of: impl FnMut(&Board, bool) -> i32,
) -> Result<Move, InvalidCallContext> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        return Err(InvalidCallContext { outcome });
    }
    if opening_shortcut && mark == Mark::X && board.is_blank() {
        trace!("Opening shortcut");
        return Ok(OPENING_MOVE);
    }

    let maximizing = mark.is_maximizing();
    let bound = if maximizing { X_WIN } else { O_WIN };
    let mut best: Option<(Move, i32)> = None;

    for mv in board.empty_cells() {
        let value = value_of(&board.successor(mv, mark), !maximizing);
        trace!(%mv, value, "Candidate");
        if value == bound {
            return Ok(mv);
        }
        let improves = match best {
            None => true,
            Some((_, current)) if maximizing => value > current,
            Some((_, current)) => value < current,
        };
        if improves {
            best = Some((mv, value));
        }
    }

    best.map(|(mv, _)| mv).ok_or(InvalidCallContext { outcome })
}

/// Full breakdown of a position for one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Side the analysis is for.
    pub mark: Mark,
    /// Value of the position with `mark` to move.
    pub value: i32,
    /// Every empty cell in row-major order with the value of playing it.
    pub candidates: Vec<(Move, i32)>,
    /// Move the engine would play.
    pub best: Move,
}

/// Minimax search that memoizes position values.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    opening_shortcut: bool,
    table: HashMap<(Board, bool), i32>,
    nodes: u64,
}

impl SearchEngine {
    /// Creates an engine with the opening shortcut enabled.
    pub fn new() -> Self {
        Self {
            opening_shortcut: true,
            table: HashMap::new(),
            nodes: 0,
        }
    }

    /// Enables or disables the opening shortcut.
    ///
    /// Disabled, X on an empty board is searched like any other position and
    /// still settles on `(0, 0)` because every opening ties.
    pub fn with_opening_shortcut(mut self, enabled: bool) -> Self {
        self.opening_shortcut = enabled;
        self
    }

    /// Whether the opening shortcut is enabled.
    pub fn opening_shortcut(&self) -> bool {
        self.opening_shortcut
    }

    /// Positions solved so far (cache misses).
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Number of positions held in the cache.
    pub fn cached_positions(&self) -> usize {
        self.table.len()
    }

    /// Memoized [`minimax`].
    pub fn value(&mut self, board: &Board, maximizing: bool) -> i32 {
        let key = (board.clone(), maximizing);
        if let Some(&value) = self.table.get(&key) {
            return value;
        }
        self.nodes += 1;

        let value = match score(evaluate(board)) {
            Some(value) => value,
            None => {
                let mark = Mark::from_maximizing(maximizing);
                let mut best: Option<i32> = None;
                for mv in board.empty_cells() {
                    let value = self.value(&board.successor(mv, mark), !maximizing);
                    best = Some(match best {
                        None => value,
                        Some(current) if maximizing => current.max(value),
                        Some(current) => current.min(value),
                    });
                }
                best.unwrap_or(TIE)
            }
        };

        self.table.insert(key, value);
        value
    }

    /// Chooses the move for `mark` on `board`. Same selection as [`best_move`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCallContext`] if the board is already decided or full.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn best_move(&mut self, board: &Board, mark: Mark) -> Result<Move, InvalidCallContext> {
        let nodes_before = self.nodes;
        let opening_shortcut = self.opening_shortcut;
        let chosen = select_move(board, mark, opening_shortcut, |next, maximizing| {
            self.value(next, maximizing)
        })?;
        debug!(
            %chosen,
            nodes = self.nodes - nodes_before,
            cached = self.table.len(),
            "Search selected move"
        );
        Ok(chosen)
    }

    /// Values every candidate for `mark`, without early exit.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCallContext`] if the board is already decided or full.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn analyze(&mut self, board: &Board, mark: Mark) -> Result<Analysis, InvalidCallContext> {
        let best = self.best_move(board, mark)?;
        let maximizing = mark.is_maximizing();
        let candidates = board
            .empty_cells()
            .into_iter()
            .map(|mv| (mv, self.value(&board.successor(mv, mark), !maximizing)))
            .collect();
        Ok(Analysis {
            mark,
            value: self.value(board, maximizing),
            candidates,
            best,
        })
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
