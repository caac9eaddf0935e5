//! Player whose moves come from outside the engine.

use crate::board::Board;
use crate::error::{GameError, InputError, InvalidCallContext};
use crate::rules::evaluate;
use crate::types::{Mark, Move};
use tracing::{debug, warn};

/// Supplies moves for a human player.
///
/// The console implements this by prompting and parsing a line; tests
/// implement it with a script.
pub trait MoveSource {
    /// Asks for a move for `mark` on `board`.
    ///
    /// Returns `Ok(None)` for input that does not name a cell at all.
    fn request_move(&mut self, mark: Mark, board: &Board) -> Result<Option<Move>, InputError>;

    /// Reports that the last answer was not a legal move.
    fn reject(&mut self, mark: Mark, attempted: Option<Move>);
}

/// Asks its [`MoveSource`] until it answers with a legal move.
pub struct HumanPlayer {
    mark: Mark,
    source: Box<dyn MoveSource>,
}

impl HumanPlayer {
    /// Creates a human player reading from `source`.
    pub fn new(mark: Mark, source: Box<dyn MoveSource>) -> Self {
        Self { mark, source }
    }

    /// Mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Prompts until the source names an empty in-range cell.
    ///
    /// A full board is refused before any prompt.
    pub fn choose_move(&mut self, board: &Board) -> Result<Move, GameError> {
        if board.is_full() {
            return Err(InvalidCallContext {
                outcome: evaluate(board),
            }
            .into());
        }
        loop {
            let attempted = self.source.request_move(self.mark, board)?;
            match attempted {
                Some(mv) if board.is_legal(mv) => {
                    debug!(mark = %self.mark, %mv, "Human move accepted");
                    return Ok(mv);
                }
                _ => {
                    warn!(mark = %self.mark, ?attempted, "Human move rejected");
                    self.source.reject(self.mark, attempted);
                }
            }
        }
    }
}

impl std::fmt::Debug for HumanPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanPlayer")
            .field("mark", &self.mark)
            .finish_non_exhaustive()
    }
}
