//! Player that picks uniformly random legal moves.

use crate::board::{Board, SIZE};
use crate::error::InvalidCallContext;
use crate::rng::GameRng;
use crate::rules::evaluate;
use crate::types::{Mark, Move};
use tracing::debug;

/// Picks a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    mark: Mark,
    rng: GameRng,
}

impl RandomPlayer {
    /// Creates a random player drawing from `rng`.
    pub fn new(mark: Mark, rng: GameRng) -> Self {
        Self { mark, rng }
    }

    /// Mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Seed of the underlying random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Samples coordinates until one lands on an empty cell.
    ///
    /// Only a full board is refused; a board that already has a winner
    /// still has empty cells to sample.
    pub fn choose_move(&mut self, board: &Board) -> Result<Move, InvalidCallContext> {
        if board.is_full() {
            return Err(InvalidCallContext {
                outcome: evaluate(board),
            });
        }
        let mut draws = 0u32;
        loop {
            draws += 1;
            let mv = Move::new(self.rng.random_range(0..SIZE), self.rng.random_range(0..SIZE));
            if board.is_legal(mv) {
                debug!(mark = %self.mark, %mv, draws, "Random move");
                return Ok(mv);
            }
        }
    }
}
