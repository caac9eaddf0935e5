//! Player backed by the minimax engine.

use crate::board::Board;
use crate::error::InvalidCallContext;
use crate::search::SearchEngine;
use crate::types::{Mark, Move};

/// Plays the engine's best move.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    mark: Mark,
    engine: SearchEngine,
}

impl ComputerPlayer {
    /// Creates a computer player searching with `engine`.
    pub fn new(mark: Mark, engine: SearchEngine) -> Self {
        Self { mark, engine }
    }

    /// Mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Engine used for move selection.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Returns the best move for this player's mark.
    pub fn choose_move(&mut self, board: &Board) -> Result<Move, InvalidCallContext> {
        self.engine.best_move(board, self.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completes_winning_line() {
        let board: Board = "OO./XX./X..".parse().unwrap();
        let mut player = ComputerPlayer::new(Mark::O, SearchEngine::new());
        assert_eq!(player.choose_move(&board), Ok(Move::new(0, 2)));
    }

    #[test]
    fn test_board_untouched() {
        let board: Board = "X../.O./...".parse().unwrap();
        let before = board.clone();
        let mut player = ComputerPlayer::new(Mark::X, SearchEngine::new());
        player.choose_move(&board).unwrap();
        assert_eq!(board, before);
        assert!(player.engine().cached_positions() > 0);
    }
}
