//! Player variants and move selection.
//!
//! The set of players is closed: a seat is filled by a random mover, the
//! minimax engine or a human behind a [`MoveSource`]. Every variant answers
//! the same question, "which cell on this board?", through
//! [`Player::choose_move`].

mod computer;
mod human;
mod random;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, MoveSource};
pub use random::RandomPlayer;

use crate::board::Board;
use crate::error::GameError;
use crate::rng::GameRng;
use crate::search::SearchEngine;
use crate::types::{Mark, Move};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Kind of player occupying a seat.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed at the console.
    #[strum(to_string = "human", serialize = "h")]
    Human,
    /// Minimax engine.
    #[strum(to_string = "computer", serialize = "c")]
    Computer,
    /// Uniformly random legal moves.
    #[strum(to_string = "random", serialize = "r")]
    Random,
}

/// A player seated at one mark.
#[derive(Debug)]
pub enum Player {
    /// See [`RandomPlayer`].
    Random(RandomPlayer),
    /// See [`ComputerPlayer`].
    Computer(ComputerPlayer),
    /// See [`HumanPlayer`].
    Human(HumanPlayer),
}

impl Player {
    /// Random player for `mark` drawing from `rng`.
    pub fn random(mark: Mark, rng: GameRng) -> Self {
        Self::Random(RandomPlayer::new(mark, rng))
    }

    /// Minimax player for `mark` searching with `engine`.
    pub fn computer(mark: Mark, engine: SearchEngine) -> Self {
        Self::Computer(ComputerPlayer::new(mark, engine))
    }

    /// Human player for `mark` reading moves from `source`.
    pub fn human(mark: Mark, source: Box<dyn MoveSource>) -> Self {
        Self::Human(HumanPlayer::new(mark, source))
    }

    /// Mark this player places.
    pub fn mark(&self) -> Mark {
        match self {
            Self::Random(p) => p.mark(),
            Self::Computer(p) => p.mark(),
            Self::Human(p) => p.mark(),
        }
    }

    /// Kind of this player.
    pub fn kind(&self) -> PlayerKind {
        match self {
            Self::Random(_) => PlayerKind::Random,
            Self::Computer(_) => PlayerKind::Computer,
            Self::Human(_) => PlayerKind::Human,
        }
    }

    /// Chooses a legal move on `board`.
    ///
    /// The board is not modified. The returned move always targets an empty
    /// in-range cell.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidCallContext`] if the board offers no move
    /// - [`GameError::Input`] if a human's input source fails
    #[instrument(skip(self, board), fields(mark = %self.mark(), kind = %self.kind(), board = %board))]
    pub fn choose_move(&mut self, board: &Board) -> Result<Move, GameError> {
        match self {
            Self::Random(p) => Ok(p.choose_move(board)?),
            Self::Computer(p) => Ok(p.choose_move(board)?),
            Self::Human(p) => p.choose_move(board),
        }
    }
}
