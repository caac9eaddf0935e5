//! Classification of a board.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Status of a board, always recomputed from the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a line.
    InProgress,
    /// A player has three in a line.
    Win(Mark),
    /// Full board with no line.
    Tie,
}

impl Outcome {
    /// Checks if the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}
