//! Error types for the decision engine and the game loop.

use crate::outcome::Outcome;
use crate::types::Mark;
use derive_more::{Display, Error};
use tracing::instrument;

/// A board mutation that targets a cell it may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// The coordinate lies off the 3×3 board.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied by {}", row, col, occupant)]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Mark already in the cell.
        occupant: Mark,
    },
}

/// A move was requested on a board where no move can be chosen.
///
/// Reaching this is a caller bug: the game loop never asks a finished
/// board for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No move can be chosen on this board ({})", outcome)]
pub struct InvalidCallContext {
    /// Outcome of the board at the time of the call.
    pub outcome: Outcome,
}

/// The input collaborator could not produce a line.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {} at {}:{}", message, file, line)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for InputError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Text that does not describe a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", found)]
    Length {
        /// Cells found.
        found: usize,
    },

    /// A character that is neither a mark, an empty cell nor a separator.
    #[display("Unexpected symbol '{}'", symbol)]
    Symbol {
        /// Offending character.
        symbol: char,
    },
}

/// Errors surfaced by the game loop.
#[derive(Debug, Clone, Display, Error)]
pub enum GameError {
    /// A player produced a move the board rejected.
    #[display("Player chose an illegal move")]
    IllegalMove(IllegalMove),

    /// A player was asked to move on a finished board.
    #[display("Player asked to move with no move available")]
    InvalidCallContext(InvalidCallContext),

    /// The human player's input collaborator failed.
    #[display("Human player input failed")]
    Input(InputError),

    /// A player was seated at the wrong mark.
    #[display("Seat {} was given a player for {}", expected, found)]
    SeatMismatch {
        /// Mark of the seat.
        expected: Mark,
        /// Mark the player plays.
        found: Mark,
    },

    /// A turn was requested after the game ended.
    #[display("Game is already over ({})", outcome)]
    GameOver {
        /// Final outcome.
        outcome: Outcome,
    },
}

impl From<IllegalMove> for GameError {
    fn from(err: IllegalMove) -> Self {
        Self::IllegalMove(err)
    }
}

impl From<InvalidCallContext> for GameError {
    fn from(err: InvalidCallContext) -> Self {
        Self::InvalidCallContext(err)
    }
}

impl From<InputError> for GameError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}
