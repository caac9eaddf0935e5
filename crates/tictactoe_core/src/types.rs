//! Core domain types for tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Mark placed by a player.
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
)]
pub enum Mark {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Whether this mark is the maximizing side of the search.
    pub fn is_maximizing(self) -> bool {
        self == Mark::X
    }

    /// Returns the mark that plays the given search side.
    pub fn from_maximizing(maximizing: bool) -> Self {
        if maximizing { Mark::X } else { Mark::O }
    }

    /// Single-character symbol used in text boards.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol used in text boards.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(mark) => mark.symbol(),
        }
    }
}

/// A `(row, col)` coordinate naming a cell.
///
/// A move is not range-checked on construction; [`Board::set`](crate::Board::set)
/// is where legality is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Move {
    /// Whether both coordinates lie on a 3×3 board.
    pub fn in_range(self) -> bool {
        self.row < crate::board::SIZE && self.col < crate::board::SIZE
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
