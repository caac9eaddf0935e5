//! Tic-tac-toe decision engine.
//!
//! Board model, outcome rules and an exhaustive minimax search that never
//! loses, plus the player variants and the game loop that drives them.
//!
//! # Architecture
//!
//! - **Board**: the 3×3 grid and its single mutation entry point
//! - **Rules**: stateless classification of a board (win, tie, in progress)
//! - **Search**: full-depth minimax, X maximizing and O minimizing
//! - **Players**: random, computer and human seats behind one `choose_move`
//! - **Game**: alternates the seats and reports events to an observer
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Mark, Outcome, Player, SearchEngine};
//!
//! let mut game = Game::new(
//!     Player::computer(Mark::X, SearchEngine::new()),
//!     Player::computer(Mark::O, SearchEngine::new()),
//! )?;
//! assert_eq!(game.run(|_| {})?, Outcome::Tie);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod outcome;
mod players;
mod rng;
mod types;

pub mod rules;
pub mod search;

// Crate-level exports - Board and primitives
pub use board::{Board, SIZE};
pub use outcome::Outcome;
pub use types::{Cell, Mark, Move};

// Crate-level exports - Errors
pub use error::{BoardParseError, GameError, IllegalMove, InputError, InvalidCallContext};

// Crate-level exports - Search
pub use search::{Analysis, SearchEngine, best_move, minimax};

// Crate-level exports - Players
pub use players::{ComputerPlayer, HumanPlayer, MoveSource, Player, PlayerKind, RandomPlayer};
pub use rng::GameRng;

// Crate-level exports - Game loop
pub use game::{Game, GameEvent, Turn};
