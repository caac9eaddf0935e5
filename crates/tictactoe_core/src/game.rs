//! Game loop driving two players over one board.

use crate::board::Board;
use crate::error::GameError;
use crate::outcome::Outcome;
use crate::players::{Player, PlayerKind};
use crate::rules::{evaluate, leading_mark};
use crate::types::{Mark, Move};
use tracing::{debug, info, instrument};

/// Notifications emitted while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The game is about to request its first move.
    Started {
        /// Starting board.
        board: Board,
    },
    /// A move was applied.
    MoveMade {
        /// Mark that moved.
        mark: Mark,
        /// Kind of player that moved.
        kind: PlayerKind,
        /// Cell played.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// The game reached a terminal outcome.
    Finished {
        /// Final outcome.
        outcome: Outcome,
        /// Final board.
        board: Board,
        /// Mark of the last mover.
        leader: Mark,
    },
}

/// Record of one applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Mark that moved.
    pub mark: Mark,
    /// Kind of player that moved.
    pub kind: PlayerKind,
    /// Cell played.
    pub mv: Move,
    /// Outcome after the move.
    pub outcome: Outcome,
}

/// A single game: the live board, both seats and the move history.
#[derive(Debug)]
pub struct Game {
    board: Board,
    player_x: Player,
    player_o: Player,
    to_move: Mark,
    history: Vec<Move>,
}

impl Game {
    /// Seats two players on an empty board. X moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SeatMismatch`] if a player's mark does not match
    /// its seat.
    pub fn new(player_x: Player, player_o: Player) -> Result<Self, GameError> {
        for (seat, player) in [(Mark::X, &player_x), (Mark::O, &player_o)] {
            if player.mark() != seat {
                return Err(GameError::SeatMismatch {
                    expected: seat,
                    found: player.mark(),
                });
            }
        }
        info!(
            player_x = %player_x.kind(),
            player_o = %player_o.kind(),
            "Game created"
        );
        Ok(Self {
            board: Board::empty(),
            player_x,
            player_o,
            to_move: Mark::X,
            history: Vec::new(),
        })
    }

    /// Live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current outcome, recomputed from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Mark due to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Player seated at `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Requests one move from the side to move and applies it.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game has already ended
    /// - any error the player raises while choosing
    /// - [`GameError::IllegalMove`] if the board rejects the chosen move
    #[instrument(skip(self), fields(to_move = %self.to_move, ply = self.history.len()))]
    pub fn play_turn(&mut self) -> Result<Turn, GameError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(GameError::GameOver { outcome });
        }

        let mark = self.to_move;
        let player = match mark {
            Mark::X => &mut self.player_x,
            Mark::O => &mut self.player_o,
        };
        let kind = player.kind();
        let mv = player.choose_move(&self.board)?;
        self.board.place(mv, mark)?;
        self.history.push(mv);
        self.to_move = mark.opponent();

        let outcome = self.outcome();
        debug!(%mark, %mv, %outcome, "Move applied");
        Ok(Turn {
            mark,
            kind,
            mv,
            outcome,
        })
    }

    /// Plays to the end, reporting progress to `observe`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Game::play_turn`].
    #[instrument(skip(self, observe))]
    pub fn run(&mut self, mut observe: impl FnMut(&GameEvent)) -> Result<Outcome, GameError> {
        observe(&GameEvent::Started {
            board: self.board.clone(),
        });

        let mut outcome = self.outcome();
        while !outcome.is_terminal() {
            let turn = self.play_turn()?;
            observe(&GameEvent::MoveMade {
                mark: turn.mark,
                kind: turn.kind,
                mv: turn.mv,
                board: self.board.clone(),
            });
            outcome = turn.outcome;
        }

        info!(%outcome, moves = self.history.len(), "Game finished");
        observe(&GameEvent::Finished {
            outcome,
            board: self.board.clone(),
            leader: leading_mark(&self.board),
        });
        Ok(outcome)
    }
}
