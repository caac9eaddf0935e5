//! Text rendering and narration of a running game.

use std::io::{self, Write};
use std::time::Duration;
use tictactoe_core::{Board, Cell, GameEvent, Mark, Move, Outcome, PlayerKind, SIZE};
use tracing::instrument;

/// Renders the board with 1-based row and column labels.
///
/// ```text
///
///      1   2   3
///
///  1   X | O | X
///     -----------
///  2     | X |
///     -----------
///  3   O |   |
///
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("\n     1   2   3\n\n");
    for (row_idx, row) in board.rows().iter().enumerate() {
        out.push_str(&format!(" {}  ", row_idx + 1));
        for (col_idx, cell) in row.iter().enumerate() {
            let symbol = match cell {
                Cell::Empty => ' ',
                Cell::Occupied(mark) => mark.symbol(),
            };
            out.push_str(&format!(" {} ", symbol));
            if col_idx + 1 < SIZE {
                out.push('|');
            }
        }
        out.push('\n');
        if row_idx + 1 < SIZE {
            out.push_str("    -----------\n");
        }
    }
    out.push('\n');
    out
}

/// Announces a move in 1-based coordinates.
///
/// The minimax player speaks as "Computer"; everyone else as "Player".
pub fn narrate_move(mark: Mark, kind: PlayerKind, mv: Move) -> String {
    let speaker = match kind {
        PlayerKind::Computer => "Computer",
        PlayerKind::Human | PlayerKind::Random => "Player",
    };
    format!(
        "{} {} plays row {}, column {}",
        speaker,
        mark,
        mv.row + 1,
        mv.col + 1
    )
}

/// Final line of a game.
///
/// `leader` is the last mover and only shows up for a game still in progress.
pub fn finish_line(outcome: Outcome, leader: Mark) -> String {
    match outcome {
        Outcome::Tie => "Tie!".to_string(),
        Outcome::Win(winner) => format!("Player {} wins!", winner),
        Outcome::InProgress => format!("Game in progress, {} moved last", leader),
    }
}

/// Writes game events to a text sink.
#[derive(Debug)]
pub struct ConsoleView<W: Write> {
    out: W,
    delay: Duration,
}

impl<W: Write> ConsoleView<W> {
    /// Creates a view that pauses for `delay` after each board.
    pub fn new(out: W, delay: Duration) -> Self {
        Self { out, delay }
    }

    /// Renders one event.
    #[instrument(level = "trace", skip(self))]
    pub fn observe(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::Started { board } => self.show_board(board),
            GameEvent::MoveMade {
                mark,
                kind,
                mv,
                board,
            } => {
                if *kind == PlayerKind::Human {
                    writeln!(self.out)?;
                }
                writeln!(self.out, "{}", narrate_move(*mark, *kind, *mv))?;
                self.show_board(board)
            }
            GameEvent::Finished {
                outcome, leader, ..
            } => {
                writeln!(self.out, "{}", finish_line(*outcome, *leader))?;
                self.out.flush()
            }
        }
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.out, "{}", render_board(board))?;
        self.out.flush()?;
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matches_layout() {
        let board: Board = "XOX/.X./O..".parse().unwrap();
        let expected = "\n     1   2   3\n\n \
                        1   X | O | X \n    -----------\n \
                        2     | X |   \n    -----------\n \
                        3   O |   |   \n\n";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_narration_speakers() {
        let mv = Move::new(0, 2);
        assert_eq!(
            narrate_move(Mark::X, PlayerKind::Human, mv),
            "Player X plays row 1, column 3"
        );
        assert_eq!(
            narrate_move(Mark::O, PlayerKind::Computer, Move::new(1, 1)),
            "Computer O plays row 2, column 2"
        );
    }

    #[test]
    fn test_finish_lines() {
        assert_eq!(finish_line(Outcome::Tie, Mark::X), "Tie!");
        assert_eq!(finish_line(Outcome::Win(Mark::O), Mark::O), "Player O wins!");
        assert_eq!(finish_line(Outcome::Win(Mark::X), Mark::O), "Player X wins!");
        assert!(!finish_line(Outcome::InProgress, Mark::X).contains("wins"));
    }

    #[test]
    fn test_human_move_preceded_by_blank_line() {
        let mut view = ConsoleView::new(Vec::<u8>::new(), Duration::ZERO);
        let mut board = Board::empty();
        board.set(0, 0, Mark::X).unwrap();
        view.observe(&GameEvent::MoveMade {
            mark: Mark::X,
            kind: PlayerKind::Human,
            mv: Move::new(0, 0),
            board,
        })
        .unwrap();
        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.starts_with("\nPlayer X plays row 1, column 1\n\n     1   2   3"));
    }
}
