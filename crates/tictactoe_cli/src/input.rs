//! Line-based console input for human players and seat selection.

use std::io::{self, Cursor, Write};
use std::str::FromStr;
use tictactoe_core::{Board, InputError, Mark, Move, MoveSource, PlayerKind};
use tracing::{debug, instrument};

/// Source of input lines.
pub trait LineReader {
    /// Appends the next line to `buf`, returning the bytes read (0 at end of input).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineReader for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineReader for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::BufRead::read_line(self, buf)
    }
}

/// Reads one line without its line ending.
///
/// # Errors
///
/// Returns [`InputError`] on I/O failure or end of input.
fn next_line<R: LineReader>(reader: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::new("Input closed"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Parses a typed coordinate.
///
/// The first character is the row and the last character the column, each
/// `1` to `3`; whatever sits between them is ignored. `"1,3"`, `"1 3"` and
/// `"13"` all name row 1, column 3.
pub fn parse_move(line: &str) -> Option<Move> {
    let coordinate = |c: char| match c {
        '1'..='3' => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    };
    let row = coordinate(line.chars().next()?)?;
    let col = coordinate(line.chars().last()?)?;
    Some(Move::new(row, col))
}

/// Asks which kind of player takes the `mark` seat until the answer is valid.
///
/// # Errors
///
/// Returns [`InputError`] if input fails or ends.
#[instrument(skip(reader, out))]
pub fn prompt_player_kind<R: LineReader, W: Write>(
    reader: &mut R,
    out: &mut W,
    mark: Mark,
) -> Result<PlayerKind, InputError> {
    loop {
        writeln!(out, "Player {}: human, computer, or random?", mark)?;
        out.flush()?;
        let answer = next_line(reader)?;
        match PlayerKind::from_str(answer.trim()) {
            Ok(kind) => {
                debug!(%kind, "Seat chosen");
                return Ok(kind);
            }
            Err(_) => writeln!(out, "Invalid input!")?,
        }
    }
}

/// Human move source reading coordinates from a console.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    out: W,
}

impl<R: LineReader, W: Write> ConsoleInput<R, W> {
    /// Creates a move source reading from `reader` and prompting on `out`.
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    /// Returns the reader and the prompt sink.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.out)
    }
}

impl ConsoleInput<io::Stdin, io::Stdout> {
    /// Move source on the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineReader, W: Write> MoveSource for ConsoleInput<R, W> {
    fn request_move(&mut self, mark: Mark, _board: &Board) -> Result<Option<Move>, InputError> {
        writeln!(self.out, "Player {}: Enter your move (row, col)", mark)?;
        self.out.flush()?;
        let line = next_line(&mut self.reader)?;
        Ok(parse_move(&line))
    }

    fn reject(&mut self, _mark: Mark, _attempted: Option<Move>) {
        if let Err(e) = writeln!(self.out, "Illegal move!") {
            tracing::warn!(error = %e, "Failed to report illegal move");
        }
    }
}
