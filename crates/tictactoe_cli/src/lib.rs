//! Console front end for the tic-tac-toe engine.
//!
//! Seats players from configuration or prompts, runs the game loop with a
//! text view on standard output, and offers an `analyze` command that prints
//! the engine's evaluation of any board.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod input;
pub mod setup;

pub use cli::{Cli, Command, PlayArgs};
pub use config::{ConfigError, GameConfig};
pub use console::{ConsoleView, finish_line, narrate_move, render_board};
pub use input::{ConsoleInput, LineReader, parse_move, prompt_player_kind};
pub use setup::{Seating, build_player, game_rng, resolve_seating};

use anyhow::{Context, Result, bail};
use std::io::{self, Write};
use std::time::Duration;
use tictactoe_core::rules::{evaluate, is_balanced, side_to_move};
use tictactoe_core::search::{O_WIN, X_WIN};
use tictactoe_core::{Analysis, Board, Game, Mark, Move, MoveSource, Outcome, SearchEngine};
use tracing::{info, instrument, warn};

/// Applies `play` flags on top of the loaded configuration.
pub fn apply_play_args(config: GameConfig, args: &PlayArgs) -> GameConfig {
    let mut config = config;
    if let Some(kind) = args.player_x {
        config = config.with_player_x(kind);
    }
    if let Some(kind) = args.player_o {
        config = config.with_player_o(kind);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(delay) = args.delay_ms {
        config = config.with_move_delay_ms(delay);
    }
    if args.no_opening_shortcut {
        config = config.with_opening_shortcut(false);
    }
    config
}

/// Plays one game, prompting on `reader` and writing to `out`.
///
/// Unset seats are asked for first. `human` supplies the move source for each
/// human seat.
///
/// # Errors
///
/// Fails if a prompt cannot be answered or the game loop reports an error.
#[instrument(skip_all)]
pub fn play<R, W>(
    config: &GameConfig,
    reader: &mut R,
    mut out: W,
    mut human: impl FnMut(Mark) -> Box<dyn MoveSource>,
) -> Result<(Outcome, W)>
where
    R: LineReader,
    W: Write,
{
    let seating = resolve_seating(config, reader, &mut out).context("Failed to seat players")?;
    let mut rng = game_rng(config);
    let player_x = build_player(seating.x, Mark::X, config, &mut rng, &mut human);
    let player_o = build_player(seating.o, Mark::O, config, &mut rng, &mut human);
    let mut game = Game::new(player_x, player_o)?;

    let mut view = ConsoleView::new(out, Duration::from_millis(*config.move_delay_ms()));
    let outcome = game
        .run(|event| {
            if let Err(e) = view.observe(event) {
                warn!(error = %e, "Failed to render game event");
            }
        })
        .context("Game aborted")?;

    info!(%outcome, moves = game.history().len(), "Game over");
    Ok((outcome, view.into_inner()))
}

/// Plays one game on the process's standard streams.
///
/// # Errors
///
/// See [`play`].
pub fn play_stdio(config: &GameConfig) -> Result<Outcome> {
    let (outcome, _) = play(config, &mut io::stdin(), io::stdout(), |_| {
        Box::new(ConsoleInput::stdio())
    })?;
    Ok(outcome)
}

fn describe_value(value: i32) -> &'static str {
    match value {
        X_WIN => "X wins",
        O_WIN => "O wins",
        _ => "tie",
    }
}

fn describe_move(mv: Move) -> String {
    format!("row {}, column {}", mv.row + 1, mv.col + 1)
}

/// Parses `board_text`, searches it for the side to move and prints the result.
///
/// # Errors
///
/// Fails on text that is not a board, a board no legal game reaches, or a
/// board whose game is already over.
#[instrument(skip(out))]
pub fn analyze<W: Write>(board_text: &str, opening_shortcut: bool, out: &mut W) -> Result<Analysis> {
    let board: Board = board_text
        .parse()
        .with_context(|| format!("Invalid board '{}'", board_text))?;
    if !is_balanced(&board) {
        bail!(
            "Board {} is unreachable: X has {} marks, O has {}",
            board,
            board.count(Mark::X),
            board.count(Mark::O)
        );
    }
    let outcome = evaluate(&board);
    if outcome.is_terminal() {
        bail!("Board {} is already decided: {}", board, outcome);
    }

    let mark = side_to_move(&board);
    let mut engine = SearchEngine::new().with_opening_shortcut(opening_shortcut);
    let analysis = engine.analyze(&board, mark)?;

    write!(out, "{}", render_board(&board))?;
    writeln!(out, "To move: {}", analysis.mark)?;
    writeln!(
        out,
        "Value: {} ({})",
        analysis.value,
        describe_value(analysis.value)
    )?;
    writeln!(out, "Candidates:")?;
    for (mv, value) in &analysis.candidates {
        writeln!(out, "  {}: {:>2} ({})", describe_move(*mv), value, describe_value(*value))?;
    }
    writeln!(out, "Best move: {}", describe_move(analysis.best))?;
    writeln!(out, "Positions searched: {}", engine.nodes())?;
    Ok(analysis)
}
