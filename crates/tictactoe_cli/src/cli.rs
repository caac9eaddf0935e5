//! Command-line interface for the console game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::PlayerKind;

/// Tic-tac-toe at the console against humans, random movers or minimax.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe with a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game in the terminal
    Play(PlayArgs),

    /// Print the engine's evaluation of a board
    Analyze {
        /// Board as nine cells, e.g. "XO./.X./O.."
        board: String,

        /// Search the empty board instead of opening at the corner
        #[arg(long)]
        no_opening_shortcut: bool,
    },
}

/// Flags for `play`; each one overrides the configuration file.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Player in the X seat (human, computer, random)
    #[arg(short = 'x', long)]
    pub player_x: Option<PlayerKind>,

    /// Player in the O seat (human, computer, random)
    #[arg(short = 'o', long)]
    pub player_o: Option<PlayerKind>,

    /// Seed for random players
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after each board, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Search the empty board instead of opening at the corner
    #[arg(long)]
    pub no_opening_shortcut: bool,
}

impl Cli {
    /// The requested command, `play` with no flags when none was given.
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Play(PlayArgs::default()))
    }
}
