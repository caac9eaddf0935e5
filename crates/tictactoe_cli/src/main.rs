//! Console tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_cli::{Cli, Command, GameConfig, analyze, apply_play_args, play_stdio};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command_or_default() {
        Command::Play(args) => {
            let config = apply_play_args(config, &args);
            info!(?config, "Starting game");
            play_stdio(&config)?;
        }
        Command::Analyze {
            board,
            no_opening_shortcut,
        } => {
            let opening_shortcut = *config.opening_shortcut() && !no_opening_shortcut;
            analyze(&board, opening_shortcut, &mut std::io::stdout())?;
        }
    }
    Ok(())
}
