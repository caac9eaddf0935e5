//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::PlayerKind;
use tracing::{debug, info, instrument};

/// Settings for a console game.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Player in the X seat; asked for at startup when unset.
    player_x: Option<PlayerKind>,

    /// Player in the O seat; asked for at startup when unset.
    player_o: Option<PlayerKind>,

    /// Seed for random players; drawn fresh when unset.
    seed: Option<u64>,

    /// Pause after each rendered board, in milliseconds.
    move_delay_ms: u64,

    /// Whether X opens at the top-left corner without searching.
    opening_shortcut: bool,

    /// Log filter used when `RUST_LOG` is not set.
    log_filter: String,
}

#[instrument]
fn default_move_delay_ms() -> u64 {
    1000
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_x: None,
            player_o: None,
            seed: None,
            move_delay_ms: default_move_delay_ms(),
            opening_shortcut: true,
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_x = ?config.player_x,
            player_o = ?config.player_o,
            seed = ?config.seed,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the X seat.
    pub fn with_player_x(mut self, kind: PlayerKind) -> Self {
        self.player_x = Some(kind);
        self
    }

    /// Overrides the O seat.
    pub fn with_player_o(mut self, kind: PlayerKind) -> Self {
        self.player_o = Some(kind);
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the delay after each board.
    pub fn with_move_delay_ms(mut self, delay: u64) -> Self {
        self.move_delay_ms = delay;
        self
    }

    /// Overrides the opening shortcut.
    pub fn with_opening_shortcut(mut self, enabled: bool) -> Self {
        self.opening_shortcut = enabled;
        self
    }
}

/// A configuration file that could not be read or parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("{} ({}:{})", message, file, line)]
pub struct ConfigError {
    /// What went wrong, including the underlying cause.
    pub message: String,
    /// Line of the call that raised the error.
    pub line: u32,
    /// File of the call that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Records `message` with the location of the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
