//! Seating players from configuration.

use crate::config::GameConfig;
use crate::input::{LineReader, prompt_player_kind};
use std::io::Write;
use tictactoe_core::{GameRng, InputError, Mark, MoveSource, Player, PlayerKind, SearchEngine};
use tracing::{info, instrument};

/// Player kinds chosen for both seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seating {
    /// Kind in the X seat.
    pub x: PlayerKind,
    /// Kind in the O seat.
    pub o: PlayerKind,
}

/// Takes each seat from the configuration, asking on the console when unset.
///
/// # Errors
///
/// Returns [`InputError`] if a prompt cannot be answered.
#[instrument(skip_all)]
pub fn resolve_seating<R: LineReader, W: Write>(
    config: &GameConfig,
    reader: &mut R,
    out: &mut W,
) -> Result<Seating, InputError> {
    let x = match config.player_x() {
        Some(kind) => *kind,
        None => prompt_player_kind(reader, out, Mark::X)?,
    };
    let o = match config.player_o() {
        Some(kind) => *kind,
        None => prompt_player_kind(reader, out, Mark::O)?,
    };
    info!(%x, %o, "Seats resolved");
    Ok(Seating { x, o })
}

/// Random source for the game: the configured seed or a fresh one.
pub fn game_rng(config: &GameConfig) -> GameRng {
    let rng = match config.seed() {
        Some(seed) => GameRng::new(*seed),
        None => GameRng::from_random(),
    };
    info!(seed = rng.seed(), "Random seed");
    rng
}

/// Builds the player for one seat.
///
/// Each random player gets its own source forked from `rng`; human players
/// read from whatever `human` returns for their mark.
pub fn build_player(
    kind: PlayerKind,
    mark: Mark,
    config: &GameConfig,
    rng: &mut GameRng,
    human: &mut impl FnMut(Mark) -> Box<dyn MoveSource>,
) -> Player {
    match kind {
        PlayerKind::Human => Player::human(mark, human(mark)),
        PlayerKind::Computer => Player::computer(
            mark,
            SearchEngine::new().with_opening_shortcut(*config.opening_shortcut()),
        ),
        PlayerKind::Random => Player::random(mark, rng.fork()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn no_humans(_: Mark) -> Box<dyn MoveSource> {
        panic!("no human seat expected")
    }

    #[test]
    fn test_configured_seats_skip_prompts() {
        let config = GameConfig::default()
            .with_player_x(PlayerKind::Random)
            .with_player_o(PlayerKind::Computer);
        let mut out = Vec::<u8>::new();
        let seating = resolve_seating(&config, &mut Cursor::new(""), &mut out).unwrap();
        assert_eq!(
            seating,
            Seating {
                x: PlayerKind::Random,
                o: PlayerKind::Computer
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_unset_seat_is_prompted() {
        let config = GameConfig::default().with_player_x(PlayerKind::Computer);
        let mut out = Vec::<u8>::new();
        let seating = resolve_seating(&config, &mut Cursor::new("h\n"), &mut out).unwrap();
        assert_eq!(seating.o, PlayerKind::Human);
        assert!(String::from_utf8(out).unwrap().starts_with("Player O:"));
    }

    #[test]
    fn test_build_player_per_kind() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(1);
        let mut human = no_humans;
        for kind in [PlayerKind::Computer, PlayerKind::Random] {
            let player = build_player(kind, Mark::O, &config, &mut rng, &mut human);
            assert_eq!(player.kind(), kind);
            assert_eq!(player.mark(), Mark::O);
        }
    }

    #[test]
    fn test_seeded_rng() {
        let config = GameConfig::default().with_seed(17);
        assert_eq!(game_rng(&config).seed(), 17);
    }
}
