//! Game setup and teardown
//!
//! `setup_match` runs `OnEnter(GameState::InGame)` and builds a fresh position
//! from the current [`MatchConfig`]. `teardown_match` runs when the board
//! scenes are left and removes every per-game resource; a pending engine search
//! is aborted as its handle is dropped.

use crate::game::ai::{EngineStalled, MatchConfig, PendingEngineMove};
use crate::game::resources::{MatchOutcome, Selection, SuggestedMove};
use crate::game::rules::BoardState;
use bevy::prelude::*;
use shakmaty::Color;

/// Opening played on the engine's behalf when it has the white pieces
pub const FORCED_OPENING: &str = "e2e4";

/// Position a new game starts from under `config`
pub fn initial_board(config: &MatchConfig) -> BoardState {
    let mut board = BoardState::new();
    if config.engine_color() == Some(Color::White) {
        if let Err(e) = board.apply_uci(FORCED_OPENING) {
            error!("[GAME_INIT] Forced opening rejected: {}", e);
        }
    }
    board
}

/// System that creates the position for a new game
pub fn setup_match(
    mut commands: Commands,
    config: Res<MatchConfig>,
    mut selection: ResMut<Selection>,
) {
    let board = initial_board(&config);
    info!(
        "[GAME_INIT] New game: {:?}, {} | {:?} to move",
        config.mode,
        config.strength.label(),
        board.turn()
    );

    selection.clear();
    commands.insert_resource(board);
}

/// System that drops all per-game state
pub fn teardown_match(mut commands: Commands, mut selection: ResMut<Selection>) {
    commands.remove_resource::<BoardState>();
    commands.remove_resource::<SuggestedMove>();
    commands.remove_resource::<PendingEngineMove>();
    commands.remove_resource::<EngineStalled>();
    commands.remove_resource::<MatchOutcome>();
    selection.clear();
    info!("[GAME_INIT] Game state cleared");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ai::GameMode;

    #[test]
    fn test_two_player_starts_from_initial_position() {
        let board = initial_board(&MatchConfig::default());
        assert_eq!(board.ply(), 0);
        assert_eq!(board.turn(), Color::White);
    }

    #[test]
    fn test_human_black_gets_forced_opening() {
        let config = MatchConfig {
            mode: GameMode::HumanVsEngine {
                human: Color::Black,
            },
            ..default()
        };
        let board = initial_board(&config);
        assert_eq!(board.uci_moves(), [FORCED_OPENING]);
        assert_eq!(board.turn(), Color::Black);
    }

    #[test]
    fn test_human_white_moves_first() {
        let config = MatchConfig {
            mode: GameMode::HumanVsEngine {
                human: Color::White,
            },
            ..default()
        };
        assert_eq!(initial_board(&config).ply(), 0);
    }
}
