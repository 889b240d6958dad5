//! Core plugin
//!
//! Sets up the scene state machine, its lifecycle logging and the window
//! configuration resource. Add it before the game and scene plugins; they all
//! schedule systems against [`GameState`].

use bevy::prelude::*;

use super::state_lifecycle::{cleanup_gameplay, log_state_entry};
use super::states::validate_and_log_state_transitions;
use super::{GameState, InGameplay, WindowConfig};

/// Core plugin for the chessboard application
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WindowConfig>()
            .register_type::<WindowConfig>();

        app.init_state::<GameState>()
            .add_computed_state::<InGameplay>();

        for state in [
            GameState::MainMenu,
            GameState::AiColorChoice,
            GameState::InGame,
            GameState::GameOver,
        ] {
            app.add_systems(OnEnter(state), log_state_entry);
        }

        // Gameplay is only ever left for the main menu
        app.add_systems(OnEnter(GameState::MainMenu), cleanup_gameplay)
            .add_systems(Update, validate_and_log_state_transitions);
    }
}
