//! Game plugin - chess rules, turn sequencing and the engine opponent
//!
//! # Plugin Dependencies
//!
//! This plugin depends on:
//! - [`crate::core::CorePlugin`] - Must be added first for state management
//!
//! # System Organization
//!
//! While [`GameState::InGame`] is active the sets in [`GameSystems`] run in
//! order, so each frame first checks for a finished game, then lets the engine
//! act, and only then handles human clicks.
//!
//! The position is created `OnEnter(GameState::InGame)` and removed
//! `OnEnter(GameState::MainMenu)`, so it survives into the game-over dialog.
//! `InGame -> GameOver` recomputes [`crate::core::InGameplay`] to the same
//! value, which still fires its `OnExit`; teardown must not hang off that.

use super::ai::EnginePlugin;
use super::resources::{MatchOutcome, Selection};
use super::system_sets::GameSystems;
use super::systems::*;
use crate::core::GameState;
use crate::input::BoardClicked;
use bevy::prelude::*;

/// Game plugin
///
/// Add after [`crate::core::CorePlugin`] and before the rendering and scene
/// plugins.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Selection>()
            .register_type::<MatchOutcome>()
            .add_message::<BoardClicked>();

        app.add_plugins(EnginePlugin);

        // Validation → Engine → Pointer → Input → Visual
        app.configure_sets(
            Update,
            (
                GameSystems::Validation,
                GameSystems::Engine,
                GameSystems::Pointer,
                GameSystems::Input,
                GameSystems::Visual,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(OnEnter(GameState::InGame), setup_match)
            .add_systems(OnEnter(GameState::MainMenu), teardown_match)
            .add_systems(
                Update,
                (
                    check_game_over.in_set(GameSystems::Validation),
                    handle_board_clicks.in_set(GameSystems::Input),
                ),
            );
    }
}
