//! Input module - mouse clicks to board squares
//!
//! - `pointer` - cursor-to-square mapping and the [`BoardClicked`] message
//!
//! Clicks are published as messages so the move logic can be driven without a
//! window (see the integration tests).

pub mod pointer;

pub use pointer::*;

use crate::core::GameState;
use crate::game::system_sets::GameSystems;
use bevy::prelude::*;

/// Registers the click message and the pointer system
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<BoardClicked>().add_systems(
            Update,
            board_click_system
                .in_set(GameSystems::Pointer)
                .run_if(in_state(GameState::InGame)),
        );
    }
}
