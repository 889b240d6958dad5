//! Scene plugins
//!
//! - `main_menu` - MainMenuPlugin: mode buttons, engine level slider
//! - `color_choice` - ColorChoicePlugin: pick a side against the engine
//! - `game_over` - GameOverPlugin: result dialog over the final board
//!
//! The InGame scene is handled by the GamePlugin.

pub mod color_choice;
pub mod game_over;
pub mod main_menu;

pub use color_choice::ColorChoicePlugin;
pub use game_over::GameOverPlugin;
pub use main_menu::MainMenuPlugin;

use bevy::prelude::*;

/// All menu and dialog scenes
pub struct ScenesPlugin;

impl Plugin for ScenesPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((MainMenuPlugin, ColorChoicePlugin, GameOverPlugin));
    }
}
