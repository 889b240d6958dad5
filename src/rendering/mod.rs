//! Rendering module - 2D board drawn with sprites, meshes and text
//!
//! - `board` - redraw pass, [`BoardPalette`] and status line
//! - `pieces` - [`PieceSprites`] image cache
//! - `utils` - world-space square geometry and draw layers
//!
//! The camera is a plain [`Camera2d`] at the origin; one world unit is one
//! logical pixel, so the board fills the fixed-size window exactly.

pub mod board;
pub mod pieces;
pub mod utils;

pub use board::*;
pub use pieces::*;
pub use utils::*;

use crate::game::system_sets::GameSystems;
use bevy::prelude::*;

/// Rendering plugin
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_camera, setup_board_palette, load_piece_sprites),
        )
        .add_systems(Update, redraw_board.in_set(GameSystems::Visual));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Board Camera"), Camera2d));
}
