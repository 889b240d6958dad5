use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use uciboard::core::{CorePlugin, WindowConfig};
use uciboard::game::GamePlugin;
use uciboard::input::InputPlugin;
use uciboard::rendering::RenderingPlugin;
use uciboard::states::ScenesPlugin;

fn main() {
    let window_config = WindowConfig::default();

    App::new()
        // ========================================
        // 1. Core Bevy Plugins
        // ========================================
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window_config.to_window()),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,uciboard=debug,uci_client=debug".to_string(),
                    ..default()
                }),
        )
        .insert_resource(window_config.winit_settings())
        .insert_resource(window_config)
        // ========================================
        // 2. Core Infrastructure and UI Framework
        // ========================================
        .add_plugins(CorePlugin)
        .add_plugins(EguiPlugin::default())
        // ========================================
        // 3. Game Logic, Input and Rendering
        // ========================================
        .add_plugins(GamePlugin)
        .add_plugins(InputPlugin)
        .add_plugins(RenderingPlugin)
        // ========================================
        // 4. Scene Plugins
        // ========================================
        .add_plugins(ScenesPlugin)
        .run();
}
