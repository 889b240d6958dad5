//! Game over dialog
//!
//! Drawn over the final position. Only "Back to Menu" leaves the scene.

use crate::core::GameState;
use crate::game::resources::MatchOutcome;
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

/// Plugin for game over screen
pub struct GameOverPlugin;

impl Plugin for GameOverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            game_over_ui.run_if(in_state(GameState::GameOver)),
        );
    }
}

/// Game over UI
fn game_over_ui(
    mut contexts: EguiContexts,
    mut next_state: ResMut<NextState<GameState>>,
    outcome: Option<Res<MatchOutcome>>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let message = outcome.map_or("Game over", |o| o.message());

    egui::Window::new("Game Over")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .frame(StyledPanel::dialog())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(TextStyle::heading(message, TextSize::LG));
                Layout::item_space(ui);

                if StyledButton::menu(ui, "Back to Menu").clicked() {
                    info!("[GAME_OVER] Returning to main menu");
                    next_state.set(GameState::MainMenu);
                }
            });
        });

    Ok(())
}
