//! Colour choice before an engine game

use crate::core::GameState;
use crate::game::ai::{GameMode, MatchConfig};
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use shakmaty::Color;

/// Plugin for the colour choice screen
pub struct ColorChoicePlugin;

impl Plugin for ColorChoicePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            color_choice_ui.run_if(in_state(GameState::AiColorChoice)),
        );
    }
}

/// Configure an engine game with the human on `human`
pub fn choose_color(config: &mut MatchConfig, human: Color) -> GameState {
    config.mode = GameMode::HumanVsEngine { human };
    GameState::InGame
}

fn color_choice_ui(
    mut contexts: EguiContexts,
    mut next_state: ResMut<NextState<GameState>>,
    mut config: ResMut<MatchConfig>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::CentralPanel::default()
        .frame(StyledPanel::page())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                Layout::section_space(ui);
                ui.heading(TextStyle::heading("Choose your color", TextSize::LG));
                Layout::section_space(ui);

                for (label, human) in [("White", Color::White), ("Black", Color::Black)] {
                    if StyledButton::menu(ui, label).clicked() {
                        info!("[COLOR_CHOICE] Human plays {:?}", human);
                        next_state.set(choose_color(&mut config, human));
                    }
                    Layout::item_space(ui);
                }

                Layout::item_space(ui);
                if StyledButton::menu(ui, "Back").clicked() {
                    next_state.set(GameState::MainMenu);
                }
            });
        });

    Ok(())
}
