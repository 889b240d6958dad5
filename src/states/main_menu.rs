//! Main menu plugin
//!
//! Choose between a game against the engine ("AI Battle") and a hot-seat game
//! ("2 Player"). The slider sets the engine strength for the next game and the
//! checkbox toggles engine hints.

use crate::core::{GameState, WindowConfig};
use crate::game::ai::{EngineStrength, GameMode, MatchConfig};
use crate::ui::styles::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

/// Plugin for main menu state
pub struct MainMenuPlugin;

impl Plugin for MainMenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            EguiPrimaryContextPass,
            main_menu_ui.run_if(in_state(GameState::MainMenu)),
        );
    }
}

/// Configure a hot-seat game; returns the scene to switch to
pub fn start_two_player(config: &mut MatchConfig) -> GameState {
    config.mode = GameMode::HumanVsHuman;
    GameState::InGame
}

/// Main menu UI
fn main_menu_ui(
    mut contexts: EguiContexts,
    mut next_state: ResMut<NextState<GameState>>,
    mut config: ResMut<MatchConfig>,
    window: Res<WindowConfig>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::CentralPanel::default()
        .frame(StyledPanel::page())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                Layout::section_space(ui);
                ui.heading(TextStyle::heading(window.title.as_str(), TextSize::LG));
                Layout::section_space(ui);

                if StyledButton::menu(ui, "AI Battle").clicked() {
                    info!("[MAIN_MENU] AI Battle selected");
                    next_state.set(GameState::AiColorChoice);
                }

                Layout::item_space(ui);

                if StyledButton::menu(ui, "2 Player").clicked() {
                    info!("[MAIN_MENU] 2 Player selected");
                    next_state.set(start_two_player(&mut config));
                }

                Layout::section_space(ui);

                let mut level = config.strength.level();
                let slider = egui::Slider::new(&mut level, 0..=EngineStrength::MAX_LEVEL)
                    .show_value(false);
                ui.visuals_mut().selection.bg_fill = UiColors::ACCENT;
                if ui.add(slider).changed() {
                    config.strength = EngineStrength::new(level);
                    debug!("[MAIN_MENU] {}", config.strength.label());
                }
                ui.label(TextStyle::body(config.strength.label()));

                Layout::item_space(ui);

                let mut show = config.show_suggestions;
                if ui
                    .checkbox(&mut show, TextStyle::body("Show engine hints"))
                    .changed()
                {
                    config.show_suggestions = show;
                }
            });
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Color;

    #[test]
    fn test_two_player_resets_mode() {
        let mut config = MatchConfig {
            mode: GameMode::HumanVsEngine {
                human: Color::White,
            },
            ..default()
        };
        assert_eq!(start_two_player(&mut config), GameState::InGame);
        assert_eq!(config.mode, GameMode::HumanVsHuman);
    }
}
