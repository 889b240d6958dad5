//! Styled UI component builders

use super::colors::UiColors;
use super::typography::{TextSize, TextStyle};
use bevy_egui::egui;

/// Helper functions for creating styled buttons
pub struct StyledButton;

impl StyledButton {
    /// Full-width menu button
    pub fn menu(ui: &mut egui::Ui, text: impl Into<String>) -> egui::Response {
        let button = egui::Button::new(TextStyle::button(text, TextSize::MD))
            .fill(UiColors::BUTTON)
            .stroke(egui::Stroke::new(1.0, UiColors::BORDER))
            .min_size(egui::vec2(200.0, 50.0));

        ui.add(button)
    }
}

/// Helper functions for creating styled panels
pub struct StyledPanel;

impl StyledPanel {
    /// Whole-window menu page
    pub fn page() -> egui::Frame {
        egui::Frame {
            fill: UiColors::BG_PAGE,
            inner_margin: egui::Margin::same(20),
            ..Default::default()
        }
    }

    /// Modal dialog drawn over the board
    pub fn dialog() -> egui::Frame {
        egui::Frame {
            fill: UiColors::BG_OVERLAY,
            stroke: egui::Stroke::new(2.0, UiColors::BORDER),
            inner_margin: egui::Margin::same(24),
            corner_radius: egui::CornerRadius::same(8),
            shadow: egui::epaint::Shadow {
                offset: [0, 4],
                blur: 12,
                spread: 0,
                color: egui::Color32::from_black_alpha(100),
            },
            ..Default::default()
        }
    }
}

/// Helper functions for spacing and layout
pub struct Layout;

impl Layout {
    /// Standard spacing between sections
    pub const SECTION_SPACING: f32 = 40.0;

    /// Standard spacing between items
    pub const ITEM_SPACING: f32 = 20.0;

    pub fn section_space(ui: &mut egui::Ui) {
        ui.add_space(Self::SECTION_SPACING);
    }

    pub fn item_space(ui: &mut egui::Ui) {
        ui.add_space(Self::ITEM_SPACING);
    }
}
