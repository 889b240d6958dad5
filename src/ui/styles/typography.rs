//! Text sizes and styled text helpers

use super::colors::UiColors;
use bevy_egui::egui;

/// Text size presets
pub struct TextSize;

impl TextSize {
    /// Screen title
    pub const LG: f32 = 36.0;

    /// Button labels and results
    pub const MD: f32 = 24.0;

    /// Body text
    pub const BODY: f32 = 16.0;
}

/// Helper functions for creating styled text
pub struct TextStyle;

impl TextStyle {
    pub fn heading(text: impl Into<String>, size: f32) -> egui::RichText {
        egui::RichText::new(text)
            .size(size)
            .color(UiColors::TEXT_PRIMARY)
            .strong()
    }

    pub fn body(text: impl Into<String>) -> egui::RichText {
        egui::RichText::new(text)
            .size(TextSize::BODY)
            .color(UiColors::TEXT_SECONDARY)
    }

    pub fn button(text: impl Into<String>, size: f32) -> egui::RichText {
        egui::RichText::new(text)
            .size(size)
            .color(UiColors::TEXT_PRIMARY)
    }
}
