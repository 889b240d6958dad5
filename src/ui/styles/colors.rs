//! Color palette for the menus
//!
//! Menus are drawn on a plain white page with grey buttons and black text;
//! the game-over dialog sits on a translucent dark overlay above the board.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    /// Menu page background
    pub const BG_PAGE: egui::Color32 = egui::Color32::WHITE;

    /// Button fill
    pub const BUTTON: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);

    /// Button outline
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(120, 120, 120);

    /// Dialog background over the board
    pub const BG_OVERLAY: egui::Color32 =
        egui::Color32::from_rgba_premultiplied(250, 250, 250, 235);

    /// Slider handle and other accents
    pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);

    /// Headings and button labels
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::BLACK;

    /// Captions
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(80, 80, 80);
}
