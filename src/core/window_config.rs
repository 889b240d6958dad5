//! Window configuration resource
//!
//! The board is drawn 1:1 into the window, so the window is exactly
//! eight squares wide and tall and cannot be resized.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};
use bevy::winit::{UpdateMode, WinitSettings};
use std::time::Duration;

/// Edge length of one board square in logical pixels
pub const SQUARE_SIZE: u32 = 80;

/// Edge length of the whole board (and window) in logical pixels
pub const BOARD_SIZE: u32 = SQUARE_SIZE * 8;

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, Reflect)]
#[reflect(Resource)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Frames per second while the window has focus
    pub frame_rate: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Chess Game".to_string(),
            width: BOARD_SIZE,
            height: BOARD_SIZE,
            frame_rate: 30,
        }
    }
}

impl WindowConfig {
    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    /// Time between frames at the configured frame rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }

    /// Fixed frame cadence while focused, low-power redraws otherwise
    ///
    /// The loop keeps ticking without input so finished engine searches are
    /// picked up promptly.
    pub fn winit_settings(&self) -> WinitSettings {
        WinitSettings {
            focused_mode: UpdateMode::reactive(self.frame_interval()),
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_millis(250)),
        }
    }
}
