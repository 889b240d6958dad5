//! Core module - scene state machine and application infrastructure
//!
//! - [`GameState`] - the four mutually exclusive scenes
//! - [`InGameplay`] - computed state active while a board is on screen
//! - [`ScreenScoped`] - marker for entities that live only inside one scene
//! - [`WindowConfig`] - fixed-size window and frame cadence
//! - [`CorePlugin`] - registers all of the above

pub mod plugin;
pub mod state_lifecycle;
pub mod states;
pub mod window_config;

pub use plugin::CorePlugin;
pub use states::*;
pub use window_config::{WindowConfig, BOARD_SIZE, SQUARE_SIZE};
