//! UI styling shared by the menu and dialog screens

pub mod colors;
pub mod components;
pub mod typography;

pub use colors::*;
pub use components::*;
pub use typography::*;
