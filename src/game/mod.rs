//! Chess game logic module
//!
//! # Module Organization
//!
//! - `rules` - [`BoardState`](rules::BoardState), the adapter over `shakmaty`
//! - `resources` - selection, engine hint and match result
//! - `ai` - external UCI engine opponent and hint provider
//! - `systems` - setup, terminal detection and click handling
//! - `system_sets` - per-frame ordering
//! - `plugin` - [`GamePlugin`] that registers everything
//!
//! # Turn Flow
//!
//! In a two-player game both colours are driven by clicks. Against the engine,
//! clicks are only accepted on the human's turn and the engine's reply is
//! applied by the polling system once its search finishes.

pub mod ai;
pub mod error;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;

pub use plugin::GamePlugin;
