//! External engine opponent
//!
//! The engine is a separate UCI program driven through [`uci_client`]. Each
//! search runs on the [`EngineRuntime`] so the frame loop never waits on it.
//!
//! # Flow
//!
//! 1. `request_engine_moves` spawns a search when the engine is to move, or a
//!    hint search on a human turn when hints are enabled
//! 2. The task handle is stored in [`PendingEngineMove`], tagged with its
//!    purpose and the ply it was started for
//! 3. `poll_engine_task` picks up the finished result, drops it if the board
//!    has moved on, and otherwise applies the reply or stores the hint
//!
//! Engine moves go through [`BoardState::apply_uci`](crate::game::rules::BoardState::apply_uci),
//! so they are held to the same legality check as human moves.

pub mod resource;
pub mod systems;

pub use resource::{EngineRuntime, EngineSettings, EngineStrength, GameMode, MatchConfig};
pub use systems::{EnginePlugin, EnginePurpose, EngineStalled, PendingEngineMove};
