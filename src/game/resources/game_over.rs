//! Result of a finished game
//!
//! Inserted by the terminal check right before the switch to
//! [`GameState::GameOver`](crate::core::GameState::GameOver) and read by the
//! game-over dialog. Removed again when the board scenes are left.

use bevy::prelude::*;

use crate::game::rules::GameOutcome;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct MatchOutcome(pub GameOutcome);

impl MatchOutcome {
    pub fn message(&self) -> &'static str {
        self.0.message()
    }
}
