//! Terminal position detection

use crate::core::GameState;
use crate::game::resources::MatchOutcome;
use crate::game::rules::BoardState;
use bevy::prelude::*;

/// System that ends the game once the position is terminal
///
/// Inserts [`MatchOutcome`] and requests the switch to `GameOver`.
pub fn check_game_over(
    mut commands: Commands,
    board: Res<BoardState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(outcome) = board.result() else {
        return;
    };

    info!(
        "[GAME] Game over after {} plies: {}",
        board.ply(),
        outcome.message()
    );
    commands.insert_resource(MatchOutcome(outcome));
    next_state.set(GameState::GameOver);
}
