//! Scene state machine
//!
//! # State Flow
//!
//! ```text
//! [MainMenu] ──AI Battle──▶ [AiColorChoice] ──White/Black──▶ [InGame]
//!     │                          │                              │
//!     └────────2 Player──────────┼─────────────────────────────▶│
//!                                ▼                              ▼
//!                           [MainMenu] ◀──Back to Menu──── [GameOver]
//! ```
//!
//! Each scene registers its own systems with `run_if(in_state(..))`, so only
//! one scene's loop is active per frame. Transitions are explicit
//! `NextState::set` calls from the scene that is being left.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

/// Primary application state
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, States, Reflect)]
pub enum GameState {
    /// Mode selection and engine level slider (starting state)
    #[default]
    MainMenu,

    /// Human picks a color before an engine game
    AiColorChoice,

    /// A game is being played
    InGame,

    /// The game ended; result dialog over the final position
    GameOver,
}

/// Component marking entities to be despawned when the state `T` is exited
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenScoped<T>(pub T)
where
    T: States + Copy;

/// Computed state active while a board is on screen
///
/// Covers both the game itself and the game-over dialog, which is drawn over
/// the final position.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct InGameplay;

impl ComputedStates for InGameplay {
    type SourceStates = GameState;

    fn compute(sources: GameState) -> Option<Self> {
        match sources {
            GameState::InGame | GameState::GameOver => Some(Self),
            _ => None,
        }
    }
}

/// Validate if a state transition is allowed
fn is_valid_state_transition(from: GameState, to: GameState) -> bool {
    match (from, to) {
        (GameState::MainMenu, GameState::AiColorChoice) => true,
        (GameState::MainMenu, GameState::InGame) => true,

        (GameState::AiColorChoice, GameState::InGame) => true,
        (GameState::AiColorChoice, GameState::MainMenu) => true,

        (GameState::InGame, GameState::GameOver) => true,

        (GameState::GameOver, GameState::MainMenu) => true,

        (from, to) if from == to => true,

        _ => false,
    }
}

/// System to validate and log state transitions
pub fn validate_and_log_state_transitions(
    mut transition_events: MessageReader<StateTransitionEvent<GameState>>,
) {
    for event in transition_events.read() {
        match (event.exited, event.entered) {
            (Some(exited), Some(entered)) => {
                if is_valid_state_transition(exited, entered) {
                    info!("[TRANSITION] {:?} -> {:?}", exited, entered);
                } else {
                    error!(
                        "[TRANSITION] INVALID: {:?} -> {:?} (state may be inconsistent)",
                        exited, entered
                    );
                }
            }
            (Some(exited), None) => {
                debug!("[TRANSITION] Exit: {:?}", exited);
            }
            (None, Some(entered)) => {
                debug!("[TRANSITION] Enter: {:?}", entered);
            }
            (None, None) => {}
        }
    }
}
