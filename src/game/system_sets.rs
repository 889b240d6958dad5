//! System organization using SystemSets
//!
//! Systems run in this order each frame while a game is in progress:
//! 1. **Validation** - detect checkmate and draws, end the game
//! 2. **Engine** - start engine searches, apply finished ones
//! 3. **Pointer** - turn mouse presses into board clicks
//! 4. **Input** - select pieces and play human moves
//! 5. **Visual** - rebuild the board picture if anything changed
//!
//! Terminal detection runs first so no move is ever accepted on a finished
//! board.

use bevy::prelude::*;

/// System execution order for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Checkmate, stalemate and draw detection
    Validation,

    /// Engine request and polling
    Engine,

    /// Raw pointer handling
    Pointer,

    /// Click-to-move handling
    Input,

    /// Board redraw
    Visual,
}
