//! Error types for game module
//!
//! Board operations report failures here instead of panicking; callers log
//! them and leave the position untouched.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Move text was malformed or not legal in the current position
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },

    /// The engine answered for a position that is no longer current
    #[error("Stale engine reply for ply {requested} (board is at ply {current})")]
    StaleReply { requested: usize, current: usize },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
