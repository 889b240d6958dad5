//! Error types for engine communication

use std::time::Duration;
use thiserror::Error;

/// Everything that can go wrong while talking to an engine process
#[derive(Error, Debug)]
pub enum EngineError {
    /// The executable could not be started
    #[error("failed to launch engine '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the engine pipes failed
    #[error("engine I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine closed its stdout before answering
    #[error("engine closed its output stream")]
    Closed,

    /// The whole exchange did not finish within its budget
    #[error("engine did not answer within {0:?}")]
    Timeout(Duration),

    /// The engine sent a line we could not make sense of
    #[error("unexpected engine reply: {0}")]
    Protocol(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
