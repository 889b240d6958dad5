//! One-shot UCI engine queries
//!
//! Every request launches a fresh engine process, asks it for a single best
//! move and tears it down again. Nothing is kept between requests.
//!
//! ```rust,ignore
//! let config = EngineConfig::default();
//! let position = UciPosition::with_moves(["e2e4"]);
//! let limits = SearchLimits::new(4, Duration::from_secs(2));
//!
//! if let Some(reply) = uci_client::best_move(&config, &position, &limits).await {
//!     println!("engine plays {reply}");
//! }
//! ```

use std::path::PathBuf;
use std::time::Duration;

pub mod error;
pub mod process;
pub mod protocol;

pub use error::{EngineError, EngineResult};
pub use process::EngineProcess;
pub use protocol::{parse_bestmove, BestMove, SearchLimits, UciPosition};

/// How to start the engine and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Executable path; a bare name is looked up on `PATH`
    pub program: PathBuf,
    /// Extra command-line arguments
    pub args: Vec<String>,
    /// Budget for process start-up and the `uci`/`isready` handshake
    pub handshake_timeout: Duration,
    /// Slack allowed on top of the requested move time
    pub grace: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("stockfish"),
            args: Vec::new(),
            handshake_timeout: Duration::from_secs(5),
            grace: Duration::from_secs(2),
        }
    }
}

impl EngineConfig {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    /// Wall-clock budget for a whole request under `limits`
    pub fn budget(&self, limits: &SearchLimits) -> Duration {
        self.handshake_timeout + limits.movetime.unwrap_or_default() + self.grace
    }
}

/// Launch an engine, search `position`, and shut the engine down
///
/// `Ok(None)` means the engine reported that there is no legal move.
pub async fn query_best_move(
    config: &EngineConfig,
    position: &UciPosition,
    limits: &SearchLimits,
) -> EngineResult<Option<String>> {
    let budget = config.budget(limits);

    let exchange = async {
        let mut engine = EngineProcess::launch(&config.program, &config.args).await?;
        let reply = engine.search(position, limits).await?;
        if let Err(e) = engine.shutdown().await {
            log::debug!("[UCI] shutdown after search failed: {}", e);
        }
        Ok(reply)
    };

    match tokio::time::timeout(budget, exchange).await {
        Ok(reply) => reply.map(BestMove::into_option),
        Err(_) => Err(EngineError::Timeout(budget)),
    }
}

/// Same as [`query_best_move`] but every failure collapses into `None`
///
/// Failures are logged; callers only learn that no move is available.
pub async fn best_move(
    config: &EngineConfig,
    position: &UciPosition,
    limits: &SearchLimits,
) -> Option<String> {
    match query_best_move(config, position, limits).await {
        Ok(Some(reply)) => Some(reply),
        Ok(None) => {
            log::warn!("[UCI] engine reported no legal move");
            None
        }
        Err(e) => {
            log::error!("[UCI] engine request failed: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program_is_stockfish_on_path() {
        let config = EngineConfig::default();
        assert_eq!(config.program, PathBuf::from("stockfish"));
        assert!(config.args.is_empty());
    }

    #[test]
    fn test_budget_adds_movetime() {
        let config = EngineConfig {
            handshake_timeout: Duration::from_secs(1),
            grace: Duration::from_millis(500),
            ..EngineConfig::default()
        };
        let limits = SearchLimits::new(3, Duration::from_secs(2));
        assert_eq!(config.budget(&limits), Duration::from_millis(3500));

        let depth_only = SearchLimits {
            depth: Some(3),
            movetime: None,
        };
        assert_eq!(config.budget(&depth_only), Duration::from_millis(1500));
    }
}
