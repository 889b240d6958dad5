//! Engine opponent configuration and runtime
//!
//! - [`MatchConfig`] - who controls each side, engine strength, hint toggle
//! - [`EngineStrength`] - slider level mapped to search depth and move time
//! - [`EngineSettings`] - how to launch the external UCI engine
//! - [`EngineRuntime`] - tokio runtime that drives engine processes
//!
//! The menus write [`MatchConfig`] before a game starts; it is read-only while
//! the board is on screen.
//!
//! | Level | Depth | Time/Move | Label      |
//! |-------|-------|-----------|------------|
//! | 0     | 1     | 1s        | ELO 1000   |
//! | 7     | 7     | 8s        | ELO 1700   |
//! | 14    | 14    | 15s       | ELO 2400   |

use std::io;
use std::time::Duration;

use bevy::prelude::*;
use shakmaty::Color;
use tokio::runtime::{Builder, Runtime};
use uci_client::{EngineConfig, SearchLimits};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Two humans sharing the mouse
    #[default]
    HumanVsHuman,
    /// The engine plays the colour the human did not pick
    HumanVsEngine { human: Color },
}

/// Settings for the current (or next) game
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub mode: GameMode,
    pub strength: EngineStrength,
    /// Ask the engine for a hint on every human turn
    pub show_suggestions: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsHuman,
            strength: EngineStrength::default(),
            show_suggestions: true,
        }
    }
}

impl MatchConfig {
    /// Colour controlled by the engine, if any
    pub fn engine_color(&self) -> Option<Color> {
        match self.mode {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsEngine { human } => Some(!human),
        }
    }

    pub fn is_engine_turn(&self, turn: Color) -> bool {
        self.engine_color() == Some(turn)
    }

    pub fn is_human_turn(&self, turn: Color) -> bool {
        !self.is_engine_turn(turn)
    }

    /// Whether hints should be requested for `turn`
    ///
    /// Hints need an engine, so they are never shown in two-player games.
    pub fn wants_suggestion(&self, turn: Color) -> bool {
        self.show_suggestions && self.engine_color().is_some() && self.is_human_turn(turn)
    }
}

/// Engine strength as picked on the menu slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct EngineStrength {
    level: u8,
}

impl Default for EngineStrength {
    fn default() -> Self {
        Self { level: 1 }
    }
}

impl EngineStrength {
    pub const MAX_LEVEL: u8 = 14;

    /// Clamps `level` into `0..=MAX_LEVEL`
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(Self::MAX_LEVEL),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Search depth; level 0 still searches one ply
    pub fn depth(&self) -> u32 {
        u32::from(self.level.max(1))
    }

    pub fn movetime(&self) -> Duration {
        Duration::from_secs(1 + u64::from(self.level))
    }

    /// Nominal rating shown next to the slider
    pub fn elo(&self) -> u32 {
        1000 + 100 * u32::from(self.level)
    }

    pub fn label(&self) -> String {
        format!("ELO Level: {}", self.elo())
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits::new(self.depth(), self.movetime())
    }
}

/// How to launch the external engine
#[derive(Resource, Debug, Clone, Default)]
pub struct EngineSettings {
    pub engine: EngineConfig,
}

/// Runtime for engine subprocess I/O
///
/// Engine exchanges run here, off the frame loop; systems only poll the
/// returned join handles.
#[derive(Resource)]
pub struct EngineRuntime {
    runtime: Runtime,
}

impl EngineRuntime {
    pub fn new() -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("uci-engine")
            .enable_all()
            .build()?;
        Ok(Self { runtime })
    }

    pub fn handle(&self) -> &tokio::runtime::Handle {
        self.runtime.handle()
    }
}
