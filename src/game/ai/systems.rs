use super::resource::{EngineRuntime, EngineSettings, MatchConfig};
use crate::game::error::GameError;
use crate::game::system_sets::GameSystems;
use crate::game::resources::{Selection, SuggestedMove};
use crate::game::rules::BoardState;
use bevy::prelude::*;
use bevy::tasks::block_on;
use futures_lite::future;
use tokio::task::JoinHandle;
use uci_client::{SearchLimits, UciPosition};

/// Why an engine search was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePurpose {
    /// The engine's own move
    Reply,
    /// A hint for the human side
    Suggestion,
}

/// Resource holding the in-flight engine search
///
/// Dropping it aborts the task; the engine process is killed along with it.
#[derive(Resource, Debug)]
pub struct PendingEngineMove {
    pub purpose: EnginePurpose,
    /// Board ply the search was started for
    pub ply: usize,
    handle: JoinHandle<Option<String>>,
}

impl PendingEngineMove {
    pub fn is_reply_for(&self, ply: usize) -> bool {
        self.purpose == EnginePurpose::Reply && self.ply == ply
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for PendingEngineMove {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// The engine failed to produce a move at `ply`
///
/// Requests are not repeated for that ply; the game waits on the engine's turn.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStalled {
    pub ply: usize,
}

/// Plugin for engine systems
pub struct EnginePlugin;

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MatchConfig>()
            .init_resource::<EngineSettings>();

        match EngineRuntime::new() {
            Ok(runtime) => {
                app.insert_resource(runtime);
            }
            Err(e) => error!("[ENGINE] Failed to start engine runtime: {}", e),
        }

        app.add_systems(
            Update,
            (request_engine_moves, poll_engine_task)
                .chain()
                .in_set(GameSystems::Engine),
        );
    }
}

/// Start a search for the current position on the engine runtime
pub fn spawn_engine_search(
    runtime: &EngineRuntime,
    settings: &EngineSettings,
    board: &BoardState,
    limits: SearchLimits,
    purpose: EnginePurpose,
) -> PendingEngineMove {
    let config = settings.engine.clone();
    let position = UciPosition::with_moves(board.uci_moves());
    let ply = board.ply();

    info!(
        "[ENGINE] {:?} search spawned at ply {} ({})",
        purpose,
        ply,
        limits.go_command()
    );

    let handle = runtime
        .handle()
        .spawn(async move { uci_client::best_move(&config, &position, &limits).await });

    PendingEngineMove {
        purpose,
        ply,
        handle,
    }
}

/// System that starts engine searches for replies and hints
#[allow(clippy::too_many_arguments)]
pub fn request_engine_moves(
    mut commands: Commands,
    board: Res<BoardState>,
    config: Res<MatchConfig>,
    settings: Res<EngineSettings>,
    runtime: Option<Res<EngineRuntime>>,
    pending: Option<Res<PendingEngineMove>>,
    suggestion: Option<Res<SuggestedMove>>,
    stalled: Option<Res<EngineStalled>>,
) {
    if board.is_game_over() {
        return;
    }

    let ply = board.ply();
    let turn = board.turn();

    let purpose = if config.is_engine_turn(turn) {
        if pending.as_ref().is_some_and(|p| p.is_reply_for(ply))
            || stalled.is_some_and(|s| s.ply == ply)
        {
            return;
        }
        if let Some(p) = pending.as_ref() {
            debug!(
                "[ENGINE] Cancelling {:?} search from ply {} for engine reply",
                p.purpose, p.ply
            );
        }
        EnginePurpose::Reply
    } else if config.wants_suggestion(turn) {
        if pending.is_some_and(|p| p.ply == ply) || suggestion.is_some_and(|s| s.ply == ply) {
            return;
        }
        EnginePurpose::Suggestion
    } else {
        return;
    };

    let Some(runtime) = runtime else {
        error!("[ENGINE] No engine runtime available, cannot search");
        if purpose == EnginePurpose::Reply {
            commands.insert_resource(EngineStalled { ply });
        } else {
            commands.insert_resource(SuggestedMove { ply, squares: None });
        }
        return;
    };

    // Replaces (and thereby aborts) any older search
    commands.insert_resource(spawn_engine_search(
        &runtime,
        &settings,
        &board,
        config.strength.limits(),
        purpose,
    ));
}

/// System that polls the engine search and applies its result
pub fn poll_engine_task(
    mut commands: Commands,
    pending: Option<ResMut<PendingEngineMove>>,
    mut board: ResMut<BoardState>,
    mut selection: ResMut<Selection>,
) {
    let Some(mut pending) = pending else {
        return;
    };

    if !pending.is_finished() {
        return;
    }

    let reply = match block_on(future::poll_once(&mut pending.handle)) {
        Some(Ok(reply)) => reply,
        Some(Err(e)) => {
            error!("[ENGINE] Search task failed: {}", e);
            None
        }
        None => {
            warn!("[ENGINE] Task reported finished but result not available");
            return;
        }
    };

    let purpose = pending.purpose;
    let requested = pending.ply;
    commands.remove_resource::<PendingEngineMove>();

    if requested != board.ply() {
        debug!(
            "[ENGINE] {}",
            GameError::StaleReply {
                requested,
                current: board.ply(),
            }
        );
        return;
    }

    match purpose {
        EnginePurpose::Reply => {
            let Some(uci) = reply else {
                warn!("[ENGINE] No move from engine at ply {}; waiting", requested);
                commands.insert_resource(EngineStalled { ply: requested });
                return;
            };

            match board.apply_uci(&uci) {
                Ok(()) => {
                    info!("[ENGINE] Engine plays {} (ply {})", uci, requested);
                    selection.clear();
                    commands.remove_resource::<SuggestedMove>();
                }
                Err(e) => {
                    error!("[ENGINE] Rejected engine move: {}", e);
                    commands.insert_resource(EngineStalled { ply: requested });
                }
            }
        }
        EnginePurpose::Suggestion => {
            let squares = reply.and_then(|uci| match board.uci_squares(&uci) {
                Ok(squares) => Some(squares),
                Err(e) => {
                    warn!("[ENGINE] Ignoring hint: {}", e);
                    None
                }
            });
            if let Some((from, to)) = squares {
                debug!("[ENGINE] Hint for ply {}: {} -> {}", requested, from, to);
            }
            commands.insert_resource(SuggestedMove {
                ply: requested,
                squares,
            });
        }
    }
}
