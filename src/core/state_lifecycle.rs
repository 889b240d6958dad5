//! State lifecycle logging and entity cleanup
//!
//! - Every scene entry is logged
//! - Entities tagged [`ScreenScoped`] are despawned when their scene is left

use super::{GameState, InGameplay, ScreenScoped};
use bevy::prelude::*;

/// Log when entering any game state
pub fn log_state_entry(state: Res<State<GameState>>) {
    info!("[STATE_LIFECYCLE] ENTER: {:?}", state.get());
}

/// Create a cleanup system for a specific scoped state
///
/// The target is baked into each system, so it can be scheduled on whichever
/// transition really leaves the scene.
macro_rules! create_cleanup_system {
    ($name:ident, $state_ty:ty, $state:expr) => {
        pub fn $name(
            query: Query<(Entity, Option<&Name>, &ScreenScoped<$state_ty>)>,
            mut commands: Commands,
        ) {
            let target_state = $state;
            let mut despawned_count = 0;

            for (entity, name, marker) in query.iter() {
                if marker.0 == target_state {
                    let entity_name = name.map(|n| n.as_str()).unwrap_or("unnamed");
                    debug!(
                        "[STATE_LIFECYCLE] Despawning entity {:?}: {} (marked for {:?})",
                        entity, entity_name, target_state
                    );
                    commands.entity(entity).despawn();
                    despawned_count += 1;
                }
            }

            if despawned_count > 0 {
                info!(
                    "[STATE_LIFECYCLE] Despawned {} entities on exit from {:?}",
                    despawned_count, target_state
                );
            }
        }
    };
}

create_cleanup_system!(cleanup_gameplay, InGameplay, InGameplay);
