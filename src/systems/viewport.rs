use bevy_ecs::{
    change_detection::DetectChanges,
    query::{With, Without},
    system::{Query, Res},
};
use tracing::debug;

use crate::config::GameConfig;
use crate::systems::components::{Ground, PlayerEntity, Position, Renderable, Viewport};
use crate::systems::state::SessionState;

/// Keeps the ground strip glued to the bottom of the viewport after a resize,
/// and a grounded player standing on it.
///
/// An airborne player is left alone; the jump system lands it on the new
/// ground line.
pub fn viewport_system(
    viewport: Res<Viewport>,
    config: Res<GameConfig>,
    session: Res<SessionState>,
    player: Res<PlayerEntity>,
    mut ground: Query<(&mut Position, &mut Renderable), With<Ground>>,
    mut players: Query<&mut Position, Without<Ground>>,
) {
    if !viewport.is_changed() {
        return;
    }

    debug!(width = viewport.width, height = viewport.height, "Viewport changed");

    for (mut position, mut renderable) in ground.iter_mut() {
        position.0.y = config.ground_top(&viewport);
        renderable.size.x = viewport.width;
    }

    if session.jump.is_airborne() {
        return;
    }

    if let Ok(mut position) = players.get_mut(player.0) {
        position.0.y = config.ground_line(&viewport);
    }
}
