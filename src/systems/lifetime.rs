use bevy_ecs::{
    entity::Entity,
    query::With,
    system::{Commands, Query, Res},
};
use tracing::debug;

use crate::config::GameConfig;
use crate::systems::components::{Obstacle, Position, Renderable};

/// Despawns obstacles whose right edge has passed the left side of the viewport.
///
/// Obstacles only ever drift left, so once off that edge they can never be
/// seen or hit again.
pub fn cull_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    obstacles: Query<(Entity, &Position, &Renderable), With<Obstacle>>,
) {
    if !config.cull_offscreen {
        return;
    }

    for (entity, position, renderable) in obstacles.iter() {
        if position.0.x + renderable.size.x < 0.0 {
            debug!(?entity, x = position.0.x, "Culling off-screen obstacle");
            commands.entity(entity).despawn();
        }
    }
}
