use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res};
use glam::Vec2;
use tracing::debug;

use crate::events::GameEvent;
use crate::systems::components::{Obstacle, PlayerEntity, Position, Renderable};

/// Strict axis-aligned box overlap. Boxes that only touch along an edge do not
/// overlap.
pub fn overlaps(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Tests the player's box against every obstacle.
///
/// Emits a single `GameEvent::Collision` for the first overlap found; the
/// stage system turns it into the game-over transition. A player without a
/// position or renderable is simply never in collision.
pub fn collision_system(
    player: Res<PlayerEntity>,
    boxes: Query<(&Position, &Renderable)>,
    obstacles: Query<(Entity, &Position, &Renderable), With<Obstacle>>,
    mut events: EventWriter<GameEvent>,
) {
    let Ok((player_pos, player_sprite)) = boxes.get(player.0) else {
        return;
    };

    let hit = obstacles
        .iter()
        .filter(|(entity, _, _)| *entity != player.0)
        .find(|(_, position, sprite)| overlaps(player_pos.0, player_sprite.size, position.0, sprite.size));

    if let Some((obstacle, position, _)) = hit {
        debug!(?obstacle, x = position.0.x, y = position.0.y, "Player hit obstacle");
        events.write(GameEvent::Collision(player.0, obstacle));
    }
}
