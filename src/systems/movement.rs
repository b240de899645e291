use bevy_ecs::system::Query;

use crate::systems::components::{Position, Velocity};

/// Integrates velocity into position for every entity that has both.
///
/// No bounds are enforced here; entities leaving the viewport are the culling
/// system's concern.
pub fn movement_system(mut entities: Query<(&mut Position, &Velocity)>) {
    for (mut position, velocity) in entities.iter_mut() {
        position.0 += velocity.0;
    }
}
