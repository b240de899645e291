use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::trace;

use crate::config::GameConfig;
use crate::systems::components::{PlayerEntity, Position, Velocity, Viewport};
use crate::systems::state::SessionState;

/// The player's vertical state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JumpState {
    #[default]
    Grounded,
    /// In the air with the given vertical velocity (negative is upward).
    Airborne { velocity: f32 },
}

impl JumpState {
    pub fn is_airborne(&self) -> bool {
        matches!(self, JumpState::Airborne { .. })
    }

    pub fn vertical_velocity(&self) -> f32 {
        match self {
            JumpState::Grounded => 0.0,
            JumpState::Airborne { velocity } => *velocity,
        }
    }

    /// Takes off with `launch_velocity` if grounded.
    ///
    /// Returns `false`, leaving the state untouched, when already airborne.
    pub fn launch(&mut self, launch_velocity: f32) -> bool {
        match self {
            JumpState::Grounded => {
                *self = JumpState::Airborne {
                    velocity: launch_velocity,
                };
                true
            }
            JumpState::Airborne { .. } => false,
        }
    }

    /// Advances the arc by one tick, moving `y` and applying gravity.
    ///
    /// Reaching or passing `ground_y` clamps `y` to it exactly and lands.
    /// Returns `true` on the tick the player lands.
    pub fn step(&mut self, y: &mut f32, gravity: f32, ground_y: f32) -> bool {
        let JumpState::Airborne { velocity } = self else {
            return false;
        };

        *y += *velocity;
        *velocity += gravity;

        if *y >= ground_y {
            *y = ground_y;
            *self = JumpState::Grounded;
            return true;
        }

        false
    }
}

/// Moves the player along the jump arc and detects landing.
///
/// The ground line is recomputed from the viewport every tick so a resize
/// mid-jump lands on the new line.
pub fn jump_system(
    config: Res<GameConfig>,
    viewport: Res<Viewport>,
    player: Res<PlayerEntity>,
    mut session: ResMut<SessionState>,
    mut players: Query<&mut Position, With<Velocity>>,
) {
    if !session.jump.is_airborne() {
        return;
    }

    let Ok(mut position) = players.get_mut(player.0) else {
        return;
    };

    let ground_y = config.ground_line(&viewport);
    if session.jump.step(&mut position.0.y, config.gravity, ground_y) {
        trace!(y = position.0.y, "Player landed");
    }
}
