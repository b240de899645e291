//! Tunable gameplay parameters.
//!
//! Everything defaults to the values in [`crate::constants`]; tests and hosts
//! can override individual fields before building a [`crate::game::Game`].

use std::time::Duration;

use bevy_ecs::resource::Resource;
use glam::Vec2;

use crate::constants::{self, animation, entity, jump, spawn};
use crate::systems::components::Viewport;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub gravity: f32,
    pub launch_velocity: f32,
    pub player_foot_offset: f32,
    pub player_start_x: f32,
    pub player_size: Vec2,
    pub ground_height: f32,
    pub obstacle_size: Vec2,
    pub obstacle_velocity: Vec2,
    pub spawn_interval: Duration,
    /// Draw passes between two sprite frame advances.
    pub frame_delay: u32,
    /// Despawn obstacles once they have fully left the viewport.
    pub cull_offscreen: bool,
    /// Upper bound on the time one tick may cover.
    pub max_tick: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: jump::GRAVITY,
            launch_velocity: jump::LAUNCH_VELOCITY,
            player_foot_offset: jump::PLAYER_FOOT_OFFSET,
            player_start_x: entity::PLAYER_START_X,
            player_size: entity::PLAYER_SIZE,
            ground_height: entity::GROUND_HEIGHT,
            obstacle_size: entity::OBSTACLE_SIZE,
            obstacle_velocity: entity::OBSTACLE_VELOCITY,
            spawn_interval: spawn::INTERVAL,
            frame_delay: animation::FRAME_DELAY,
            cull_offscreen: true,
            max_tick: constants::MAX_TICK,
        }
    }
}

impl GameConfig {
    /// The y coordinate the player rests at; landing clamps to it.
    pub fn ground_line(&self, viewport: &Viewport) -> f32 {
        viewport.height - self.player_foot_offset
    }

    pub fn player_start(&self, viewport: &Viewport) -> Vec2 {
        Vec2::new(self.player_start_x, self.ground_line(viewport))
    }

    /// Top of the ground strip.
    pub fn ground_top(&self, viewport: &Viewport) -> f32 {
        viewport.height - self.ground_height
    }

    /// Obstacles enter at the right edge, standing on the same line as the player.
    pub fn obstacle_spawn(&self, viewport: &Viewport) -> Vec2 {
        Vec2::new(viewport.width, self.ground_line(viewport))
    }
}
