//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::Vec2;

/// Target duration of one iteration of the desktop game loop.
pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Longest stretch of time a single tick may cover. Longer stalls are dropped.
pub const MAX_TICK: Duration = Duration::from_millis(250);

/// The initial window size, in pixels.
pub const WINDOW_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

/// Physics of the single jump arc, in pixels per tick.
pub mod jump {
    /// Added to the vertical velocity every tick while airborne.
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity applied at take-off. Negative is upward.
    pub const LAUNCH_VELOCITY: f32 = -10.0;
    /// Distance from the bottom of the viewport to the player's resting y.
    pub const PLAYER_FOOT_OFFSET: f32 = 150.0;
}

/// Sizes and starting values for the entities in a session.
pub mod entity {
    use glam::Vec2;

    pub const PLAYER_START_X: f32 = 500.0;
    pub const PLAYER_SIZE: Vec2 = Vec2::new(50.0, 50.0);

    pub const GROUND_HEIGHT: f32 = 100.0;

    pub const OBSTACLE_SIZE: Vec2 = Vec2::new(30.0, 50.0);
    /// Constant drift of every obstacle, in pixels per tick.
    pub const OBSTACLE_VELOCITY: Vec2 = Vec2::new(-5.0, 0.0);
}

/// Obstacle spawning cadence.
pub mod spawn {
    use std::time::Duration;

    pub const INTERVAL: Duration = Duration::from_millis(2000);
}

/// Sprite animation cadence.
pub mod animation {
    /// Number of draw passes between two sprite frame advances.
    pub const FRAME_DELAY: u32 = 5;
}

/// Draw layers. Lower layers are drawn first.
pub mod layer {
    pub const BACKGROUND: u8 = 0;
    pub const ACTORS: u8 = 1;
}

/// Sprite sheet the atlas coordinates refer to, relative to the working directory.
pub const SPRITE_SHEET_PATH: &str = "assets/atlas.png";
