use std::time::Duration;

use bevy_ecs::{bundle::Bundle, component::Component, entity::Entity, resource::Resource};
use glam::Vec2;

use crate::config::GameConfig;
use crate::constants::layer;
use crate::texture::{animated::SpriteAnimation, color::Color};

/// World coordinates of an entity's top-left corner. Origin is the top-left of
/// the viewport and y grows downward.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Displacement applied to `Position` every tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// How an entity looks: a flat rectangle or a frame of a sprite animation.
#[derive(Debug, Clone, PartialEq)]
pub enum Appearance {
    Solid(Color),
    Animated(SpriteAnimation),
}

/// A component for entities that are drawn, with a layer for ordering.
///
/// `size` is both the on-screen size and the collision box.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Renderable {
    pub size: Vec2,
    pub layer: u8,
    pub appearance: Appearance,
}

impl Renderable {
    pub fn solid(color: Color, size: Vec2, layer: u8) -> Self {
        Self {
            size,
            layer,
            appearance: Appearance::Solid(color),
        }
    }

    pub fn animated(animation: SpriteAnimation, size: Vec2, layer: u8) -> Self {
        Self {
            size,
            layer,
            appearance: Appearance::Animated(animation),
        }
    }

    pub fn animation(&self) -> Option<&SpriteAnimation> {
        match &self.appearance {
            Appearance::Animated(animation) => Some(animation),
            Appearance::Solid(_) => None,
        }
    }

    pub fn animation_mut(&mut self) -> Option<&mut SpriteAnimation> {
        match &mut self.appearance {
            Appearance::Animated(animation) => Some(animation),
            Appearance::Solid(_) => None,
        }
    }
}

/// Position of an entity in creation order. Draw order within a layer follows it.
///
/// Entity ids are recycled after a despawn, so they cannot stand in for this.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpawnOrder(pub u64);

/// Hands out increasing `SpawnOrder`s. Never reset, not even on restart.
#[derive(Resource, Debug, Default)]
pub struct SpawnSequence {
    next: u64,
}

impl SpawnSequence {
    pub fn next_order(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next);
        self.next += 1;
        order
    }
}

/// A tag component for the static strip the player runs on.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Ground;

/// A tag component for spawned obstacles. These are the only entities the
/// collision system tests the player against.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Obstacle;

#[derive(Bundle)]
pub struct PlayerBundle {
    pub order: SpawnOrder,
    pub position: Position,
    pub velocity: Velocity,
    pub sprite: Renderable,
}

impl PlayerBundle {
    /// The player standing on the ground line, not moving on its own.
    pub fn new(config: &GameConfig, viewport: &Viewport, order: SpawnOrder, animation: SpriteAnimation) -> Self {
        Self {
            order,
            position: Position(config.player_start(viewport)),
            velocity: Velocity::default(),
            sprite: Renderable::animated(animation, config.player_size, layer::ACTORS),
        }
    }
}

#[derive(Bundle)]
pub struct GroundBundle {
    pub ground: Ground,
    pub order: SpawnOrder,
    pub position: Position,
    pub sprite: Renderable,
}

impl GroundBundle {
    pub fn new(config: &GameConfig, viewport: &Viewport, order: SpawnOrder) -> Self {
        Self {
            ground: Ground,
            order,
            position: Position(Vec2::new(0.0, config.ground_top(viewport))),
            sprite: Renderable::solid(
                Color::BROWN,
                Vec2::new(viewport.width, config.ground_height),
                layer::BACKGROUND,
            ),
        }
    }
}

#[derive(Bundle)]
pub struct ObstacleBundle {
    pub obstacle: Obstacle,
    pub order: SpawnOrder,
    pub position: Position,
    pub velocity: Velocity,
    pub sprite: Renderable,
}

impl ObstacleBundle {
    /// An obstacle entering at the right edge, drifting left at a constant rate.
    pub fn new(config: &GameConfig, viewport: &Viewport, order: SpawnOrder, animation: SpriteAnimation) -> Self {
        Self {
            obstacle: Obstacle,
            order,
            position: Position(config.obstacle_spawn(viewport)),
            velocity: Velocity(config.obstacle_velocity),
            sprite: Renderable::animated(animation, config.obstacle_size, layer::ACTORS),
        }
    }
}

/// The one entity that is "the player" for the current session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerEntity(pub Entity);

#[derive(Resource, Debug, Default)]
pub struct GlobalState {
    pub exit: bool,
}

/// Wall-clock time covered by the current tick.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeltaTime(pub Duration);

impl DeltaTime {
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }
}

/// Size of the drawable area, in pixels. Replaced by the host on resize and
/// read fresh by every system that needs it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
