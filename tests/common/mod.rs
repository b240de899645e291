#![allow(dead_code)]

use std::time::Duration;

use bevy_ecs::{
    entity::Entity,
    event::{EventRegistry, Events},
    world::World,
};
use glam::Vec2;
use runner::{
    config::GameConfig,
    events::{GameCommand, GameEvent},
    game::Game,
    systems::{
        AnimationClock, DeltaTime, DrawList, GameStage, GlobalState, GroundBundle, ObstacleBundle, ObstacleSprite,
        PlayerBundle, PlayerEntity, Position, SessionState, SpawnSequence, SpawnTimer, Viewport,
    },
    texture::{animated::SpriteAnimation, sprite::AtlasTile},
};

pub const WIDTH: f32 = 1280.0;
pub const HEIGHT: f32 = 720.0;

/// Resting y of the player in the default viewport.
pub const GROUND_LINE: f32 = HEIGHT - 150.0;

pub const ONE_MS: Duration = Duration::from_millis(1);

pub fn viewport() -> Viewport {
    Viewport::new(WIDTH, HEIGHT)
}

/// An animation whose frames are told apart by their x offset.
pub fn test_animation(frames: u16) -> SpriteAnimation {
    SpriteAnimation::new((0..frames).map(|i| AtlasTile::new(i * 10, 0, 10, 10))).expect("at least one frame")
}

/// A world with every resource the systems expect, but no entities.
pub fn create_test_world() -> World {
    let mut world = World::new();

    EventRegistry::register_event::<GameEvent>(&mut world);

    world.insert_resource(GameConfig::default());
    world.insert_resource(viewport());
    world.insert_resource(SessionState::default());
    world.insert_resource(GameStage::default());
    world.insert_resource(GlobalState::default());
    world.insert_resource(SpawnTimer::default());
    world.insert_resource(SpawnSequence::default());
    world.insert_resource(AnimationClock::default());
    world.insert_resource(DrawList::default());
    world.insert_resource(DeltaTime::from_millis(1));
    world.insert_resource(ObstacleSprite(test_animation(1)));

    world
}

pub fn spawn_test_ground(world: &mut World) -> Entity {
    let order = world.resource_mut::<SpawnSequence>().next_order();
    let bundle = GroundBundle::new(&GameConfig::default(), &viewport(), order);
    world.spawn(bundle).id()
}

/// Spawns the player on the ground line and registers it as the session's player.
pub fn spawn_test_player(world: &mut World) -> Entity {
    let order = world.resource_mut::<SpawnSequence>().next_order();
    let bundle = PlayerBundle::new(&GameConfig::default(), &viewport(), order, test_animation(4));
    let player = world.spawn(bundle).id();
    world.insert_resource(PlayerEntity(player));
    player
}

pub fn spawn_test_obstacle(world: &mut World, position: Vec2) -> Entity {
    let order = world.resource_mut::<SpawnSequence>().next_order();
    let mut bundle = ObstacleBundle::new(&GameConfig::default(), &viewport(), order, test_animation(1));
    bundle.position = Position(position);
    world.spawn(bundle).id()
}

pub fn send_command(world: &mut World, command: GameCommand) {
    world.resource_mut::<Events<GameEvent>>().send(command.into());
}

pub fn send_collision_event(world: &mut World, player: Entity, obstacle: Entity) {
    world
        .resource_mut::<Events<GameEvent>>()
        .send(GameEvent::Collision(player, obstacle));
}

/// Collision events raised since the last event update.
pub fn collisions(world: &World) -> Vec<GameEvent> {
    world
        .resource::<Events<GameEvent>>()
        .iter_current_update_events()
        .filter(|event| matches!(event, GameEvent::Collision(..)))
        .copied()
        .collect()
}

pub fn create_test_game() -> Game {
    Game::new(viewport()).expect("built-in atlas has every sprite")
}

pub fn create_test_game_with(config: GameConfig) -> Game {
    Game::with_config(config, viewport(), &runner::texture::sprite::SpriteAtlas::builtin())
        .expect("built-in atlas has every sprite")
}

/// A configuration in which obstacles never reach the player.
pub fn stationary_obstacles() -> GameConfig {
    GameConfig {
        obstacle_velocity: Vec2::ZERO,
        ..GameConfig::default()
    }
}

pub fn tick_n(game: &mut Game, ticks: usize, dt: Duration) {
    for _ in 0..ticks {
        game.tick(dt);
    }
}

pub fn player_position(game: &Game) -> Vec2 {
    game.world
        .get::<Position>(game.player())
        .expect("player has a position")
        .0
}
