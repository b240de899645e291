//! This module contains the main game logic and state.

include!(concat!(env!("OUT_DIR"), "/atlas_data.rs"));

use std::time::Duration;

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::world::World;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent};
use crate::formatter;
use crate::systems::{
    animation_system, collision_system, control_system, cull_system, is_playing, jump_system, movement_system,
    render_system, restart_system, score_system, spawn_system, stage_system, viewport_system, AnimationClock, DeltaTime,
    DrawList, GameStage, GlobalState, GroundBundle, Obstacle, ObstacleSprite, PlayerBundle, PlayerEntity, SessionState,
    SpawnSequence, SpawnTimer, Viewport,
};
use crate::texture::sprite::SpriteAtlas;
use crate::texture::sprites::{animation_from, GameSprite};

/// System sets, run in declaration order every tick.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum TickSet {
    /// Host commands (jump, pause, quit) and viewport changes
    Input,
    /// The simulation proper; only while playing
    Update,
    /// Game over and restart; a restart leaves the session fresh for drawing
    Respond,
    /// Builds the frame; always runs so a frozen scene stays visible
    Draw,
    /// Sprite frame cadence; only while playing
    Animate,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// The `World` holds the entities, the session state and the viewport; the
/// `Schedule` fixes the order systems run in. One call to [`Game::tick`] is one
/// logical tick: score, movement, jump, collision, then drawing.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Starts a session with the default configuration and the built-in atlas.
    pub fn new(viewport: Viewport) -> GameResult<Game> {
        Self::with_config(GameConfig::default(), viewport, &SpriteAtlas::builtin())
    }

    /// Starts a session: spawns the ground and the player, registers events and
    /// resources, and builds the tick schedule.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if a sprite the session needs is missing from `atlas`,
    /// or if `config` has a zero frame delay, spawn interval or tick bound.
    pub fn with_config(config: GameConfig, viewport: Viewport, atlas: &SpriteAtlas) -> GameResult<Game> {
        info!(width = viewport.width, height = viewport.height, "Starting game initialization");

        if config.frame_delay == 0 {
            return Err(GameError::InvalidState("animation frame delay must be at least one pass".into()));
        }
        if config.spawn_interval.is_zero() {
            return Err(GameError::InvalidState("obstacle spawn interval must be non-zero".into()));
        }
        if config.max_tick.is_zero() {
            return Err(GameError::InvalidState("maximum tick length must be non-zero".into()));
        }

        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameEvent>(&mut world);

        debug!("Resolving sprite animations");
        let player_animation = animation_from(atlas, &GameSprite::DINO_RUN)?;
        // Only the first tree is ever used for obstacles
        let obstacle_animation = animation_from(atlas, &GameSprite::TREES[..1])?;

        let mut sequence = SpawnSequence::default();
        world.spawn(GroundBundle::new(&config, &viewport, sequence.next_order()));
        let player = world
            .spawn(PlayerBundle::new(&config, &viewport, sequence.next_order(), player_animation))
            .id();

        world.insert_resource(PlayerEntity(player));
        world.insert_resource(ObstacleSprite(obstacle_animation));
        world.insert_resource(GlobalState::default());
        world.insert_resource(SessionState::default());
        world.insert_resource(GameStage::default());
        world.insert_resource(SpawnTimer::default());
        world.insert_resource(sequence);
        world.insert_resource(AnimationClock::default());
        world.insert_resource(DrawList::default());
        world.insert_resource(DeltaTime::default());
        world.insert_resource(viewport);
        world.insert_resource(config);

        Self::configure_schedule(&mut schedule);

        info!(?player, "Game initialized");
        Ok(Game { world, schedule })
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule
            .add_systems((
                (control_system, viewport_system).chain().in_set(TickSet::Input),
                (
                    spawn_system,
                    score_system,
                    movement_system,
                    jump_system,
                    collision_system,
                    cull_system,
                )
                    .chain()
                    .in_set(TickSet::Update),
                (stage_system, restart_system).chain().in_set(TickSet::Respond),
                render_system.in_set(TickSet::Draw),
                animation_system.in_set(TickSet::Animate),
            ))
            .configure_sets(
                (
                    TickSet::Input,
                    TickSet::Update.run_if(is_playing),
                    TickSet::Respond,
                    TickSet::Draw,
                    TickSet::Animate.run_if(is_playing),
                )
                    .chain(),
            );
    }

    /// Queues a host command for the next tick.
    pub fn send(&mut self, command: GameCommand) {
        debug!(?command, "Queued command");
        self.world.resource_mut::<Events<GameEvent>>().send(command.into());
    }

    /// Replaces the viewport; systems pick the new size up on the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        *self.world.resource_mut::<Viewport>() = Viewport::new(width, height);
    }

    /// Runs one logical tick covering `dt` of wall-clock time.
    ///
    /// `dt` is capped at [`GameConfig::max_tick`]; the time a stalled host lost
    /// is dropped rather than spawned all at once on the same spot.
    ///
    /// Returns true if the game should exit.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let max_tick = self.world.resource::<GameConfig>().max_tick;
        if dt > max_tick {
            debug!(?dt, ?max_tick, "Tick exceeds the maximum length, dropping the excess");
        }
        self.world.insert_resource(DeltaTime(dt.min(max_tick)));

        self.schedule.run(&mut self.world);
        self.world.resource_mut::<Events<GameEvent>>().update();
        formatter::increment_tick();

        self.world.resource::<GlobalState>().exit
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }

    pub fn session(&self) -> SessionState {
        *self.world.resource::<SessionState>()
    }

    pub fn score(&self) -> u64 {
        self.session().score
    }

    pub fn player(&self) -> Entity {
        self.world.resource::<PlayerEntity>().0
    }

    /// The frame produced by the last tick.
    pub fn draw_list(&self) -> &DrawList {
        self.world.resource::<DrawList>()
    }

    /// Live obstacles currently in the world.
    pub fn obstacle_count(&mut self) -> usize {
        self.world.query_filtered::<(), With<Obstacle>>().iter(&self.world).count()
    }

    /// Obstacles created since the session (re)started, including culled ones.
    pub fn spawned(&self) -> u64 {
        self.world.resource::<SpawnTimer>().spawned
    }
}
