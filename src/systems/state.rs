use bevy_ecs::{
    entity::Entity,
    event::EventReader,
    query::{With, Without},
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::events::{GameCommand, GameEvent};
use crate::systems::components::{GlobalState, Obstacle, PlayerEntity, Position, Renderable, Viewport};
use crate::systems::jump::JumpState;
use crate::systems::render::AnimationClock;
use crate::systems::spawn::SpawnTimer;

/// A resource to track the overall stage of the game from a high-level perspective.
#[derive(Resource, Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum GameStage {
    /// The simulation advances every tick.
    #[default]
    Playing,
    /// Frozen by the player; the scene is still drawn.
    Paused,
    /// The player hit an obstacle. Only a restart leaves this stage.
    GameOver { final_score: u64 },
}

/// Everything a restart must put back to its initial value in one step.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct SessionState {
    /// Ticks survived; grows by one per simulated tick.
    pub score: u64,
    pub jump: JumpState,
}

/// Run condition for systems that advance the simulation.
pub fn is_playing(stage: Res<GameStage>) -> bool {
    matches!(*stage, GameStage::Playing)
}

pub fn score_system(mut session: ResMut<SessionState>) {
    session.score += 1;
}

/// Applies jump, pause and quit commands.
pub fn control_system(
    mut events: EventReader<GameEvent>,
    config: Res<GameConfig>,
    mut session: ResMut<SessionState>,
    mut stage: ResMut<GameStage>,
    mut state: ResMut<GlobalState>,
) {
    for event in events.read() {
        let GameEvent::Command(command) = event else {
            continue;
        };

        match command {
            GameCommand::Jump => {
                if *stage != GameStage::Playing {
                    continue;
                }
                if session.jump.launch(config.launch_velocity) {
                    debug!("Player jumped");
                }
            }
            GameCommand::TogglePause => {
                *stage = match *stage {
                    GameStage::Playing => {
                        info!("Game paused");
                        GameStage::Paused
                    }
                    GameStage::Paused => {
                        info!("Game resumed");
                        GameStage::Playing
                    }
                    over @ GameStage::GameOver { .. } => over,
                };
            }
            GameCommand::Quit => {
                info!("Exit requested");
                state.exit = true;
            }
            GameCommand::Restart => {}
        }
    }
}

/// Turns a collision into the game-over stage.
pub fn stage_system(mut events: EventReader<GameEvent>, session: Res<SessionState>, mut stage: ResMut<GameStage>) {
    for event in events.read() {
        if let GameEvent::Collision(_, obstacle) = event {
            if matches!(*stage, GameStage::GameOver { .. }) {
                continue;
            }
            info!(score = session.score, ?obstacle, "Game over");
            *stage = GameStage::GameOver {
                final_score: session.score,
            };
        }
    }
}

/// Resets the whole session when a restart is requested.
///
/// Obstacles are despawned, the player returns to its start position and first
/// animation frame, and score, jump state, spawn timer and animation clock all
/// go back to their defaults before the stage returns to `Playing`.
#[allow(clippy::too_many_arguments)]
pub fn restart_system(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    config: Res<GameConfig>,
    viewport: Res<Viewport>,
    player: Res<PlayerEntity>,
    mut players: Query<(&mut Position, &mut Renderable), Without<Obstacle>>,
    obstacles: Query<Entity, With<Obstacle>>,
    mut session: ResMut<SessionState>,
    mut stage: ResMut<GameStage>,
    mut timer: ResMut<SpawnTimer>,
    mut clock: ResMut<AnimationClock>,
) {
    let mut requested = false;
    for event in events.read() {
        if matches!(event, GameEvent::Command(GameCommand::Restart)) {
            requested = true;
        }
    }
    if !requested {
        return;
    }

    let mut despawned = 0usize;
    for obstacle in obstacles.iter() {
        commands.entity(obstacle).despawn();
        despawned += 1;
    }

    if let Ok((mut position, mut renderable)) = players.get_mut(player.0) {
        position.0 = config.player_start(&viewport);
        if let Some(animation) = renderable.animation_mut() {
            animation.reset();
        }
    }

    *session = SessionState::default();
    *timer = SpawnTimer::default();
    *clock = AnimationClock::default();
    *stage = GameStage::Playing;

    info!(despawned, "Session restarted");
}
