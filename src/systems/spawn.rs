use std::time::Duration;

use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Commands, Res, ResMut};
use tracing::trace;

use crate::config::GameConfig;
use crate::systems::components::{DeltaTime, ObstacleBundle, SpawnSequence, Viewport};
use crate::texture::animated::SpriteAnimation;

/// Accumulates elapsed time and releases one spawn per whole interval.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimer {
    /// Time banked towards the next spawn.
    pub elapsed: Duration,
    /// Obstacles created this session.
    pub spawned: u64,
}

impl SpawnTimer {
    /// Adds `dt` to the bank and returns how many spawns are now due.
    ///
    /// The remainder carries over, so a spawn lands on every multiple of
    /// `interval` regardless of how time is sliced into ticks.
    pub fn tick(&mut self, dt: Duration, interval: Duration) -> u32 {
        if interval.is_zero() {
            return 0;
        }

        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= interval {
            self.elapsed -= interval;
            due += 1;
        }
        self.spawned += u64::from(due);
        due
    }
}

/// The sprite each new obstacle starts with.
#[derive(Resource, Debug, Clone)]
pub struct ObstacleSprite(pub SpriteAnimation);

/// Creates obstacles at the right edge of the viewport on a fixed period.
pub fn spawn_system(
    mut commands: Commands,
    dt: Res<DeltaTime>,
    config: Res<GameConfig>,
    viewport: Res<Viewport>,
    sprite: Res<ObstacleSprite>,
    mut timer: ResMut<SpawnTimer>,
    mut sequence: ResMut<SpawnSequence>,
) {
    let due = timer.tick(dt.0, config.spawn_interval);
    for _ in 0..due {
        let bundle = ObstacleBundle::new(&config, &viewport, sequence.next_order(), sprite.0.clone());
        trace!(x = bundle.position.0.x, y = bundle.position.0.y, "Spawning obstacle");
        commands.spawn(bundle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_carries_over() {
        let mut timer = SpawnTimer::default();
        let interval = Duration::from_millis(2000);

        assert_eq!(timer.tick(Duration::from_millis(1500), interval), 0);
        assert_eq!(timer.tick(Duration::from_millis(1500), interval), 1);
        assert_eq!(timer.elapsed, Duration::from_millis(1000));
        assert_eq!(timer.spawned, 1);
    }

    #[test]
    fn test_long_frame_catches_up() {
        let mut timer = SpawnTimer::default();
        assert_eq!(timer.tick(Duration::from_millis(4100), Duration::from_millis(2000)), 2);
        assert_eq!(timer.spawned, 2);
    }

    #[test]
    fn test_zero_interval_never_spawns() {
        let mut timer = SpawnTimer::default();
        assert_eq!(timer.tick(Duration::from_millis(10), Duration::ZERO), 0);
    }
}
