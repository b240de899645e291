use bevy_ecs::prelude::*;

/// A discrete request from the host (keyboard, UI button, test harness).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Jump,
    TogglePause,
    Restart,
    Quit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    /// The player (first) overlapped an obstacle (second).
    Collision(Entity, Entity),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
