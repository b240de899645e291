//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

pub mod collision;
pub mod components;
pub mod jump;
pub mod lifetime;
pub mod movement;
pub mod registry;
pub mod render;
pub mod spawn;
pub mod state;
pub mod viewport;

pub use self::collision::*;
pub use self::components::*;
pub use self::jump::*;
pub use self::lifetime::*;
pub use self::movement::*;
pub use self::registry::*;
pub use self::render::*;
pub use self::spawn::*;
pub use self::state::*;
pub use self::viewport::*;
