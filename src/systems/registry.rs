//! Entity bookkeeping on top of the ECS `World`.
//!
//! Systems, bundles and restarts work on the `World` and its queries directly;
//! this module is a narrow, entity-at-a-time API for hosts and tests that
//! poke at single entities.
//! Absence of a component is never an error: lookups return `None` and the
//! caller treats the entity as "not applicable".

use bevy_ecs::component::{Component, Mutable};
use bevy_ecs::entity::Entity;
use bevy_ecs::world::{Mut, World};
use smallvec::SmallVec;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};

use crate::systems::components::{Position, Renderable, Velocity};

/// The data components an entity can carry. Marker components are not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr)]
pub enum ComponentKind {
    Position,
    Velocity,
    Renderable,
}

impl ComponentKind {
    fn present_on(self, world: &World, entity: Entity) -> bool {
        match self {
            ComponentKind::Position => world.get::<Position>(entity).is_some(),
            ComponentKind::Velocity => world.get::<Velocity>(entity).is_some(),
            ComponentKind::Renderable => world.get::<Renderable>(entity).is_some(),
        }
    }
}

pub trait EntityRegistry {
    /// Creates an entity with no components.
    fn create_entity(&mut self) -> Entity;

    /// Attaches `component`, replacing any existing one of the same kind.
    ///
    /// Returns `false` if the entity does not exist.
    fn add_component<C: Component>(&mut self, entity: Entity, component: C) -> bool;

    fn get_component<C: Component>(&self, entity: Entity) -> Option<&C>;

    fn get_component_mut<C: Component<Mutability = Mutable>>(&mut self, entity: Entity) -> Option<Mut<'_, C>>;

    /// Detaches and returns the component, if the entity had one.
    fn remove_component<C: Component>(&mut self, entity: Entity) -> Option<C>;

    /// Removes the entity and all of its components.
    fn destroy_entity(&mut self, entity: Entity) -> bool;

    /// Lists the data components present on the entity, in declaration order.
    fn component_kinds(&self, entity: Entity) -> SmallVec<[ComponentKind; ComponentKind::COUNT]>;
}

impl EntityRegistry for World {
    fn create_entity(&mut self) -> Entity {
        self.spawn_empty().id()
    }

    fn add_component<C: Component>(&mut self, entity: Entity, component: C) -> bool {
        match self.get_entity_mut(entity) {
            Ok(mut entity) => {
                entity.insert(component);
                true
            }
            Err(_) => false,
        }
    }

    fn get_component<C: Component>(&self, entity: Entity) -> Option<&C> {
        self.get::<C>(entity)
    }

    fn get_component_mut<C: Component<Mutability = Mutable>>(&mut self, entity: Entity) -> Option<Mut<'_, C>> {
        self.get_mut::<C>(entity)
    }

    fn remove_component<C: Component>(&mut self, entity: Entity) -> Option<C> {
        self.get_entity_mut(entity).ok()?.take::<C>()
    }

    fn destroy_entity(&mut self, entity: Entity) -> bool {
        self.despawn(entity)
    }

    fn component_kinds(&self, entity: Entity) -> SmallVec<[ComponentKind; ComponentKind::COUNT]> {
        ComponentKind::iter().filter(|kind| kind.present_on(self, entity)).collect()
    }
}
