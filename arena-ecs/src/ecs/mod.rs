//! Entity Component System (ECS) core implementation
//!
//! This module provides the foundational ECS architecture including:
//! - Entities with one optional slot per component kind
//! - An insertion-ordered world addressed by stable handles
//! - A staged system scheduler running the frame pipeline
//! - Optional parallel collision search via Rayon

mod component;
pub mod components;
mod entity;
pub mod scheduler;
mod system;
pub mod systems;
mod world;

pub use component::{Component, ComponentKind, ComponentSet};
pub use entity::{Entity, EntityId, EntityType, PlayerSlot};
pub use system::{Frame, System};
pub use world::World;

#[cfg(test)]
mod tests {
    use super::*;
    use components::Transform;

    #[test]
    fn test_world_creation() {
        let world = World::new();
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_entity_creation() {
        let mut world = World::new();
        let entity = world.spawn(Entity::new(EntityType::Wall).with(Transform::new(0.0, 0.0, 0.0)));
        assert_eq!(world.entity_count(), 1);
        assert!(world.contains(entity));
    }
}
