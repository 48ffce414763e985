//! Position integration

use crate::ecs::components::Transform;
use crate::ecs::{Frame, System, World};

/// Applies each entity's per-frame speed to its position
///
/// Speed is already scaled by the caller, so one run moves an entity by
/// exactly its speed. Entities at rest are left untouched.
#[derive(Debug, Default)]
pub struct MovementSystem;

impl MovementSystem {
    /// Create the system
    pub fn new() -> Self {
        MovementSystem
    }

    /// Integrate every moving transform once
    ///
    /// Returns the number of entities moved.
    pub fn integrate(&self, world: &mut World) -> usize {
        let mut moved = 0;
        for (_, entity) in world.iter_mut() {
            if let Some(transform) = entity.get_mut::<Transform>() {
                if transform.is_moving() {
                    transform.advance();
                    moved += 1;
                }
            }
        }
        moved
    }
}

impl System for MovementSystem {
    fn run(&mut self, world: &mut World, _frame: &mut Frame<'_>) {
        self.integrate(world);
    }

    fn name(&self) -> &str {
        "MovementSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::{Entity, EntityType};

    #[test]
    fn test_moving_entity_advances() {
        let mut world = World::new();
        let mut transform = Transform::new(0.0, 0.0, 0.0);
        transform.set_speed(0.02, -0.04);
        let id = world.spawn(Entity::new(EntityType::Unknown).with(transform));

        assert_eq!(MovementSystem::new().integrate(&mut world), 1);

        let moved = world.get(id).and_then(|e| e.get::<Transform>()).copied().unwrap();
        assert_eq!(moved.x(), 0.02);
        assert_eq!(moved.y(), -0.04);
    }

    #[test]
    fn test_resting_entity_stays_put() {
        let mut world = World::new();
        let id = world.spawn(Entity::new(EntityType::Wall).with(Transform::new(-5.0, 5.0, 0.0)));
        world.spawn(Entity::new(EntityType::Unknown));

        assert_eq!(MovementSystem::new().integrate(&mut world), 0);

        let transform = world.get(id).and_then(|e| e.get::<Transform>()).copied().unwrap();
        assert_eq!(transform, Transform::new(-5.0, 5.0, 0.0));
    }
}
