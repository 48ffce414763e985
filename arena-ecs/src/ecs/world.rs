//! World management
//!
//! The World is the central container for all ECS data. It owns every
//! entity of one screen, keeps them in insertion order and hands out
//! [`EntityId`] handles that stay valid until the entity is removed.

use crate::ecs::{Entity, EntityId, EntityType};

/// The main ECS world container
///
/// Entities are stored densely in insertion order. Ids grow monotonically,
/// so handle lookup is a binary search and iteration order doubles as the
/// deterministic evaluation order for systems.
pub struct World {
    next_entity_id: u64,
    entities: Vec<(EntityId, Entity)>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        World {
            next_entity_id: 0,
            entities: Vec::new(),
        }
    }

    /// Add an entity and return its handle
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = EntityId::new(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push((id, entity));
        id
    }

    /// Remove an entity, returning it if it was present
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.index_of(id)?;
        Some(self.entities.remove(index).1)
    }

    /// Check if an entity is present
    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    /// Get an entity by handle
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        let index = self.index_of(id)?;
        Some(&self.entities[index].1)
    }

    /// Get a mutable entity by handle
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let index = self.index_of(id)?;
        Some(&mut self.entities[index].1)
    }

    /// Get the number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Check whether the world holds no entity
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove every entity
    ///
    /// Ids keep growing so stale handles never alias new entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Iterate over entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(id, entity)| (*id, entity))
    }

    /// Iterate mutably over entities in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Entity)> {
        self.entities.iter_mut().map(|(id, entity)| (*id, entity))
    }

    /// Entities in insertion order, as a slice-like view for index-based passes
    pub fn entities(&self) -> impl ExactSizeIterator<Item = &Entity> {
        self.entities.iter().map(|(_, entity)| entity)
    }

    /// Entity at a dense position
    pub fn entity_at(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index).map(|(_, entity)| entity)
    }

    /// Mutable entity at a dense position
    pub fn entity_at_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.entities.get_mut(index).map(|(_, entity)| entity)
    }

    /// First entity of the given type
    pub fn find_by_type(&self, entity_type: EntityType) -> Option<(EntityId, &Entity)> {
        self.iter()
            .find(|(_, entity)| entity.entity_type() == entity_type)
    }

    /// Mutable first entity of the given type
    pub fn find_by_type_mut(
        &mut self,
        entity_type: EntityType,
    ) -> Option<(EntityId, &mut Entity)> {
        self.iter_mut()
            .find(|(_, entity)| entity.entity_type() == entity_type)
    }

    /// Count entities of the given type
    pub fn count_of_type(&self, entity_type: EntityType) -> usize {
        self.entities()
            .filter(|entity| entity.entity_type() == entity_type)
            .count()
    }

    /// Keep only the entities for which the predicate holds
    ///
    /// Returns the number of entities removed. Order of the survivors is
    /// preserved.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(EntityId, &Entity) -> bool,
    {
        let before = self.entities.len();
        self.entities.retain(|(id, entity)| keep(*id, entity));
        before - self.entities.len()
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities
            .binary_search_by_key(&id, |(entity_id, _)| *entity_id)
            .ok()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::Transform;

    #[test]
    fn test_world_entity_lifecycle() {
        let mut world = World::new();

        let e1 = world.spawn(Entity::new(EntityType::Wall));
        let e2 = world.spawn(Entity::new(EntityType::Box));

        assert_eq!(world.entity_count(), 2);
        assert!(world.contains(e1));
        assert!(world.contains(e2));

        assert!(world.despawn(e1).is_some());
        assert_eq!(world.entity_count(), 1);
        assert!(!world.contains(e1));
        assert!(world.contains(e2));
        assert!(world.despawn(e1).is_none());
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut world = World::new();

        let e1 = world.spawn(Entity::new(EntityType::Bomb));
        world.despawn(e1);
        let e2 = world.spawn(Entity::new(EntityType::Bomb));

        assert_ne!(e1, e2);
        assert!(world.get(e1).is_none());
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut world = World::new();
        let ids: Vec<EntityId> = (0..5)
            .map(|i| world.spawn(Entity::new(EntityType::Box).with(Transform::new(i as f32, 0.0, 0.0))))
            .collect();

        world.despawn(ids[1]);
        world.despawn(ids[3]);

        let xs: Vec<f32> = world
            .entities()
            .filter_map(|entity| entity.get::<Transform>().map(|t| t.x()))
            .collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0]);
        assert!(world.get(ids[4]).is_some());
    }

    #[test]
    fn test_retain_reports_removed() {
        let mut world = World::new();
        world.spawn(Entity::new(EntityType::Wall));
        world.spawn(Entity::new(EntityType::Box));
        world.spawn(Entity::new(EntityType::Box));

        let removed = world.retain(|_, entity| entity.entity_type() != EntityType::Box);
        assert_eq!(removed, 2);
        assert_eq!(world.entity_count(), 1);
    }

    #[test]
    fn test_find_by_type() {
        let mut world = World::new();
        world.spawn(Entity::new(EntityType::Wall));
        let bomb = world.spawn(Entity::new(EntityType::Bomb));

        assert_eq!(world.find_by_type(EntityType::Bomb).map(|(id, _)| id), Some(bomb));
        assert!(world.find_by_type(EntityType::Bonus).is_none());
        assert_eq!(world.count_of_type(EntityType::Wall), 1);
    }

    #[test]
    fn test_world_clear() {
        let mut world = World::new();
        world.spawn(Entity::new(EntityType::Wall));
        world.spawn(Entity::new(EntityType::Wall));

        assert_eq!(world.entity_count(), 2);
        world.clear();
        assert_eq!(world.entity_count(), 0);
        assert!(world.is_empty());
    }
}
