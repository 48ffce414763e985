// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Entity management
//!
//! An entity is a coarse type tag plus the components it owns. Entities live
//! in a [`World`](crate::ecs::World), which hands out [`EntityId`] handles.

use crate::ecs::component::{Component, ComponentKind, ComponentSet};
use std::fmt;

/// Unique identifier for an entity within its world
///
/// Identifiers are issued in increasing order and never reused, so comparing
/// two ids also compares their insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Create a new EntityId from a raw u64 value
    pub fn new(id: u64) -> Self {
        EntityId(id)
    }

    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// One of the four controller seats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerSlot {
    /// Seat 1, blue
    One,
    /// Seat 2, red
    Two,
    /// Seat 3, green
    Three,
    /// Seat 4, yellow
    Four,
}

impl PlayerSlot {
    /// Every seat in index order
    pub const ALL: [PlayerSlot; 4] = [
        PlayerSlot::One,
        PlayerSlot::Two,
        PlayerSlot::Three,
        PlayerSlot::Four,
    ];

    /// Zero-based seat index
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
            PlayerSlot::Three => 2,
            PlayerSlot::Four => 3,
        }
    }

    /// Seat for a zero-based index
    pub fn from_index(index: usize) -> Option<Self> {
        PlayerSlot::ALL.get(index).copied()
    }

    /// Map and save-file symbol (`'1'` to `'4'`)
    pub fn symbol(self) -> char {
        match self {
            PlayerSlot::One => '1',
            PlayerSlot::Two => '2',
            PlayerSlot::Three => '3',
            PlayerSlot::Four => '4',
        }
    }

    /// Parse a map or save-file symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        PlayerSlot::ALL.into_iter().find(|slot| slot.symbol() == symbol)
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.index() + 1)
    }
}

/// Coarse category of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// A player avatar
    Player(PlayerSlot),
    /// Indestructible wall
    Wall,
    /// Destructible box
    Box,
    /// Placed bomb
    Bomb,
    /// Collectible power-up
    Bonus,
    /// Anything else (floor, sound entities)
    Unknown,
}

impl EntityType {
    /// Player seat, if this is a player
    pub fn player_slot(self) -> Option<PlayerSlot> {
        match self {
            EntityType::Player(slot) => Some(slot),
            _ => None,
        }
    }

    /// Check whether this is a player
    pub fn is_player(self) -> bool {
        self.player_slot().is_some()
    }
}

/// A game object: a type tag and the components it owns
///
/// # Examples
///
/// ```
/// use arena_ecs::ecs::{ComponentKind, Entity, EntityType};
/// use arena_ecs::ecs::components::{Collide, Transform};
///
/// let wall = Entity::new(EntityType::Wall)
///     .with(Transform::new(-5.0, 5.0, 0.0))
///     .with(Collide::new());
/// assert!(wall.has_component(ComponentKind::Collide));
/// assert_eq!(wall.get::<Transform>().map(|t| t.x()), Some(-5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    entity_type: EntityType,
    components: ComponentSet,
}

impl Entity {
    /// Create an entity with no components
    pub fn new(entity_type: EntityType) -> Self {
        Entity {
            entity_type,
            components: ComponentSet::new(),
        }
    }

    /// Builder form of [`add_component`](Self::add_component)
    pub fn with<T: Component>(mut self, component: T) -> Self {
        self.add_component(component);
        self
    }

    /// Attach a component, taking ownership
    ///
    /// An entity holds at most one component per kind; a previous component
    /// of the same kind is replaced and returned.
    pub fn add_component<T: Component>(&mut self, component: T) -> Option<T> {
        let previous = self.components.insert(component);
        if previous.is_some() {
            log::warn!(
                "{:?} entity already had a {} component, replacing it",
                self.entity_type,
                T::KIND
            );
        }
        previous
    }

    /// Detach a component
    pub fn remove_component<T: Component>(&mut self) -> Option<T> {
        self.components.remove()
    }

    /// Check whether a component of the given kind is attached
    pub fn has_component(&self, kind: ComponentKind) -> bool {
        self.components.contains(kind)
    }

    /// Get a reference to a component
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components.get()
    }

    /// Get a mutable reference to a component
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components.get_mut()
    }

    /// Get the entity type
    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    /// Get the attached components
    pub fn components(&self) -> &ComponentSet {
        &self.components
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Alive, Inventory, Transform};

    #[test]
    fn test_entity_id_ordering() {
        let e1 = EntityId::new(1);
        let e2 = EntityId::new(2);
        assert!(e1 < e2);
        assert_eq!(e1.raw(), 1);
        assert_eq!(e1.to_string(), "Entity(1)");
    }

    #[test]
    fn test_player_slot_symbols() {
        for slot in PlayerSlot::ALL {
            assert_eq!(PlayerSlot::from_symbol(slot.symbol()), Some(slot));
            assert_eq!(PlayerSlot::from_index(slot.index()), Some(slot));
        }
        assert_eq!(PlayerSlot::from_symbol('5'), None);
        assert_eq!(PlayerSlot::from_index(4), None);
        assert_eq!(PlayerSlot::Three.to_string(), "P3");
    }

    #[test]
    fn test_component_lookup() {
        let mut entity = Entity::new(EntityType::Player(PlayerSlot::One))
            .with(Transform::new(0.0, 0.0, 0.0))
            .with(Alive::new(true));

        assert!(entity.has_component(ComponentKind::Transform));
        assert!(!entity.has_component(ComponentKind::Inventory));
        assert!(entity.get::<Inventory>().is_none());
        assert_eq!(entity.component_count(), 2);

        entity.add_component(Inventory::new());
        assert!(entity.get::<Inventory>().is_some());

        if let Some(alive) = entity.get_mut::<Alive>() {
            alive.kill();
        }
        assert!(!entity.get::<Alive>().unwrap().is_alive());
    }

    #[test]
    fn test_one_component_per_kind() {
        let mut entity = Entity::new(EntityType::Wall);
        entity.add_component(Transform::new(1.0, 1.0, 0.0));
        let previous = entity.add_component(Transform::new(2.0, 2.0, 0.0));

        assert_eq!(previous.map(|t| t.x()), Some(1.0));
        assert_eq!(entity.component_count(), 1);
        assert_eq!(entity.get::<Transform>().unwrap().x(), 2.0);
    }

    #[test]
    fn test_remove_component() {
        let mut entity = Entity::new(EntityType::Box).with(Transform::new(0.0, 0.0, 0.0));
        assert!(entity.remove_component::<Transform>().is_some());
        assert!(entity.remove_component::<Transform>().is_none());
    }

    #[test]
    fn test_entity_type_player_slot() {
        assert_eq!(
            EntityType::Player(PlayerSlot::Four).player_slot(),
            Some(PlayerSlot::Four)
        );
        assert!(!EntityType::Bomb.is_player());
    }
}
