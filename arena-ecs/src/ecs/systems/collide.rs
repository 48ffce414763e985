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
//! Collision flags and response
//!
//! Every entity carrying both `Collide` and `Transform` is treated as an
//! axis-aligned box on the ground plane, sized from its 3D visual. The pass
//! has three steps:
//!
//! 1. find overlapping pairs (in parallel when the `parallel` feature is on),
//! 2. raise the `Collide` flag on both members of every pair,
//! 3. resolve gameplay: moving players are pushed back out of walls and
//!    boxes, and players touching an exposed bonus pick it up.
//!
//! Pairs are always sorted before use, so the outcome does not depend on
//! whether the search ran in parallel.

use crate::ecs::components::{BonusType, Collectable, Collide, Drawable3D, Inventory, Transform};
use crate::ecs::{Entity, EntityType, Frame, System, World};
use std::collections::HashSet;

/// Overlap shorter than this is treated as touching, not colliding
const CONTACT_EPSILON: f32 = 1e-3;

/// Ground-plane footprint of one collidable entity
#[derive(Debug, Clone, Copy)]
struct Body {
    index: usize,
    x: f32,
    y: f32,
    half_x: f32,
    half_y: f32,
}

impl Body {
    fn overlaps(&self, other: &Body) -> bool {
        (self.x - other.x).abs() < self.half_x + other.half_x - CONTACT_EPSILON
            && (self.y - other.y).abs() < self.half_y + other.half_y - CONTACT_EPSILON
    }
}

/// Flags colliding entities and applies push-back and pickups
#[derive(Debug)]
pub struct CollideSystem {
    default_half_extent: f32,
}

impl CollideSystem {
    /// Create the system
    ///
    /// Entities without a 3D visual get a square footprint of
    /// `default_half_extent` on each side.
    pub fn new(default_half_extent: f32) -> Self {
        assert!(
            default_half_extent > 0.0 && default_half_extent.is_finite(),
            "Half extent must be positive and finite"
        );
        CollideSystem {
            default_half_extent,
        }
    }

    /// Run the full pass and return the colliding pairs as world positions
    pub fn detect_and_resolve(&self, world: &mut World) -> Vec<(usize, usize)> {
        let bodies = self.collect_bodies(world);
        let pairs = overlapping_pairs(&bodies);

        for &(a, b) in &pairs {
            for index in [a, b] {
                if let Some(collide) = world.entity_at_mut(index).and_then(|e| e.get_mut::<Collide>()) {
                    collide.set_colliding(true);
                }
            }
        }

        self.resolve(world, &pairs);
        pairs
    }

    fn collect_bodies(&self, world: &World) -> Vec<Body> {
        world
            .entities()
            .enumerate()
            .filter(|(_, entity)| entity.get::<Collide>().is_some())
            .filter_map(|(index, entity)| {
                let transform = entity.get::<Transform>()?;
                let (half_x, half_y) = entity
                    .get::<Drawable3D>()
                    .map(Drawable3D::half_extents)
                    .unwrap_or((self.default_half_extent, self.default_half_extent));
                Some(Body {
                    index,
                    x: transform.x(),
                    y: transform.y(),
                    half_x,
                    half_y,
                })
            })
            .collect()
    }

    fn resolve(&self, world: &mut World, pairs: &[(usize, usize)]) {
        let types: Vec<EntityType> = world.entities().map(Entity::entity_type).collect();

        // A bonus still covered by a box cannot be picked up
        let buried: HashSet<usize> = pairs
            .iter()
            .flat_map(|&(a, b)| [(a, b), (b, a)])
            .filter(|&(bonus, other)| types[bonus] == EntityType::Bonus && types[other] == EntityType::Box)
            .map(|(bonus, _)| bonus)
            .collect();

        let mut pushed_back = HashSet::new();
        for &(a, b) in pairs {
            for (mover, other) in [(a, b), (b, a)] {
                let Some(slot) = types[mover].player_slot() else {
                    continue;
                };
                match types[other] {
                    EntityType::Wall | EntityType::Box => {
                        if pushed_back.insert(mover) {
                            if let Some(transform) =
                                world.entity_at_mut(mover).and_then(|e| e.get_mut::<Transform>())
                            {
                                transform.retreat();
                            }
                        }
                    }
                    EntityType::Bonus if !buried.contains(&other) => {
                        // One pickup per bonus type per frame; the rest wait for the next frame
                        let kind = world
                            .entity_at(other)
                            .and_then(|e| e.get::<Collectable>())
                            .map(Collectable::bonus);
                        let pending = world
                            .entity_at(mover)
                            .and_then(|e| e.get::<Inventory>())
                            .zip(kind)
                            .is_some_and(|(inventory, kind)| inventory.is_pending(kind));
                        if pending {
                            continue;
                        }
                        let Some(bonus) = collect_bonus(world, other) else {
                            continue;
                        };
                        match world.entity_at_mut(mover).and_then(|e| e.get_mut::<Inventory>()) {
                            Some(inventory) => {
                                inventory.grant(bonus);
                                log::debug!("{} picked up {:?}", slot, bonus);
                            }
                            None => log::warn!("{} touched a bonus but has no inventory", slot),
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

impl Default for CollideSystem {
    fn default() -> Self {
        CollideSystem::new(0.25)
    }
}

impl System for CollideSystem {
    fn run(&mut self, world: &mut World, _frame: &mut Frame<'_>) {
        self.detect_and_resolve(world);
    }

    fn name(&self) -> &str {
        "CollideSystem"
    }
}

/// Mark a bonus collected, returning its type if it was still available
fn collect_bonus(world: &mut World, index: usize) -> Option<BonusType> {
    let collectable = world.entity_at_mut(index)?.get_mut::<Collectable>()?;
    if collectable.is_collected() {
        return None;
    }
    collectable.collect();
    Some(collectable.bonus())
}

/// Sorted list of overlapping pairs, as world positions with `a < b`
#[cfg(feature = "parallel")]
fn overlapping_pairs(bodies: &[Body]) -> Vec<(usize, usize)> {
    use rayon::prelude::*;

    let mut pairs: Vec<(usize, usize)> = (0..bodies.len())
        .into_par_iter()
        .flat_map_iter(|i| {
            bodies[i + 1..]
                .iter()
                .filter(move |other| bodies[i].overlaps(other))
                .map(move |other| (bodies[i].index, other.index))
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

#[cfg(not(feature = "parallel"))]
fn overlapping_pairs(bodies: &[Body]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, body) in bodies.iter().enumerate() {
        for other in &bodies[i + 1..] {
            if body.overlaps(other) {
                pairs.push((body.index, other.index));
            }
        }
    }
    pairs.sort_unstable();
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Color, Destroyable};
    use crate::ecs::{EntityId, PlayerSlot};

    fn wall(x: f32, y: f32) -> Entity {
        Entity::new(EntityType::Wall)
            .with(Transform::new(x, y, 0.0))
            .with(Drawable3D::cube(0.5, 0.5, 0.5, Color::WHITE))
            .with(Collide::new())
    }

    fn crate_box(x: f32, y: f32) -> Entity {
        Entity::new(EntityType::Box)
            .with(Transform::new(x, y, 0.0))
            .with(Drawable3D::cube(0.5, 0.5, 0.5, Color::WHITE))
            .with(Collide::new())
            .with(Destroyable::new())
    }

    fn bonus(x: f32, y: f32, kind: BonusType) -> Entity {
        Entity::new(EntityType::Bonus)
            .with(Transform::new(x, y, 0.0))
            .with(Drawable3D::cube(0.25, 0.25, 0.25, kind.color()))
            .with(Collectable::new(kind))
            .with(Collide::new())
    }

    fn player(x: f32, y: f32, speed_x: f32) -> Entity {
        let mut transform = Transform::new(x, y, 0.0);
        transform.set_speed(speed_x, 0.0);
        Entity::new(EntityType::Player(PlayerSlot::One))
            .with(transform)
            .with(Drawable3D::sphere(0.2, Color::BLUE))
            .with(Collide::new())
            .with(Inventory::new())
    }

    fn colliding(world: &World, id: EntityId) -> bool {
        world
            .get(id)
            .and_then(|e| e.get::<Collide>())
            .is_some_and(Collide::is_colliding)
    }

    #[test]
    fn test_adjacent_tiles_do_not_collide() {
        let mut world = World::new();
        let a = world.spawn(wall(0.0, 0.0));
        let b = world.spawn(wall(0.5, 0.0));

        let pairs = CollideSystem::default().detect_and_resolve(&mut world);
        assert!(pairs.is_empty());
        assert!(!colliding(&world, a));
        assert!(!colliding(&world, b));
    }

    #[test]
    fn test_overlap_flags_both_members() {
        let mut world = World::new();
        let a = world.spawn(player(0.0, 0.0, 0.0));
        let b = world.spawn(player(0.1, 0.0, 0.0));
        let far = world.spawn(wall(3.0, 3.0));

        let pairs = CollideSystem::default().detect_and_resolve(&mut world);
        assert_eq!(pairs, vec![(0, 1)]);
        assert!(colliding(&world, a));
        assert!(colliding(&world, b));
        assert!(!colliding(&world, far));
    }

    #[test]
    fn test_moving_player_is_pushed_out_of_wall() {
        let mut world = World::new();
        world.spawn(wall(0.5, 0.0));
        // Already advanced into the wall this frame
        let id = world.spawn(player(0.06, 0.0, 0.02));

        CollideSystem::default().detect_and_resolve(&mut world);

        let x = world.get(id).and_then(|e| e.get::<Transform>()).map(Transform::x).unwrap();
        assert!((x - 0.04).abs() < 1e-6);
    }

    #[test]
    fn test_push_back_happens_once_per_frame() {
        let mut world = World::new();
        world.spawn(wall(0.5, 0.1));
        world.spawn(wall(0.5, -0.1));
        let id = world.spawn(player(0.1, 0.0, 0.02));

        CollideSystem::default().detect_and_resolve(&mut world);

        let x = world.get(id).and_then(|e| e.get::<Transform>()).map(Transform::x).unwrap();
        assert!((x - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_exposed_bonus_is_picked_up() {
        let mut world = World::new();
        let pickup = world.spawn(bonus(0.0, 0.0, BonusType::FireUp));
        let id = world.spawn(player(0.1, 0.0, 0.0));

        CollideSystem::default().detect_and_resolve(&mut world);

        let inventory = world.get(id).and_then(|e| e.get::<Inventory>()).copied().unwrap();
        assert!(inventory.fire_up());
        let collectable = world.get(pickup).and_then(|e| e.get::<Collectable>()).copied().unwrap();
        assert!(collectable.is_collected());
    }

    #[test]
    fn test_buried_bonus_is_not_picked_up() {
        let mut world = World::new();
        world.spawn(bonus(0.5, 0.0, BonusType::SpeedUp));
        world.spawn(crate_box(0.5, 0.0));
        let id = world.spawn(player(0.3, 0.0, 0.02));

        CollideSystem::default().detect_and_resolve(&mut world);

        let inventory = world.get(id).and_then(|e| e.get::<Inventory>()).copied().unwrap();
        assert!(!inventory.has_pending());
    }

    #[test]
    fn test_bonus_goes_to_one_player_only() {
        let mut world = World::new();
        world.spawn(bonus(0.0, 0.0, BonusType::BombUp));
        let first = world.spawn(player(-0.1, 0.0, 0.0));
        let second = world.spawn(player(0.1, 0.0, 0.0));

        CollideSystem::default().detect_and_resolve(&mut world);

        let granted = [first, second]
            .iter()
            .filter(|id| {
                world
                    .get(**id)
                    .and_then(|e| e.get::<Inventory>())
                    .is_some_and(Inventory::bomb_up)
            })
            .count();
        assert_eq!(granted, 1);
    }

    #[test]
    fn test_second_bonus_of_same_type_waits() {
        let mut world = World::new();
        let left = world.spawn(bonus(0.0, 0.0, BonusType::FireUp));
        let right = world.spawn(bonus(0.5, 0.0, BonusType::FireUp));
        let other = world.spawn(bonus(0.25, 0.1, BonusType::SpeedUp));
        let id = world.spawn(player(0.25, 0.0, 0.0));
        let system = CollideSystem::default();

        system.detect_and_resolve(&mut world);

        let collected = |world: &World, bonus: EntityId| {
            world
                .get(bonus)
                .and_then(|e| e.get::<Collectable>())
                .is_some_and(Collectable::is_collected)
        };
        assert!(collected(&world, left));
        assert!(!collected(&world, right));
        assert!(collected(&world, other), "other bonus types are not held back");

        // Consuming the flags frees the next pickup of that type
        let pickups = world
            .get_mut(id)
            .and_then(|e| e.get_mut::<Inventory>())
            .map(Inventory::take_pickups)
            .unwrap();
        assert_eq!(pickups, vec![BonusType::FireUp, BonusType::SpeedUp]);

        system.detect_and_resolve(&mut world);
        assert!(collected(&world, right));
        let inventory = world.get(id).and_then(|e| e.get::<Inventory>()).copied().unwrap();
        assert!(inventory.is_pending(BonusType::FireUp));
    }
}
