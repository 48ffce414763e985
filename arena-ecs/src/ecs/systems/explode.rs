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
//! Bomb fuses, blasts and chain reactions
//!
//! Each run ticks every armed fuse once, in world order. Bombs that detonate
//! go onto a worklist; each blast marks Destroyable entities destroyed, kills
//! living players and detonates any other bomb in range, which joins the
//! back of the worklist. The whole chain resolves within one frame.
//!
//! Removal is left to the game screen's sweep.

use crate::ecs::components::{Alive, Destroyable, Explodable, Transform};
use crate::ecs::{EntityId, EntityType, Frame, System, World};
use crate::map::Lattice;
use std::collections::{HashSet, VecDeque};

/// Cells covered by a blast, origin first
///
/// Walks up, down, left and right up to `radius` cells, stopping a
/// direction at the first cell for which `blocked` holds. The blocking
/// cell itself is not covered.
///
/// # Examples
///
/// ```
/// use arena_ecs::ecs::systems::blast_cells;
///
/// let cells = blast_cells((0, 0), 1, |cell| cell == (1, 0));
/// assert_eq!(cells, vec![(0, 0), (0, -1), (0, 1), (-1, 0)]);
/// ```
pub fn blast_cells<F>(origin: (i32, i32), radius: u32, blocked: F) -> Vec<(i32, i32)>
where
    F: Fn((i32, i32)) -> bool,
{
    const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

    let mut cells = vec![origin];
    for (dx, dy) in DIRECTIONS {
        for dist in 1..=radius as i32 {
            let cell = (origin.0 + dx * dist, origin.1 + dy * dist);
            if blocked(cell) {
                break;
            }
            cells.push(cell);
        }
    }
    cells
}

/// Advances fuses and applies blast damage
#[derive(Debug, Clone)]
pub struct ExplodeSystem {
    lattice: Lattice,
}

impl ExplodeSystem {
    /// Create the system on the given tile lattice
    pub fn new(lattice: Lattice) -> Self {
        ExplodeSystem { lattice }
    }

    /// Tile lattice used to resolve blast cells
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Tick all fuses and resolve every resulting blast
    ///
    /// Returns the bombs that detonated this run, in detonation order.
    pub fn explode(&self, world: &mut World) -> Vec<EntityId> {
        let mut pending: VecDeque<EntityId> = VecDeque::new();
        for (id, entity) in world.iter_mut() {
            if let Some(bomb) = entity.get_mut::<Explodable>() {
                if bomb.tick() {
                    pending.push_back(id);
                }
            }
        }
        if pending.is_empty() {
            return Vec::new();
        }

        let walls: HashSet<(i32, i32)> = world
            .iter()
            .filter(|(_, entity)| entity.entity_type() == EntityType::Wall)
            .filter_map(|(_, entity)| entity.get::<Transform>())
            .map(|t| self.lattice.cell_of(t.x(), t.y()))
            .collect();

        let mut detonated = Vec::new();
        while let Some(bomb_id) = pending.pop_front() {
            let Some((origin, radius)) = world.get(bomb_id).and_then(|entity| {
                let transform = entity.get::<Transform>()?;
                let bomb = entity.get::<Explodable>()?;
                Some((self.lattice.cell_of(transform.x(), transform.y()), bomb.radius()))
            }) else {
                log::warn!("{} detonated without a position", bomb_id);
                continue;
            };
            detonated.push(bomb_id);

            let covered: HashSet<(i32, i32)> =
                blast_cells(origin, radius, |cell| walls.contains(&cell))
                    .into_iter()
                    .collect();
            log::debug!(
                "{} exploded at {:?} covering {} cells",
                bomb_id,
                origin,
                covered.len()
            );

            for (id, entity) in world.iter_mut() {
                if id == bomb_id {
                    continue;
                }
                let Some(transform) = entity.get::<Transform>() else {
                    continue;
                };
                if !covered.contains(&self.lattice.cell_of(transform.x(), transform.y())) {
                    continue;
                }
                if let Some(destroyable) = entity.get_mut::<Destroyable>() {
                    destroyable.destroy();
                }
                if entity.entity_type().is_player() {
                    if let Some(alive) = entity.get_mut::<Alive>() {
                        alive.kill();
                    }
                }
                if let Some(other) = entity.get_mut::<Explodable>() {
                    if other.detonate() {
                        pending.push_back(id);
                    }
                }
            }
        }
        detonated
    }
}

impl System for ExplodeSystem {
    fn run(&mut self, world: &mut World, _frame: &mut Frame<'_>) {
        self.explode(world);
    }

    fn name(&self) -> &str {
        "ExplodeSystem"
    }
}
