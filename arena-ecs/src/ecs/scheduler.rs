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
//! System scheduler with a fixed frame pipeline
//!
//! Systems are organized into stages that execute strictly in order. Within a
//! stage, systems run in registration order. Systems that draw in world
//! space are bracketed by the camera begin/end calls.

use crate::ecs::{Frame, System, World};

/// Stage identifier for grouping systems
///
/// Lower stages run first. Ties keep registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StageId(pub usize);

impl StageId {
    /// Create a new stage ID
    pub fn new(id: usize) -> Self {
        StageId(id)
    }
}

/// The arena frame pipeline, in execution order
pub mod stages {
    use super::StageId;

    /// Screen-space drawing
    pub const RENDER_2D: StageId = StageId(0);

    /// World-space drawing, inside the camera bracket
    pub const RENDER_3D: StageId = StageId(1);

    /// Position integration
    pub const MOVEMENT: StageId = StageId(2);

    /// Sound flags
    pub const AUDIO: StageId = StageId(3);

    /// Collision flags, push-back and pickups
    pub const COLLISION: StageId = StageId(4);

    /// Fuses, blasts and chain reactions
    pub const EXPLOSION: StageId = StageId(5);
}

/// A system with metadata for scheduling
struct ScheduledSystem {
    system: Box<dyn System>,
    stage: StageId,
}

/// System scheduler running every stage once per frame
///
/// # Examples
///
/// ```
/// use arena_ecs::ecs::scheduler::{Scheduler, stages};
/// use arena_ecs::ecs::systems::MovementSystem;
///
/// let mut scheduler = Scheduler::new();
/// scheduler.add_system(MovementSystem::new(), stages::MOVEMENT);
/// assert_eq!(scheduler.system_count(), 1);
/// ```
pub struct Scheduler {
    systems: Vec<ScheduledSystem>,
}

impl Scheduler {
    /// Create a new scheduler
    pub fn new() -> Self {
        Scheduler {
            systems: Vec::new(),
        }
    }

    /// Add a system to a specific stage
    pub fn add_system<S: System + 'static>(&mut self, system: S, stage: StageId) {
        self.add_boxed(Box::new(system), stage);
    }

    /// Add an already boxed system to a specific stage
    pub fn add_boxed(&mut self, system: Box<dyn System>, stage: StageId) {
        self.systems.push(ScheduledSystem { system, stage });
        // Stable sort keeps registration order inside a stage
        self.systems.sort_by_key(|s| s.stage);
    }

    /// Get the number of registered systems
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Get the number of stages in use
    pub fn stage_count(&self) -> usize {
        self.systems
            .iter()
            .map(|s| s.stage.0 + 1)
            .max()
            .unwrap_or(0)
    }

    /// Names of the registered systems in execution order
    pub fn system_names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.system.name()).collect()
    }

    /// Run every system once, in stage order
    pub fn run(&mut self, world: &mut World, frame: &mut Frame<'_>) {
        for scheduled in &mut self.systems {
            if scheduled.system.uses_camera() {
                let camera = *frame.camera();
                frame.renderer().begin_mode_3d(&camera);
                scheduled.system.run(world, frame);
                frame.renderer().end_mode_3d();
            } else {
                scheduled.system.run(world, frame);
            }
        }
    }

    /// Clear all systems from the scheduler
    pub fn clear(&mut self) {
        self.systems.clear();
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
