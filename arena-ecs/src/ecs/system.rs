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
//! System execution framework
//!
//! Systems contain the logic that operates on entities and components. Each
//! system scans the whole world once per frame. The [`Frame`] passed along
//! gives access to the external collaborators a system may need.

use crate::audio::AudioSink;
use crate::ecs::World;
use crate::render::{Camera3D, Renderer};

/// Collaborators available to systems during one frame
pub struct Frame<'a> {
    renderer: &'a mut dyn Renderer,
    audio: &'a mut dyn AudioSink,
    camera: Camera3D,
}

impl<'a> Frame<'a> {
    /// Bundle the collaborators for one frame
    pub fn new(renderer: &'a mut dyn Renderer, audio: &'a mut dyn AudioSink, camera: Camera3D) -> Self {
        Frame {
            renderer,
            audio,
            camera,
        }
    }

    /// Rendering backend
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    /// Audio backend
    pub fn audio(&mut self) -> &mut dyn AudioSink {
        &mut *self.audio
    }

    /// Camera for the world-space pass
    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }
}

/// Trait for systems that operate on the ECS world
///
/// Systems should be stateless or close to it and operate on component data.
pub trait System: Send + Sync {
    /// Execute the system on the world
    fn run(&mut self, world: &mut World, frame: &mut Frame<'_>);

    /// Get the name of this system for debugging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Whether the system draws in world space and needs the camera bracket
    fn uses_camera(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::ecs::{Entity, EntityType};
    use crate::render::CommandRecorder;

    struct CountingSystem {
        seen: usize,
    }

    impl System for CountingSystem {
        fn run(&mut self, world: &mut World, _frame: &mut Frame<'_>) {
            self.seen += world.entity_count();
        }

        fn name(&self) -> &str {
            "CountingSystem"
        }
    }

    #[test]
    fn test_system_runs_over_world() {
        let mut world = World::new();
        world.spawn(Entity::new(EntityType::Wall));
        world.spawn(Entity::new(EntityType::Box));

        let mut renderer = CommandRecorder::new();
        let mut audio = NullAudio;
        let mut frame = Frame::new(&mut renderer, &mut audio, Camera3D::default());

        let mut system = CountingSystem { seen: 0 };
        system.run(&mut world, &mut frame);
        system.run(&mut world, &mut frame);

        assert_eq!(system.seen, 4);
        assert_eq!(system.name(), "CountingSystem");
        assert!(!system.uses_camera());
    }
}
