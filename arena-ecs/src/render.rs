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
//! Rendering collaborator interface
//!
//! The core never talks to a graphics API. It issues frame brackets, camera
//! brackets and primitive draw calls through [`Renderer`]; a windowing
//! backend implements the trait outside this crate. [`CommandRecorder`]
//! captures the calls for headless runs and tests.

use crate::ecs::components::Color;

/// Point or direction in world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
    /// Z coordinate
    pub z: f32,
}

impl Vector3 {
    /// Create a vector
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }
}

/// Perspective camera used for the world-space pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera3D {
    /// Eye position
    pub position: Vector3,
    /// Look-at point
    pub target: Vector3,
    /// Up direction
    pub up: Vector3,
    /// Vertical field of view in degrees
    pub fovy: f32,
}

impl Default for Camera3D {
    fn default() -> Self {
        Camera3D {
            position: Vector3::new(0.0, 14.0, 7.0),
            target: Vector3::new(0.0, -1.5, 0.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            fovy: 40.0,
        }
    }
}

/// Drawing primitives consumed from the rendering backend
///
/// World-space calls are only meaningful between [`begin_mode_3d`] and
/// [`end_mode_3d`]; everything is bracketed by [`begin_drawing`] and
/// [`end_drawing`].
///
/// [`begin_mode_3d`]: Renderer::begin_mode_3d
/// [`end_mode_3d`]: Renderer::end_mode_3d
/// [`begin_drawing`]: Renderer::begin_drawing
/// [`end_drawing`]: Renderer::end_drawing
pub trait Renderer {
    /// Start a frame
    fn begin_drawing(&mut self);

    /// Present the frame
    fn end_drawing(&mut self);

    /// Fill the frame with a color
    fn clear_background(&mut self, color: Color);

    /// Enter world-space drawing with the given camera
    fn begin_mode_3d(&mut self, camera: &Camera3D);

    /// Leave world-space drawing
    fn end_mode_3d(&mut self);

    /// Draw screen-space text
    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color);

    /// Draw a screen-space filled rectangle
    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Draw a screen-space filled circle
    fn draw_circle(&mut self, x: i32, y: i32, radius: f32, color: Color);

    /// Draw a world-space cube, textured when a texture path is given
    fn draw_cube(&mut self, position: Vector3, size: Vector3, texture: Option<&str>, color: Color);

    /// Draw a world-space sphere
    fn draw_sphere(&mut self, position: Vector3, radius: f32, color: Color);
}

/// A recorded renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `begin_drawing`
    BeginDrawing,
    /// `end_drawing`
    EndDrawing,
    /// `clear_background`
    Clear(Color),
    /// `begin_mode_3d`
    BeginMode3D(Camera3D),
    /// `end_mode_3d`
    EndMode3D,
    /// `draw_text`
    Text {
        /// Text content
        text: String,
        /// Screen x
        x: i32,
        /// Screen y
        y: i32,
        /// Font size
        font_size: i32,
        /// Tint
        color: Color,
    },
    /// `draw_rectangle`
    Rectangle {
        /// Screen x
        x: i32,
        /// Screen y
        y: i32,
        /// Width
        width: i32,
        /// Height
        height: i32,
        /// Fill
        color: Color,
    },
    /// `draw_circle`
    Circle {
        /// Screen x
        x: i32,
        /// Screen y
        y: i32,
        /// Radius
        radius: f32,
        /// Fill
        color: Color,
    },
    /// `draw_cube`
    Cube {
        /// Center
        position: Vector3,
        /// Extents
        size: Vector3,
        /// Texture path
        texture: Option<String>,
        /// Tint
        color: Color,
    },
    /// `draw_sphere`
    Sphere {
        /// Center
        position: Vector3,
        /// Radius
        radius: f32,
        /// Tint
        color: Color,
    },
}

/// Renderer that records every call instead of drawing
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, oldest first
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded calls
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of world-space primitives recorded
    pub fn primitive_3d_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Cube { .. } | DrawCommand::Sphere { .. }))
            .count()
    }
}

impl Renderer for CommandRecorder {
    fn begin_drawing(&mut self) {
        self.commands.push(DrawCommand::BeginDrawing);
    }

    fn end_drawing(&mut self) {
        self.commands.push(DrawCommand::EndDrawing);
    }

    fn clear_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn begin_mode_3d(&mut self, camera: &Camera3D) {
        self.commands.push(DrawCommand::BeginMode3D(*camera));
    }

    fn end_mode_3d(&mut self) {
        self.commands.push(DrawCommand::EndMode3D);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, font_size: i32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.commands.push(DrawCommand::Rectangle {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn draw_cube(&mut self, position: Vector3, size: Vector3, texture: Option<&str>, color: Color) {
        self.commands.push(DrawCommand::Cube {
            position,
            size,
            texture: texture.map(str::to_string),
            color,
        });
    }

    fn draw_sphere(&mut self, position: Vector3, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Sphere {
            position,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera() {
        let camera = Camera3D::default();
        assert_eq!(camera.position, Vector3::new(0.0, 14.0, 7.0));
        assert_eq!(camera.fovy, 40.0);
    }

    #[test]
    fn test_recorder_keeps_call_order() {
        let mut recorder = CommandRecorder::new();
        recorder.begin_drawing();
        recorder.begin_mode_3d(&Camera3D::default());
        recorder.draw_sphere(Vector3::default(), 0.2, Color::BLUE);
        recorder.end_mode_3d();
        recorder.end_drawing();

        assert_eq!(recorder.commands().len(), 5);
        assert_eq!(recorder.commands()[0], DrawCommand::BeginDrawing);
        assert_eq!(recorder.primitive_3d_count(), 1);

        let drained = recorder.take();
        assert_eq!(drained.len(), 5);
        assert!(recorder.commands().is_empty());
    }
}
