//! Read-only render passes

use crate::ecs::components::{Alive, Drawable2D, Drawable3D, Shape2D, Shape3D, Transform};
use crate::ecs::{Frame, System, World};
use crate::render::{Renderer, Vector3};

/// Draws screen-space visuals at their transform
#[derive(Debug, Default)]
pub struct Draw2DSystem;

impl Draw2DSystem {
    /// Create the system
    pub fn new() -> Self {
        Draw2DSystem
    }

    /// Issue one draw call per visible 2D entity
    pub fn draw(&self, world: &World, renderer: &mut dyn Renderer) {
        for entity in world.entities() {
            let (Some(drawable), Some(transform)) =
                (entity.get::<Drawable2D>(), entity.get::<Transform>())
            else {
                continue;
            };
            let x = transform.x() as i32;
            let y = transform.y() as i32;
            match drawable.shape() {
                Shape2D::Text { content, font_size } => {
                    renderer.draw_text(content, x, y, *font_size, drawable.color())
                }
                Shape2D::Rectangle { width, height } => {
                    renderer.draw_rectangle(x, y, *width as i32, *height as i32, drawable.color())
                }
                Shape2D::Circle { radius } => renderer.draw_circle(x, y, *radius, drawable.color()),
            }
        }
    }
}

impl System for Draw2DSystem {
    fn run(&mut self, world: &mut World, frame: &mut Frame<'_>) {
        self.draw(world, frame.renderer());
    }

    fn name(&self) -> &str {
        "Draw2DSystem"
    }
}

/// Draws world-space visuals at their transform
///
/// The arena lies on the ground plane: a transform's (x, y) maps to world
/// (x, z) and its z is the height. Dead players are skipped.
#[derive(Debug, Default)]
pub struct Draw3DSystem;

impl Draw3DSystem {
    /// Create the system
    pub fn new() -> Self {
        Draw3DSystem
    }

    /// Issue one draw call per visible 3D entity
    pub fn draw(&self, world: &World, renderer: &mut dyn Renderer) {
        for entity in world.entities() {
            let (Some(drawable), Some(transform)) =
                (entity.get::<Drawable3D>(), entity.get::<Transform>())
            else {
                continue;
            };
            if entity.get::<Alive>().is_some_and(|alive| !alive.is_alive()) {
                continue;
            }
            let position = Vector3::new(transform.x(), transform.z(), transform.y());
            match drawable.shape() {
                Shape3D::Cube {
                    width,
                    height,
                    length,
                    texture,
                } => renderer.draw_cube(
                    position,
                    Vector3::new(*width, *height, *length),
                    texture.as_deref(),
                    drawable.color(),
                ),
                Shape3D::Sphere { radius } => renderer.draw_sphere(position, *radius, drawable.color()),
            }
        }
    }
}

impl System for Draw3DSystem {
    fn run(&mut self, world: &mut World, frame: &mut Frame<'_>) {
        self.draw(world, frame.renderer());
    }

    fn name(&self) -> &str {
        "Draw3DSystem"
    }

    fn uses_camera(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::Color;
    use crate::ecs::{Entity, EntityType, PlayerSlot};
    use crate::render::{CommandRecorder, DrawCommand};

    #[test]
    fn test_draw_2d_shapes() {
        let mut world = World::new();
        world.spawn(
            Entity::new(EntityType::Unknown)
                .with(Transform::new(10.0, 20.0, 0.0))
                .with(Drawable2D::text("P1", 20, Color::BLUE)),
        );
        world.spawn(
            Entity::new(EntityType::Unknown)
                .with(Transform::new(0.0, 0.0, 0.0))
                .with(Drawable2D::circle(4.0, Color::RED)),
        );
        // No transform, not drawn
        world.spawn(Entity::new(EntityType::Unknown).with(Drawable2D::rectangle(1.0, 1.0, Color::RED)));

        let mut recorder = CommandRecorder::new();
        Draw2DSystem::new().draw(&world, &mut recorder);

        assert_eq!(recorder.commands().len(), 2);
        assert!(matches!(
            &recorder.commands()[0],
            DrawCommand::Text { text, x: 10, y: 20, .. } if text == "P1"
        ));
    }

    #[test]
    fn test_draw_3d_maps_ground_plane() {
        let mut world = World::new();
        world.spawn(
            Entity::new(EntityType::Wall)
                .with(Transform::new(-5.0, 5.0, 0.0))
                .with(Drawable3D::textured_cube("wall.png", 0.5, 0.5, 0.5, Color::WHITE)),
        );

        let mut recorder = CommandRecorder::new();
        Draw3DSystem::new().draw(&world, &mut recorder);

        match &recorder.commands()[0] {
            DrawCommand::Cube { position, texture, .. } => {
                assert_eq!(*position, Vector3::new(-5.0, 0.0, 5.0));
                assert_eq!(texture.as_deref(), Some("wall.png"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_dead_players_are_hidden() {
        let mut world = World::new();
        let mut alive = Alive::new(true);
        alive.kill();
        world.spawn(
            Entity::new(EntityType::Player(PlayerSlot::One))
                .with(Transform::new(0.0, 0.0, 0.0))
                .with(Drawable3D::sphere(0.2, Color::BLUE))
                .with(alive),
        );

        let mut recorder = CommandRecorder::new();
        Draw3DSystem::new().draw(&world, &mut recorder);
        assert_eq!(recorder.primitive_3d_count(), 0);
    }
}
