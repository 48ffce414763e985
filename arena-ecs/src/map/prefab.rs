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
//! Entity templates shared by map building, save loading and gameplay
//!
//! Every entity the arena creates goes through one of these functions, so a
//! wall built from the grid and a wall read back from a save file are the
//! same entity.

use crate::ecs::components::{
    Alive, BonusType, Collectable, Collide, Color, Destroyable, Drawable3D, Explodable, Inventory,
    Transform,
};
use crate::ecs::{Entity, EntityType, PlayerSlot};
use crate::map::TileSymbol;

/// Texture of indestructible walls
pub const WALL_TEXTURE: &str = "src/wall.png";

/// Texture of destructible boxes
pub const BOX_TEXTURE: &str = "src/boite.png";

/// Edge length of a full tile cube
pub const TILE_SIZE: f32 = 0.5;

/// Edge length of a bonus cube
pub const BONUS_SIZE: f32 = 0.25;

/// Radius of a player sphere
pub const PLAYER_RADIUS: f32 = 0.2;

/// Radius of a bomb sphere
pub const BOMB_RADIUS: f32 = 0.25;

/// Tint of a player's avatar
pub fn player_color(slot: PlayerSlot) -> Color {
    match slot {
        PlayerSlot::One => Color::BLUE,
        PlayerSlot::Two => Color::RED,
        PlayerSlot::Three => Color::GREEN,
        PlayerSlot::Four => Color::YELLOW,
    }
}

/// Indestructible wall
pub fn wall(x: f32, y: f32) -> Entity {
    Entity::new(EntityType::Wall)
        .with(Transform::new(x, y, 0.0))
        .with(Drawable3D::textured_cube(
            WALL_TEXTURE,
            TILE_SIZE,
            TILE_SIZE,
            TILE_SIZE,
            Color::WHITE,
        ))
        .with(Collide::new())
}

/// Destructible box
pub fn crate_box(x: f32, y: f32) -> Entity {
    Entity::new(EntityType::Box)
        .with(Transform::new(x, y, 0.0))
        .with(Collide::new())
        .with(Destroyable::new())
        .with(Drawable3D::textured_cube(
            BOX_TEXTURE,
            TILE_SIZE,
            TILE_SIZE,
            TILE_SIZE,
            Color::WHITE,
        ))
}

/// Player avatar carrying all six player components
pub fn player(slot: PlayerSlot, x: f32, y: f32) -> Entity {
    Entity::new(EntityType::Player(slot))
        .with(Transform::new(x, y, 0.0))
        .with(Drawable3D::sphere(PLAYER_RADIUS, player_color(slot)))
        .with(Collide::new())
        .with(Destroyable::new())
        .with(Inventory::new())
        .with(Alive::new(true))
}

/// Collectible power-up, tinted by its type
pub fn bonus(kind: BonusType, x: f32, y: f32) -> Entity {
    Entity::new(EntityType::Bonus)
        .with(Transform::new(x, y, 0.0))
        .with(Drawable3D::cube(BONUS_SIZE, BONUS_SIZE, BONUS_SIZE, kind.color()))
        .with(Collectable::new(kind))
        .with(Collide::new())
}

/// Armed bomb
pub fn bomb(x: f32, y: f32, radius: u32, fuse: u32, owner: PlayerSlot) -> Entity {
    Entity::new(EntityType::Bomb)
        .with(Explodable::new(radius, fuse).with_owner(owner))
        .with(Drawable3D::sphere(BOMB_RADIUS, Color::RED))
        .with(Transform::new(x, y, 0.0))
}

/// Ground slab under the arena
pub fn floor() -> Entity {
    Entity::new(EntityType::Unknown)
        .with(Transform::new(0.0, 0.0, -0.25))
        .with(Drawable3D::cube(10.5, 0.05, 10.0, Color::LIGHTGRAY))
}

/// Entities a grid tile expands to
///
/// A bonus tile yields the bonus followed by the box hiding it. Empty tiles
/// yield nothing.
pub fn tile_entities(tile: TileSymbol, x: f32, y: f32) -> Vec<Entity> {
    match tile {
        TileSymbol::Wall => vec![wall(x, y)],
        TileSymbol::Box => vec![crate_box(x, y)],
        TileSymbol::Player(slot) => vec![player(slot, x, y)],
        TileSymbol::BonusBox(kind) => vec![bonus(kind, x, y), crate_box(x, y)],
        TileSymbol::Empty => Vec::new(),
    }
}
