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
//! Arena game components
//!
//! Plain data records for everything that lives on the arena: walls, boxes,
//! players, bombs, bonuses and the sound entities. Components carry no
//! behavior beyond small state transitions on their own fields; systems and
//! the game screen decide when those transitions happen.

use crate::audio::SoundCue;
use crate::ecs::entity::PlayerSlot;
use crate::impl_component;

/// RGBA color in 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Floor gray
    pub const LIGHTGRAY: Color = Color::rgba(200, 200, 200, 255);
    /// Opaque black
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// Player 2 and bomb-up tint
    pub const RED: Color = Color::rgba(230, 41, 55, 255);
    /// Player 1 tint
    pub const BLUE: Color = Color::rgba(0, 121, 241, 255);
    /// Player 3 tint
    pub const GREEN: Color = Color::rgba(0, 228, 48, 255);
    /// Player 4 and speed-up tint
    pub const YELLOW: Color = Color::rgba(253, 249, 0, 255);
    /// Fire-up tint
    pub const MAGENTA: Color = Color::rgba(255, 0, 255, 255);
    /// Arena background
    pub const SKYBLUE: Color = Color::rgba(102, 191, 255, 255);

    /// Create a color from its channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn fade(self, a: u8) -> Self {
        Color { a, ..self }
    }
}

/// Position and per-frame speed
///
/// The speed is a displacement per frame. Input handlers arm it every frame
/// they want motion; the game screen zeroes it for players after each frame.
///
/// # Examples
///
/// ```
/// use arena_ecs::ecs::components::Transform;
///
/// let mut transform = Transform::new(-5.0, 5.0, 0.0);
/// transform.set_speed(0.02, 0.0);
/// assert!(transform.is_moving());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    x: f32,
    y: f32,
    z: f32,
    speed_x: f32,
    speed_y: f32,
}

impl Transform {
    /// Create a transform at rest
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Transform {
            x,
            y,
            z,
            speed_x: 0.0,
            speed_y: 0.0,
        }
    }

    /// Get the x coordinate
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Get the y coordinate
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Get the z coordinate
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Set the x coordinate
    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Set the y coordinate
    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    /// Set the z coordinate
    pub fn set_z(&mut self, z: f32) {
        self.z = z;
    }

    /// Get the x speed
    pub fn speed_x(&self) -> f32 {
        self.speed_x
    }

    /// Get the y speed
    pub fn speed_y(&self) -> f32 {
        self.speed_y
    }

    /// Set both speed components
    pub fn set_speed(&mut self, speed_x: f32, speed_y: f32) {
        self.speed_x = speed_x;
        self.speed_y = speed_y;
    }

    /// Zero the speed
    pub fn stop(&mut self) {
        self.set_speed(0.0, 0.0);
    }

    /// Check whether the speed is nonzero
    pub fn is_moving(&self) -> bool {
        self.speed_x != 0.0 || self.speed_y != 0.0
    }

    /// Apply one frame of speed
    pub fn advance(&mut self) {
        self.x += self.speed_x;
        self.y += self.speed_y;
    }

    /// Undo one frame of speed
    pub fn retreat(&mut self) {
        self.x -= self.speed_x;
        self.y -= self.speed_y;
    }
}

/// Shape of a screen-space visual
#[derive(Debug, Clone, PartialEq)]
pub enum Shape2D {
    /// Text label
    Text {
        /// Text content
        content: String,
        /// Font size in pixels
        font_size: i32,
    },
    /// Filled rectangle anchored at its top-left corner
    Rectangle {
        /// Width in pixels
        width: f32,
        /// Height in pixels
        height: f32,
    },
    /// Filled circle
    Circle {
        /// Radius in pixels
        radius: f32,
    },
}

/// Screen-space visual drawn at the entity's transform
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable2D {
    shape: Shape2D,
    color: Color,
}

impl Drawable2D {
    /// Create a text visual
    pub fn text(content: impl Into<String>, font_size: i32, color: Color) -> Self {
        Drawable2D {
            shape: Shape2D::Text {
                content: content.into(),
                font_size,
            },
            color,
        }
    }

    /// Create a rectangle visual
    pub fn rectangle(width: f32, height: f32, color: Color) -> Self {
        Drawable2D {
            shape: Shape2D::Rectangle { width, height },
            color,
        }
    }

    /// Create a circle visual
    pub fn circle(radius: f32, color: Color) -> Self {
        Drawable2D {
            shape: Shape2D::Circle { radius },
            color,
        }
    }

    /// Get the shape
    pub fn shape(&self) -> &Shape2D {
        &self.shape
    }

    /// Get the tint
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Shape of a world-space visual
#[derive(Debug, Clone, PartialEq)]
pub enum Shape3D {
    /// Box, optionally textured
    Cube {
        /// Extent along x
        width: f32,
        /// Vertical extent
        height: f32,
        /// Extent along y
        length: f32,
        /// Texture path, if any
        texture: Option<String>,
    },
    /// Sphere
    Sphere {
        /// Radius
        radius: f32,
    },
}

/// World-space visual drawn at the entity's transform
#[derive(Debug, Clone, PartialEq)]
pub struct Drawable3D {
    shape: Shape3D,
    color: Color,
}

impl Drawable3D {
    /// Create an untextured cube
    pub fn cube(width: f32, height: f32, length: f32, color: Color) -> Self {
        Drawable3D {
            shape: Shape3D::Cube {
                width,
                height,
                length,
                texture: None,
            },
            color,
        }
    }

    /// Create a textured cube
    pub fn textured_cube(
        texture: impl Into<String>,
        width: f32,
        height: f32,
        length: f32,
        color: Color,
    ) -> Self {
        Drawable3D {
            shape: Shape3D::Cube {
                width,
                height,
                length,
                texture: Some(texture.into()),
            },
            color,
        }
    }

    /// Create a sphere
    pub fn sphere(radius: f32, color: Color) -> Self {
        Drawable3D {
            shape: Shape3D::Sphere { radius },
            color,
        }
    }

    /// Get the shape
    pub fn shape(&self) -> &Shape3D {
        &self.shape
    }

    /// Get the tint
    pub fn color(&self) -> Color {
        self.color
    }

    /// Half extents of the footprint on the ground plane
    pub fn half_extents(&self) -> (f32, f32) {
        match &self.shape {
            Shape3D::Cube { width, length, .. } => (width / 2.0, length / 2.0),
            Shape3D::Sphere { radius } => (*radius, *radius),
        }
    }
}

/// Transient "currently colliding" flag
///
/// Set by the collide system, cleared by the game screen at the end of
/// every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collide {
    colliding: bool,
}

impl Collide {
    /// Create a cleared flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the flag
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Set the flag
    pub fn set_colliding(&mut self, colliding: bool) {
        self.colliding = colliding;
    }
}

/// Marks an entity that blasts can remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Destroyable {
    destroyed: bool,
}

impl Destroyable {
    /// Create an intact marker
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a blast has hit this entity
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Schedule the entity for removal
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// Bomb fuse progress
///
/// Transitions are monotonic: `Armed` to `Ticking` to `Exploded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuseState {
    /// Placed, not yet ticked
    Armed,
    /// Counting down
    Ticking {
        /// Ticks left before detonation
        remaining: u32,
    },
    /// Detonated
    Exploded,
}

/// Fuse and blast data of a bomb
///
/// # Examples
///
/// ```
/// use arena_ecs::ecs::components::{Explodable, FuseState};
///
/// let mut bomb = Explodable::new(1, 2);
/// assert!(!bomb.tick());
/// assert!(bomb.tick());
/// assert_eq!(bomb.state(), FuseState::Exploded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explodable {
    radius: u32,
    fuse: u32,
    state: FuseState,
    dropped: bool,
    owner: Option<PlayerSlot>,
}

impl Explodable {
    /// Create an armed bomb with a blast radius in cells and a fuse in ticks
    ///
    /// The "dropped" one-shot flag starts set so the placement cue plays once.
    pub fn new(radius: u32, fuse: u32) -> Self {
        Explodable {
            radius,
            fuse,
            state: FuseState::Armed,
            dropped: true,
            owner: None,
        }
    }

    /// Attribute the bomb to a player
    pub fn with_owner(mut self, owner: PlayerSlot) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Blast radius in cells
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Fuse length in ticks
    pub fn fuse(&self) -> u32 {
        self.fuse
    }

    /// Current fuse state
    pub fn state(&self) -> FuseState {
        self.state
    }

    /// Player who placed the bomb
    pub fn owner(&self) -> Option<PlayerSlot> {
        self.owner
    }

    /// Check whether the bomb has detonated
    pub fn is_exploded(&self) -> bool {
        self.state == FuseState::Exploded
    }

    /// Check the placement one-shot flag
    pub fn is_dropped(&self) -> bool {
        self.dropped
    }

    /// Acknowledge the placement cue
    pub fn clear_dropped(&mut self) {
        self.dropped = false;
    }

    /// Advance the fuse by one tick
    ///
    /// Returns true on the tick that detonates the bomb.
    pub fn tick(&mut self) -> bool {
        let remaining = match self.state {
            FuseState::Exploded => return false,
            FuseState::Armed => self.fuse,
            FuseState::Ticking { remaining } => remaining,
        };
        if remaining <= 1 {
            self.state = FuseState::Exploded;
            true
        } else {
            self.state = FuseState::Ticking {
                remaining: remaining - 1,
            };
            false
        }
    }

    /// Detonate immediately, as when caught in another blast
    ///
    /// Returns false if the bomb had already exploded.
    pub fn detonate(&mut self) -> bool {
        if self.is_exploded() {
            return false;
        }
        self.state = FuseState::Exploded;
        true
    }
}

/// Kind of power-up a bonus grants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusType {
    /// +1 bomb stock and max stock
    BombUp,
    /// +2 speed
    SpeedUp,
    /// +1 blast radius
    FireUp,
}

impl BonusType {
    /// Every bonus type
    pub const ALL: [BonusType; 3] = [BonusType::BombUp, BonusType::SpeedUp, BonusType::FireUp];

    /// Map and save-file symbol
    pub fn symbol(self) -> char {
        match self {
            BonusType::BombUp => 'B',
            BonusType::SpeedUp => 'S',
            BonusType::FireUp => 'R',
        }
    }

    /// Parse a map or save-file symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        BonusType::ALL.into_iter().find(|bonus| bonus.symbol() == symbol)
    }

    /// Render tint
    pub fn color(self) -> Color {
        match self {
            BonusType::BombUp => Color::RED,
            BonusType::SpeedUp => Color::YELLOW,
            BonusType::FireUp => Color::MAGENTA,
        }
    }
}

/// One-shot pickup flags
///
/// Flags are set when a player touches a bonus and consumed by the game
/// screen at the end of the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inventory {
    fire_up: bool,
    speed_up: bool,
    bomb_up: bool,
}

impl Inventory {
    /// Create an inventory with no pending pickups
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the fire-up flag
    pub fn fire_up(&self) -> bool {
        self.fire_up
    }

    /// Check the speed-up flag
    pub fn speed_up(&self) -> bool {
        self.speed_up
    }

    /// Check the bomb-up flag
    pub fn bomb_up(&self) -> bool {
        self.bomb_up
    }

    /// Set the flag matching a bonus
    pub fn grant(&mut self, bonus: BonusType) {
        match bonus {
            BonusType::BombUp => self.bomb_up = true,
            BonusType::SpeedUp => self.speed_up = true,
            BonusType::FireUp => self.fire_up = true,
        }
    }

    /// Check the flag matching a bonus
    pub fn is_pending(&self, bonus: BonusType) -> bool {
        match bonus {
            BonusType::BombUp => self.bomb_up,
            BonusType::SpeedUp => self.speed_up,
            BonusType::FireUp => self.fire_up,
        }
    }

    /// Check whether any flag is set
    pub fn has_pending(&self) -> bool {
        self.fire_up || self.speed_up || self.bomb_up
    }

    /// Consume every set flag
    pub fn take_pickups(&mut self) -> Vec<BonusType> {
        let mut pickups = Vec::new();
        if std::mem::take(&mut self.fire_up) {
            pickups.push(BonusType::FireUp);
        }
        if std::mem::take(&mut self.speed_up) {
            pickups.push(BonusType::SpeedUp);
        }
        if std::mem::take(&mut self.bomb_up) {
            pickups.push(BonusType::BombUp);
        }
        pickups
    }
}

/// Player liveness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alive {
    alive: bool,
}

impl Alive {
    /// Create a liveness flag
    pub fn new(alive: bool) -> Self {
        Alive { alive }
    }

    /// Check the flag
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the player dead
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

/// Bonus tag carried by collectible entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collectable {
    bonus: BonusType,
    collected: bool,
}

impl Collectable {
    /// Create an uncollected bonus
    pub fn new(bonus: BonusType) -> Self {
        Collectable {
            bonus,
            collected: false,
        }
    }

    /// Bonus type
    pub fn bonus(&self) -> BonusType {
        self.bonus
    }

    /// Check whether a player picked this bonus up
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Mark the bonus picked up
    pub fn collect(&mut self) {
        self.collected = true;
    }
}

/// Playback flag held by a sound entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sound {
    cue: SoundCue,
    play: bool,
}

impl Sound {
    /// Create an idle sound
    pub fn new(cue: SoundCue) -> Self {
        Sound { cue, play: false }
    }

    /// Cue this entity plays
    pub fn cue(&self) -> SoundCue {
        self.cue
    }

    /// Check the playback flag
    pub fn is_playing(&self) -> bool {
        self.play
    }

    /// Set the playback flag
    pub fn set_play(&mut self, play: bool) {
        self.play = play;
    }
}

impl_component!(Transform, Transform, transform);
impl_component!(Drawable2D, Drawable2D, drawable_2d);
impl_component!(Drawable3D, Drawable3D, drawable_3d);
impl_component!(Collide, Collide, collide);
impl_component!(Destroyable, Destroyable, destroyable);
impl_component!(Explodable, Explodable, explodable);
impl_component!(Inventory, Inventory, inventory);
impl_component!(Alive, Alive, alive);
impl_component!(Collectable, Collectable, collectable);
impl_component!(Sound, Sound, sound);
