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
//! # Arena ECS
//!
//! The runtime core of a tile-based multiplayer bomb arena: an ECS that
//! models players, walls, boxes, bombs and power-ups and drives them once
//! per frame through a fixed pipeline of systems.
//!
//! ## Features
//!
//! - **ECS Architecture**: entities with typed component slots and a staged scheduler
//! - **Gameplay Systems**: movement, collision response, fuses and chain reactions
//! - **Maps**: 21x21 character grids, entity templates and a line-based save format
//! - **Headless Collaborators**: recording renderer and audio sink for tests and tools
//! - **Parallelization**: optional Rayon collision search behind the `parallel` feature
//!
//! ## Example
//!
//! ```rust
//! use arena_ecs::audio::NullAudio;
//! use arena_ecs::map::MapGrid;
//! use arena_ecs::render::CommandRecorder;
//! use arena_ecs::screen::{GameScreen, Screen, ScreenState};
//! use arena_ecs::{GameConfig, Player};
//!
//! let mut screen = GameScreen::new(GameConfig::default(), Player::roster(), Box::new(NullAudio));
//! screen.init();
//! screen.set_players_playing([true, true, false, false]);
//! screen.init_map(&MapGrid::classic());
//!
//! let report = screen.draw(&mut CommandRecorder::new());
//! assert_eq!(report.state, ScreenState::Running);
//! ```

#![warn(missing_docs)]

/// Entity Component System implementation
pub mod ecs;

/// Audio collaborator and sound entities
pub mod audio;

/// Game configuration
pub mod config;

/// Error types
pub mod error;

/// Per-frame input snapshot
pub mod input;

/// Map grids, entity templates and save files
pub mod map;

/// Persistent player records
pub mod player;

/// Rendering collaborator
pub mod render;

/// Screens driven by the application shell
pub mod screen;

/// Player status overlays
pub mod ui;

pub use config::GameConfig;
pub use ecs::{Entity, EntityId, World};
pub use error::MapError;
pub use player::{Player, PlayerEvent};
