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
//! Game configuration

use crate::map::{Lattice, GRID_SIZE};
use crate::render::Camera3D;
use std::path::PathBuf;

/// Environment variable overriding [`GameConfig::save_path`]
pub const SAVE_PATH_ENV: &str = "ARENA_SAVE_PATH";

/// Tunables of one match
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width and height of the map grid
    pub grid_size: usize,
    /// World x of the top-left cell
    pub origin_x: f32,
    /// World y of the top-left cell
    pub origin_y: f32,
    /// Distance between neighbouring cells
    pub tile_step: f32,
    /// Player speed is divided by this to get distance per frame
    pub speed_divisor: f32,
    /// Frames between placing a bomb and its blast
    pub fuse_frames: u32,
    /// Where the map is saved and loaded
    pub save_path: PathBuf,
    /// Virtual screen width for HUD placement
    pub screen_width: f32,
    /// Virtual screen height for HUD placement
    pub screen_height: f32,
    /// Camera for the 3D pass
    pub camera: Camera3D,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: GRID_SIZE,
            origin_x: -5.0,
            origin_y: 5.0,
            tile_step: 0.5,
            speed_divisor: 500.0,
            fuse_frames: 120,
            save_path: PathBuf::from("SaveFile.txt"),
            screen_width: 1920.0,
            screen_height: 1080.0,
            camera: Camera3D::default(),
        }
    }
}

impl GameConfig {
    /// Default configuration with environment overrides applied
    ///
    /// Reads `ARENA_SAVE_PATH`; unset or empty leaves the default.
    pub fn from_env() -> Self {
        GameConfig::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(SAVE_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            log::info!("Using save path {} from {}", path, SAVE_PATH_ENV);
            self.save_path = PathBuf::from(path);
        }
        self
    }

    /// Set the save file location
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Set the bomb fuse length
    pub fn with_fuse_frames(mut self, frames: u32) -> Self {
        self.fuse_frames = frames;
        self
    }

    /// Set the distance between cells
    pub fn with_tile_step(mut self, step: f32) -> Self {
        assert!(step > 0.0 && step.is_finite(), "Tile step must be positive and finite");
        self.tile_step = step;
        self
    }

    /// Set the speed divisor
    pub fn with_speed_divisor(mut self, divisor: f32) -> Self {
        assert!(divisor > 0.0 && divisor.is_finite(), "Speed divisor must be positive and finite");
        self.speed_divisor = divisor;
        self
    }

    /// Set the virtual screen size
    pub fn with_screen_size(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Lattice the map is laid out on
    pub fn lattice(&self) -> Lattice {
        Lattice::new(self.origin_x, self.origin_y, self.tile_step)
    }

    /// Per-frame distance for a player speed stat
    pub fn frame_speed(&self, speed: u32) -> f32 {
        speed as f32 / self.speed_divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 21);
        assert_eq!(config.save_path, PathBuf::from("SaveFile.txt"));
        assert_eq!(config.lattice().position_of(1, 0), (-4.5, 5.0));
        assert_eq!(config.frame_speed(10), 0.02);
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default().with_overrides(|key| {
            (key == SAVE_PATH_ENV).then(|| "/tmp/arena.txt".to_string())
        });
        assert_eq!(config.save_path, PathBuf::from("/tmp/arena.txt"));

        let config = GameConfig::default().with_overrides(|_| Some("  ".to_string()));
        assert_eq!(config.save_path, PathBuf::from("SaveFile.txt"));
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::default()
            .with_fuse_frames(3)
            .with_save_path("map.txt")
            .with_screen_size(800.0, 600.0);
        assert_eq!(config.fuse_frames, 3);
        assert_eq!(config.save_path, PathBuf::from("map.txt"));
        assert_eq!(config.screen_width, 800.0);
    }

    #[test]
    #[should_panic(expected = "Tile step must be positive")]
    fn test_rejects_negative_step() {
        GameConfig::default().with_tile_step(-0.5);
    }
}
