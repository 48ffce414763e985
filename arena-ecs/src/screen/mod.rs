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
//! Screens driven by the application shell
//!
//! The shell owns the window loop. Each frame it hands the active screen the
//! input snapshot, the elapsed time and a renderer, in that order.

mod game;

pub use game::GameScreen;

use crate::input::InputEvent;
use crate::player::PlayerEvent;
use crate::render::Renderer;

/// Lifecycle of a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    /// Built but no map loaded yet
    #[default]
    Initializing,
    /// Match in progress
    Running,
    /// Match over; the shell decides what comes next
    GameOver,
}

/// Request from a screen to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenSignal {
    /// Keep this screen
    #[default]
    Continue,
    /// Open the options screen
    Options,
}

impl ScreenSignal {
    /// Numeric code the shell's screen table uses
    pub fn code(self) -> i32 {
        match self {
            ScreenSignal::Continue => 0,
            ScreenSignal::Options => 4,
        }
    }
}

/// Outcome of one drawn frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Player events produced by the end-of-frame sweep, already applied
    pub events: Vec<PlayerEvent>,
    /// Entities removed by the sweep
    pub removed: usize,
    /// Bombs that detonated this frame
    pub detonated: usize,
    /// Screen state after the frame
    pub state: ScreenState,
}

/// A screen the shell can drive
pub trait Screen {
    /// Register systems and bootstrap entities
    fn init(&mut self);

    /// Consume one input snapshot
    fn handle_event(&mut self, event: &InputEvent) -> ScreenSignal;

    /// Advance non-gameplay state such as overlays
    fn update(&mut self, dt: f32);

    /// Draw one frame
    fn draw(&mut self, renderer: &mut dyn Renderer) -> FrameReport;

    /// Current lifecycle state
    fn state(&self) -> ScreenState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_codes() {
        assert_eq!(ScreenSignal::Continue.code(), 0);
        assert_eq!(ScreenSignal::Options.code(), 4);
        assert_eq!(ScreenSignal::default(), ScreenSignal::Continue);
    }
}
