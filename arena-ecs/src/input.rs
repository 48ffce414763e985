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
//! Per-frame input snapshot
//!
//! The input backend polls controllers and the keyboard and hands the game
//! screen one [`InputEvent`] per frame.

use crate::ecs::PlayerSlot;

/// Number of controller seats
pub const CONTROLLER_COUNT: usize = 4;

/// Left joystick reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Joystick {
    /// Centered
    #[default]
    Neutral,
    /// Pushed up
    Up,
    /// Pushed down
    Down,
    /// Pushed left
    Left,
    /// Pushed right
    Right,
}

/// Discrete button pressed this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonCode {
    /// Action button, drops a bomb
    Action,
    /// Options/back button, leaves the game screen
    Options,
}

/// State of one controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerState {
    /// Left joystick direction
    pub joystick: Joystick,
    /// Button pressed this frame, if any
    pub code: Option<ButtonCode>,
}

impl ControllerState {
    /// Controller pushed in a direction
    pub fn moving(joystick: Joystick) -> Self {
        ControllerState {
            joystick,
            code: None,
        }
    }

    /// Controller with a button pressed
    pub fn pressing(code: ButtonCode) -> Self {
        ControllerState {
            joystick: Joystick::Neutral,
            code: Some(code),
        }
    }
}

/// Keyboard modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    /// Right shift held, acts as options/back
    pub r_shift: bool,
}

/// Input snapshot for one frame
///
/// # Examples
///
/// ```
/// use arena_ecs::ecs::PlayerSlot;
/// use arena_ecs::input::{ControllerState, InputEvent, Joystick};
///
/// let event = InputEvent::new().with_controller(PlayerSlot::Two, ControllerState::moving(Joystick::Left));
/// assert_eq!(event.controller(PlayerSlot::Two).joystick, Joystick::Left);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputEvent {
    /// Controller states indexed by seat
    pub controllers: [ControllerState; CONTROLLER_COUNT],
    /// Keyboard modifiers
    pub key: KeyState,
}

impl InputEvent {
    /// Snapshot with every controller idle
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one controller's state
    pub fn with_controller(mut self, slot: PlayerSlot, state: ControllerState) -> Self {
        self.controllers[slot.index()] = state;
        self
    }

    /// Set the right-shift modifier
    pub fn with_r_shift(mut self, held: bool) -> Self {
        self.key.r_shift = held;
        self
    }

    /// State of one controller
    pub fn controller(&self, slot: PlayerSlot) -> &ControllerState {
        &self.controllers[slot.index()]
    }

    /// Check whether the options/back signal is present
    ///
    /// Only the first controller and the keyboard can leave the screen.
    pub fn requests_exit(&self) -> bool {
        self.controllers[0].code == Some(ButtonCode::Options) || self.key.r_shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_event() {
        let event = InputEvent::new();
        for slot in PlayerSlot::ALL {
            assert_eq!(event.controller(slot).joystick, Joystick::Neutral);
            assert_eq!(event.controller(slot).code, None);
        }
        assert!(!event.requests_exit());
    }

    #[test]
    fn test_exit_signals() {
        let by_button = InputEvent::new()
            .with_controller(PlayerSlot::One, ControllerState::pressing(ButtonCode::Options));
        assert!(by_button.requests_exit());

        let by_key = InputEvent::new().with_r_shift(true);
        assert!(by_key.requests_exit());

        let other_seat = InputEvent::new()
            .with_controller(PlayerSlot::Three, ControllerState::pressing(ButtonCode::Options));
        assert!(!other_seat.requests_exit());
    }
}
