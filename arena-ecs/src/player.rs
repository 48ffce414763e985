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
//! Persistent per-player records
//!
//! A [`Player`] outlives the entities that represent it on the map. The game
//! screen never reaches into player records from inside a system; the
//! end-of-frame sweep returns [`PlayerEvent`]s and the screen applies them.

use crate::ecs::components::BonusType;
use crate::ecs::PlayerSlot;

/// Starting movement speed
pub const DEFAULT_SPEED: u32 = 10;

/// Starting blast radius, in cells
pub const DEFAULT_BOMB_RADIUS: u32 = 1;

/// Starting bomb stock
pub const DEFAULT_BOMB_STOCK: u32 = 1;

/// Speed gained per speed-up pickup
pub const SPEED_UP_STEP: u32 = 2;

/// Stat change requested by the end-of-frame sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A pickup was collected
    PowerUp {
        /// Who collected it
        slot: PlayerSlot,
        /// What it grants
        bonus: BonusType,
    },
    /// One of the player's bombs went off
    BombReturned {
        /// Owner of the bomb
        slot: PlayerSlot,
    },
    /// The player's avatar was caught in a blast
    Died {
        /// Who died
        slot: PlayerSlot,
    },
}

impl PlayerEvent {
    /// Player the event applies to
    pub fn slot(&self) -> PlayerSlot {
        match *self {
            PlayerEvent::PowerUp { slot, .. }
            | PlayerEvent::BombReturned { slot }
            | PlayerEvent::Died { slot } => slot,
        }
    }
}

/// Stats and status of one seat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    slot: PlayerSlot,
    speed: u32,
    bomb_radius: u32,
    bomb_stock: u32,
    max_bomb_stock: u32,
    playing: bool,
    alive: bool,
}

impl Player {
    /// Create a player with starting stats, not yet playing
    pub fn new(slot: PlayerSlot) -> Self {
        Player {
            slot,
            speed: DEFAULT_SPEED,
            bomb_radius: DEFAULT_BOMB_RADIUS,
            bomb_stock: DEFAULT_BOMB_STOCK,
            max_bomb_stock: DEFAULT_BOMB_STOCK,
            playing: false,
            alive: true,
        }
    }

    /// One record per seat, in seat order
    pub fn roster() -> Vec<Player> {
        PlayerSlot::ALL.into_iter().map(Player::new).collect()
    }

    /// Seat
    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    /// Movement speed
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Blast radius in cells
    pub fn bomb_radius(&self) -> u32 {
        self.bomb_radius
    }

    /// Bombs currently available
    pub fn bomb_stock(&self) -> u32 {
        self.bomb_stock
    }

    /// Bombs available when none are on the map
    pub fn max_bomb_stock(&self) -> u32 {
        self.max_bomb_stock
    }

    /// Check whether the seat is in the match
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Set whether the seat is in the match
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Check whether the player is alive
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Check whether the player takes input this frame
    pub fn is_active(&self) -> bool {
        self.playing && self.alive
    }

    /// Spend one bomb
    ///
    /// Returns false and leaves the stock alone when it is empty.
    pub fn take_bomb(&mut self) -> bool {
        if self.bomb_stock == 0 {
            return false;
        }
        self.bomb_stock -= 1;
        true
    }

    /// Apply an event addressed to this player
    ///
    /// Events for another seat are ignored.
    pub fn apply(&mut self, event: PlayerEvent) {
        if event.slot() != self.slot {
            return;
        }
        match event {
            PlayerEvent::PowerUp { bonus, .. } => match bonus {
                BonusType::FireUp => self.bomb_radius += 1,
                BonusType::SpeedUp => self.speed += SPEED_UP_STEP,
                BonusType::BombUp => {
                    self.bomb_stock += 1;
                    self.max_bomb_stock += 1;
                }
            },
            PlayerEvent::BombReturned { .. } => {
                self.bomb_stock = (self.bomb_stock + 1).min(self.max_bomb_stock);
            }
            PlayerEvent::Died { .. } => self.alive = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let player = Player::new(PlayerSlot::One);
        assert_eq!(player.speed(), 10);
        assert_eq!(player.bomb_radius(), 1);
        assert_eq!(player.bomb_stock(), 1);
        assert!(!player.is_playing());
        assert!(player.is_alive());
        assert!(!player.is_active());
    }

    #[test]
    fn test_stock_never_negative() {
        let mut player = Player::new(PlayerSlot::One);
        assert!(player.take_bomb());
        assert!(!player.take_bomb());
        assert_eq!(player.bomb_stock(), 0);
    }

    #[test]
    fn test_power_ups() {
        let slot = PlayerSlot::Two;
        let mut player = Player::new(slot);
        player.apply(PlayerEvent::PowerUp {
            slot,
            bonus: BonusType::FireUp,
        });
        player.apply(PlayerEvent::PowerUp {
            slot,
            bonus: BonusType::SpeedUp,
        });
        player.apply(PlayerEvent::PowerUp {
            slot,
            bonus: BonusType::BombUp,
        });
        assert_eq!(player.bomb_radius(), 2);
        assert_eq!(player.speed(), 12);
        assert_eq!(player.bomb_stock(), 2);
        assert_eq!(player.max_bomb_stock(), 2);
    }

    #[test]
    fn test_returned_bomb_capped_at_max() {
        let slot = PlayerSlot::One;
        let mut player = Player::new(slot);
        player.apply(PlayerEvent::BombReturned { slot });
        assert_eq!(player.bomb_stock(), 1);

        player.take_bomb();
        player.apply(PlayerEvent::BombReturned { slot });
        assert_eq!(player.bomb_stock(), 1);
    }

    #[test]
    fn test_other_seat_ignored() {
        let mut player = Player::new(PlayerSlot::One);
        player.apply(PlayerEvent::Died {
            slot: PlayerSlot::Three,
        });
        assert!(player.is_alive());
    }

    #[test]
    fn test_roster() {
        let roster = Player::roster();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster[3].slot(), PlayerSlot::Four);
    }
}
