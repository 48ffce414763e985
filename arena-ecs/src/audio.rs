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
//! Audio collaborator interface and sound entities
//!
//! Gameplay never plays audio directly. Each cue has a dedicated sound
//! entity holding a [`Sound`] flag; [`SoundBank::trigger`] raises the flag,
//! runs the sound system once so the [`AudioSink`] observes it, then lowers
//! it again.

use crate::ecs::components::Sound;
use crate::ecs::systems::SoundSystem;
use crate::ecs::{Entity, EntityId, EntityType, World};

/// Cues the game can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A bomb went off
    Explosion,
    /// A player picked up a bonus
    PowerUp,
    /// A player died
    PlayerDeath,
    /// A bomb was placed
    BombDropped,
}

impl SoundCue {
    /// Every cue, in sound-entity order
    pub const ALL: [SoundCue; 4] = [
        SoundCue::Explosion,
        SoundCue::PowerUp,
        SoundCue::PlayerDeath,
        SoundCue::BombDropped,
    ];
}

/// Playback consumed from the audio backend
pub trait AudioSink: Send {
    /// Start playing a cue
    fn play(&mut self, cue: SoundCue);
}

/// Sink that discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Sink that records cues in play order
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    played: Vec<SoundCue>,
}

impl RecordingAudio {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far
    pub fn played(&self) -> &[SoundCue] {
        &self.played
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}

/// Sound entities, one per cue, and the system that plays them
pub struct SoundBank {
    world: World,
    entities: Vec<(SoundCue, EntityId)>,
    system: SoundSystem,
}

impl SoundBank {
    /// Create a bank with one sound entity per cue
    pub fn new() -> Self {
        let mut world = World::new();
        let entities = SoundCue::ALL
            .into_iter()
            .map(|cue| (cue, world.spawn(Entity::new(EntityType::Unknown).with(Sound::new(cue)))))
            .collect();
        SoundBank {
            world,
            entities,
            system: SoundSystem::new(),
        }
    }

    /// Play a cue once through the sink
    ///
    /// Returns false if the bank has no entity for the cue.
    pub fn trigger(&mut self, cue: SoundCue, audio: &mut dyn AudioSink) -> bool {
        let Some(id) = self.entity_for(cue) else {
            log::warn!("no sound entity for {:?}", cue);
            return false;
        };
        self.set_play(id, true);
        self.system.play_pending(&self.world, audio);
        self.set_play(id, false);
        true
    }

    /// Number of sound entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check whether the bank is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Check whether any sound flag is still raised
    pub fn has_pending(&self) -> bool {
        self.world
            .entities()
            .filter_map(|entity| entity.get::<Sound>())
            .any(|sound| sound.is_playing())
    }

    fn entity_for(&self, cue: SoundCue) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|(entity_cue, _)| *entity_cue == cue)
            .map(|(_, id)| *id)
    }

    fn set_play(&mut self, id: EntityId, play: bool) {
        if let Some(sound) = self.world.get_mut(id).and_then(|entity| entity.get_mut::<Sound>()) {
            sound.set_play(play);
        }
    }
}

impl Default for SoundBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_has_entity_per_cue() {
        let bank = SoundBank::new();
        assert_eq!(bank.len(), SoundCue::ALL.len());
        assert!(!bank.has_pending());
    }

    #[test]
    fn test_trigger_plays_once_and_clears_flag() {
        let mut bank = SoundBank::new();
        let mut audio = RecordingAudio::new();

        assert!(bank.trigger(SoundCue::BombDropped, &mut audio));
        assert_eq!(audio.played(), &[SoundCue::BombDropped]);
        assert!(!bank.has_pending());

        bank.trigger(SoundCue::Explosion, &mut audio);
        assert_eq!(audio.played(), &[SoundCue::BombDropped, SoundCue::Explosion]);
    }
}
