//! Sound flag playback

use crate::audio::AudioSink;
use crate::ecs::components::Sound;
use crate::ecs::{Frame, System, World};

/// Plays every sound entity whose flag is raised
///
/// The system never lowers flags itself; whoever raised a flag lowers it
/// after the run.
#[derive(Debug, Default)]
pub struct SoundSystem;

impl SoundSystem {
    /// Create the system
    pub fn new() -> Self {
        SoundSystem
    }

    /// Send raised flags to the sink, returning how many played
    pub fn play_pending(&self, world: &World, audio: &mut dyn AudioSink) -> usize {
        let mut played = 0;
        for sound in world.entities().filter_map(|entity| entity.get::<Sound>()) {
            if sound.is_playing() {
                audio.play(sound.cue());
                played += 1;
            }
        }
        played
    }
}

impl System for SoundSystem {
    fn run(&mut self, world: &mut World, frame: &mut Frame<'_>) {
        self.play_pending(world, frame.audio());
    }

    fn name(&self) -> &str {
        "SoundSystem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{RecordingAudio, SoundCue};
    use crate::ecs::{Entity, EntityType};

    #[test]
    fn test_only_raised_flags_play() {
        let mut world = World::new();
        let mut raised = Sound::new(SoundCue::PowerUp);
        raised.set_play(true);
        world.spawn(Entity::new(EntityType::Unknown).with(raised));
        world.spawn(Entity::new(EntityType::Unknown).with(Sound::new(SoundCue::Explosion)));

        let mut audio = RecordingAudio::new();
        assert_eq!(SoundSystem::new().play_pending(&world, &mut audio), 1);
        assert_eq!(audio.played(), &[SoundCue::PowerUp]);
    }
}
