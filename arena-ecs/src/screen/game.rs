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
//! The game screen
//!
//! [`GameScreen`] owns the entity world, the system pipeline, the player
//! records and the HUDs. Input mutates components, `draw` runs the pipeline
//! and then sweeps the world: transient flags are cleared, pickups and
//! deaths become [`PlayerEvent`]s, and spent entities are removed.

use super::{FrameReport, Screen, ScreenSignal, ScreenState};
use crate::audio::{AudioSink, SoundBank, SoundCue};
use crate::config::GameConfig;
use crate::ecs::components::{
    Alive, Collectable, Collide, Color, Destroyable, Explodable, Inventory, Transform,
};
use crate::ecs::scheduler::{stages, Scheduler, StageId};
use crate::ecs::systems::{
    CollideSystem, Draw2DSystem, Draw3DSystem, ExplodeSystem, MovementSystem, SoundSystem,
};
use crate::ecs::{Entity, EntityId, EntityType, Frame, PlayerSlot, System, World};
use crate::error::MapError;
use crate::input::{ButtonCode, ControllerState, InputEvent, Joystick};
use crate::map::{prefab, save, Lattice, MapGrid, TileSymbol};
use crate::player::{Player, PlayerEvent};
use crate::render::Renderer;
use crate::ui::PlayerHud;
use std::path::Path;

/// Orchestrates one match
pub struct GameScreen {
    config: GameConfig,
    lattice: Lattice,
    world: World,
    scheduler: Scheduler,
    players: Vec<Player>,
    huds: Vec<PlayerHud>,
    audio: Box<dyn AudioSink>,
    sounds: SoundBank,
    state: ScreenState,
}

impl GameScreen {
    /// Create a screen for the given players
    ///
    /// Seats missing from `players` get default records. The screen is
    /// empty until [`init`](Screen::init) and a map build or load.
    pub fn new(config: GameConfig, players: Vec<Player>, audio: Box<dyn AudioSink>) -> Self {
        let mut roster = Player::roster();
        for player in players {
            let index = player.slot().index();
            roster[index] = player;
        }
        let lattice = config.lattice();
        GameScreen {
            config,
            lattice,
            world: World::new(),
            scheduler: Scheduler::new(),
            players: roster,
            huds: Vec::new(),
            audio,
            sounds: SoundBank::new(),
            state: ScreenState::Initializing,
        }
    }

    /// Mark which seats take part, in seat order
    pub fn set_players_playing(&mut self, playing: [bool; 4]) {
        for (player, playing) in self.players.iter_mut().zip(playing) {
            player.set_playing(playing);
        }
    }

    /// Create one HUD per playing seat
    pub fn init_entity(&mut self) {
        let (width, height) = (self.config.screen_width, self.config.screen_height);
        self.huds = self
            .players
            .iter()
            .filter(|player| player.is_playing())
            .map(|player| PlayerHud::new(player, width, height))
            .collect();
    }

    /// Populate the world from a character grid
    ///
    /// Player 1 always spawns; players 2 to 4 only when playing.
    pub fn init_map(&mut self, grid: &MapGrid) {
        let before = self.world.entity_count();
        for (row, col, tile) in grid.tiles() {
            if let TileSymbol::Player(slot) = tile {
                if slot != PlayerSlot::One && !self.players[slot.index()].is_playing() {
                    log::trace!("Skipping spawn of idle {} at ({}, {})", slot, row, col);
                    continue;
                }
            }
            let (x, y) = self.lattice.position_of(col as i32, row as i32);
            for entity in prefab::tile_entities(tile, x, y) {
                self.world.spawn(entity);
            }
        }
        log::info!(
            "Built {}x{} map with {} entities",
            grid.size(),
            grid.size(),
            self.world.entity_count() - before
        );
        self.set_state(ScreenState::Running);
    }

    /// Add an entity, returning its handle
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        self.world.spawn(entity)
    }

    /// Remove an entity
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        self.world.despawn(id)
    }

    /// Register an extra system
    pub fn add_system<S: System + 'static>(&mut self, system: S, stage: StageId) {
        self.scheduler.add_system(system, stage);
    }

    /// The entity world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the entity world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Player records in seat order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Record of one seat
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// Active HUDs
    pub fn huds(&self) -> &[PlayerHud] {
        &self.huds
    }

    /// Configuration in use
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Registered system names in execution order
    pub fn system_names(&self) -> Vec<&str> {
        self.scheduler.system_names()
    }

    /// Save the map to the configured path
    pub fn save_map_entities(&self) -> Result<usize, MapError> {
        save::write_save(&self.config.save_path, &self.world)
    }

    /// Save the map to `path`
    pub fn save_map(&self, path: &Path) -> Result<usize, MapError> {
        save::write_save(path, &self.world)
    }

    /// Load the map from the configured path
    pub fn load_saved_map(&mut self) -> Result<bool, MapError> {
        let path = self.config.save_path.clone();
        self.load_map(&path)
    }

    /// Load the map from `path`
    ///
    /// Returns `Ok(false)` without touching the world when the file does
    /// not exist. The file is parsed in full before any entity is created.
    /// Seats with a player record in the file become playing.
    pub fn load_map(&mut self, path: &Path) -> Result<bool, MapError> {
        let Some(records) = save::read_save(path)? else {
            log::info!("No saved map at {}", path.display());
            return Ok(false);
        };
        for record in &records {
            if let TileSymbol::Player(slot) = record.tile() {
                self.players[slot.index()].set_playing(true);
            }
            self.world.spawn(record.to_entity());
        }
        log::info!("Loaded {} map entities from {}", records.len(), path.display());
        self.set_state(ScreenState::Running);
        Ok(true)
    }

    /// Drop a bomb under a player, if they have one
    ///
    /// Returns the new bomb's handle.
    pub fn place_bomb(&mut self, slot: PlayerSlot) -> Option<EntityId> {
        let Some((x, y)) = self
            .world
            .find_by_type(EntityType::Player(slot))
            .and_then(|(_, entity)| entity.get::<Transform>())
            .map(|t| (t.x(), t.y()))
        else {
            log::warn!("{} has no avatar to drop a bomb from", slot);
            return None;
        };
        let player = &mut self.players[slot.index()];
        if !player.take_bomb() {
            return None;
        }
        let radius = player.bomb_radius();

        let (x, y) = self.lattice.snap(x, y);
        let id = self
            .world
            .spawn(prefab::bomb(x, y, radius, self.config.fuse_frames, slot));
        log::debug!("{} dropped {} at ({}, {})", slot, id, x, y);

        let dropped = self
            .world
            .get_mut(id)
            .and_then(|entity| entity.get_mut::<Explodable>())
            .filter(|bomb| bomb.is_dropped());
        if let Some(bomb) = dropped {
            bomb.clear_dropped();
            self.sounds.trigger(SoundCue::BombDropped, self.audio.as_mut());
        }
        Some(id)
    }

    fn handle_controller(&mut self, slot: PlayerSlot, controller: &ControllerState) {
        let speed = self.config.frame_speed(self.players[slot.index()].speed());
        let velocity = match controller.joystick {
            Joystick::Down => Some((0.0, speed)),
            Joystick::Up => Some((0.0, -speed)),
            Joystick::Left => Some((-speed, 0.0)),
            Joystick::Right => Some((speed, 0.0)),
            Joystick::Neutral => None,
        };
        if let Some((speed_x, speed_y)) = velocity {
            if let Some(transform) = self
                .world
                .find_by_type_mut(EntityType::Player(slot))
                .and_then(|(_, entity)| entity.get_mut::<Transform>())
            {
                transform.set_speed(speed_x, speed_y);
            }
        }
        if controller.code == Some(ButtonCode::Action) {
            self.place_bomb(slot);
        }
    }

    /// Clear transient state, collect events and remove spent entities
    fn sweep(&mut self) -> (Vec<PlayerEvent>, usize, usize) {
        let mut events = Vec::new();
        let mut detonated = 0;

        for entity in self.world.iter_mut().map(|(_, entity)| entity) {
            if let Some(collide) = entity.get_mut::<Collide>() {
                collide.set_colliding(false);
            }
            match entity.entity_type() {
                EntityType::Player(slot) => {
                    if let Some(transform) = entity.get_mut::<Transform>() {
                        transform.stop();
                    }
                    if let Some(inventory) = entity.get_mut::<Inventory>() {
                        events.extend(
                            inventory
                                .take_pickups()
                                .into_iter()
                                .map(|bonus| PlayerEvent::PowerUp { slot, bonus }),
                        );
                    }
                    if entity.get::<Alive>().is_some_and(|alive| !alive.is_alive()) {
                        events.push(PlayerEvent::Died { slot });
                    }
                }
                EntityType::Bomb => {
                    if let Some(bomb) = entity.get::<Explodable>().filter(|b| b.is_exploded()) {
                        detonated += 1;
                        if let Some(slot) = bomb.owner() {
                            events.push(PlayerEvent::BombReturned { slot });
                        }
                    }
                }
                _ => {}
            }
        }

        let removed = self.world.retain(|_, entity| !is_spent(entity));

        for event in &events {
            let cue = match event {
                PlayerEvent::PowerUp { .. } => Some(SoundCue::PowerUp),
                PlayerEvent::Died { slot } => {
                    log::info!("{} died", slot);
                    Some(SoundCue::PlayerDeath)
                }
                PlayerEvent::BombReturned { .. } => None,
            };
            if let Some(cue) = cue {
                self.sounds.trigger(cue, self.audio.as_mut());
            }
            self.players[event.slot().index()].apply(*event);
        }
        for _ in 0..detonated {
            self.sounds.trigger(SoundCue::Explosion, self.audio.as_mut());
        }

        (events, removed, detonated)
    }

    fn check_game_over(&mut self) {
        if self.state != ScreenState::Running {
            return;
        }
        let playing = self.players.iter().filter(|p| p.is_playing()).count();
        let alive = self.players.iter().filter(|p| p.is_active()).count();
        let over = match playing {
            0 => false,
            1 => alive == 0,
            _ => alive < 2,
        };
        if over {
            self.set_state(ScreenState::GameOver);
        }
    }

    fn set_state(&mut self, state: ScreenState) {
        if self.state != state {
            log::info!("Game screen {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }
}

/// Entity the sweep removes
fn is_spent(entity: &Entity) -> bool {
    entity.get::<Destroyable>().is_some_and(Destroyable::is_destroyed)
        || entity.get::<Collectable>().is_some_and(Collectable::is_collected)
        || entity.get::<Explodable>().is_some_and(Explodable::is_exploded)
        || (entity.entity_type().is_player()
            && entity.get::<Alive>().is_some_and(|alive| !alive.is_alive()))
}

impl Screen for GameScreen {
    fn init(&mut self) {
        self.world.spawn(prefab::floor());
        self.scheduler.add_system(Draw2DSystem::new(), stages::RENDER_2D);
        self.scheduler.add_system(Draw3DSystem::new(), stages::RENDER_3D);
        self.scheduler.add_system(MovementSystem::new(), stages::MOVEMENT);
        self.scheduler.add_system(SoundSystem::new(), stages::AUDIO);
        self.scheduler
            .add_system(CollideSystem::new(self.lattice.step() / 2.0), stages::COLLISION);
        self.scheduler
            .add_system(ExplodeSystem::new(self.lattice), stages::EXPLOSION);
        log::debug!("Game screen pipeline: {:?}", self.scheduler.system_names());
    }

    fn handle_event(&mut self, event: &InputEvent) -> ScreenSignal {
        if self.state == ScreenState::Running {
            for slot in PlayerSlot::ALL {
                if self.players[slot.index()].is_active() {
                    self.handle_controller(slot, event.controller(slot));
                }
            }
        }
        if event.requests_exit() {
            self.set_state(ScreenState::GameOver);
            return ScreenSignal::Options;
        }
        ScreenSignal::Continue
    }

    fn update(&mut self, _dt: f32) {
        for hud in &mut self.huds {
            hud.update(&self.players[hud.slot().index()]);
        }
    }

    fn draw(&mut self, renderer: &mut dyn Renderer) -> FrameReport {
        renderer.begin_drawing();
        renderer.clear_background(Color::SKYBLUE);
        {
            let mut frame = Frame::new(&mut *renderer, self.audio.as_mut(), self.config.camera);
            self.scheduler.run(&mut self.world, &mut frame);
        }
        for hud in &self.huds {
            if self.players[hud.slot().index()].is_alive() {
                hud.draw(renderer);
            }
        }
        renderer.end_drawing();

        let (events, removed, detonated) = self.sweep();
        self.check_game_over();
        FrameReport {
            events,
            removed,
            detonated,
            state: self.state,
        }
    }

    fn state(&self) -> ScreenState {
        self.state
    }
}
