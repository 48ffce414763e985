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
//! Headless Match Example
//!
//! Plays a scripted four-player match on the classic map without a window.
//! Draw calls go to a command recorder and sound cues are discarded. It
//! showcases:
//!
//! - Building the classic map or loading a saved one
//! - Driving the game screen with per-frame input snapshots
//! - Reading frame reports for pickups, deaths and explosions
//! - Saving the final board
//!
//! # Running
//!
//! ```bash
//! # Play 600 frames
//! RUST_LOG=info cargo run --example headless_match
//!
//! # Play longer and save the board at the end
//! cargo run --example headless_match -- --frames 2000 --save
//!
//! # Continue from the saved board
//! cargo run --example headless_match -- --load
//! ```

use arena_ecs::audio::NullAudio;
use arena_ecs::ecs::PlayerSlot;
use arena_ecs::input::{ButtonCode, ControllerState, InputEvent, Joystick};
use arena_ecs::map::MapGrid;
use arena_ecs::render::CommandRecorder;
use arena_ecs::screen::{GameScreen, Screen, ScreenSignal, ScreenState};
use arena_ecs::{GameConfig, Player, PlayerEvent};

/// Command line options
struct MatchOptions {
    frames: usize,
    load: bool,
    save: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            frames: 600,
            load: false,
            save: false,
        }
    }
}

/// Scripted controller for one seat
///
/// Each seat walks a fixed square and drops a bomb at every corner.
fn scripted_input(slot: PlayerSlot, frame: usize) -> ControllerState {
    const LEG: usize = 40;
    let phase = (frame + slot.index() * LEG) / LEG % 4;
    if frame % LEG == LEG - 1 {
        return ControllerState::pressing(ButtonCode::Action);
    }
    let joystick = match phase {
        0 => Joystick::Right,
        1 => Joystick::Down,
        2 => Joystick::Left,
        _ => Joystick::Up,
    };
    ControllerState::moving(joystick)
}

fn parse_args() -> MatchOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = MatchOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<usize>() {
                        Ok(value) => options.frames = value,
                        Err(_) => {
                            eprintln!("Warning: Invalid frames '{}', using default 600", args[i + 1]);
                            options.frames = 600;
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --frames requires an argument");
                    std::process::exit(1);
                }
            }
            "--load" => {
                options.load = true;
                i += 1;
            }
            "--save" => {
                options.save = true;
                i += 1;
            }
            "--help" | "-h" => {
                println!("Usage: headless_match [--frames N] [--load] [--save]");
                std::process::exit(0);
            }
            other => {
                eprintln!("Warning: Unknown argument '{}'", other);
                i += 1;
            }
        }
    }
    options
}

fn main() {
    env_logger::init();

    println!("==========================================================");
    println!("              Headless Arena Match");
    println!("==========================================================");
    println!();

    let options = parse_args();
    let config = GameConfig::from_env();
    println!("Configuration:");
    println!("  Frames:      {}", options.frames);
    println!("  Fuse:        {} frames", config.fuse_frames);
    println!("  Save file:   {}", config.save_path.display());
    println!();

    let mut screen = GameScreen::new(config, Player::roster(), Box::new(NullAudio));
    screen.init();
    screen.set_players_playing([true, true, true, true]);

    let loaded = if options.load {
        match screen.load_saved_map() {
            Ok(loaded) => loaded,
            Err(err) => {
                eprintln!("Error: could not load saved map: {}", err);
                std::process::exit(1);
            }
        }
    } else {
        false
    };
    if !loaded {
        screen.init_map(&MapGrid::classic());
    }
    screen.init_entity();
    println!("Board ready with {} entities", screen.world().entity_count());

    let mut recorder = CommandRecorder::new();
    let mut explosions = 0;
    let mut pickups = 0;
    let mut draw_calls = 0;
    let mut frames_played = 0;

    for frame in 0..options.frames {
        let mut event = InputEvent::new();
        for slot in PlayerSlot::ALL {
            event = event.with_controller(slot, scripted_input(slot, frame));
        }
        if screen.handle_event(&event) == ScreenSignal::Options {
            println!("Options requested at frame {}", frame);
            break;
        }
        screen.update(1.0 / 60.0);
        let report = screen.draw(&mut recorder);
        draw_calls += recorder.take().len();
        frames_played += 1;

        explosions += report.detonated;
        for event in &report.events {
            match event {
                PlayerEvent::PowerUp { slot, bonus } => {
                    pickups += 1;
                    println!("Frame {:5}: {} picked up {:?}", frame, slot, bonus);
                }
                PlayerEvent::Died { slot } => println!("Frame {:5}: {} died", frame, slot),
                PlayerEvent::BombReturned { .. } => {}
            }
        }
        if report.state == ScreenState::GameOver {
            println!("Game over at frame {}", frame);
            break;
        }
    }

    println!();
    println!("Summary:");
    println!("  Frames played:   {}", frames_played);
    println!("  Draw calls:      {}", draw_calls);
    println!("  Explosions:      {}", explosions);
    println!("  Pickups:         {}", pickups);
    println!("  Entities left:   {}", screen.world().entity_count());
    for player in screen.players().iter().filter(|p| p.is_playing()) {
        println!(
            "  {}: {} bombs={}/{} fire={} speed={}",
            player.slot(),
            if player.is_alive() { "alive" } else { "dead " },
            player.bomb_stock(),
            player.max_bomb_stock(),
            player.bomb_radius(),
            player.speed()
        );
    }

    if options.save {
        match screen.save_map_entities() {
            Ok(count) => println!("Saved {} entities to {}", count, screen.config().save_path.display()),
            Err(err) => {
                eprintln!("Error: could not save map: {}", err);
                std::process::exit(1);
            }
        }
    }
}
