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
//! Frame ordering, movement and input signals through the game screen

use arena_ecs::audio::NullAudio;
use arena_ecs::ecs::components::{BonusType, Collide, Color, Inventory, Transform};
use arena_ecs::ecs::{EntityType, PlayerSlot};
use arena_ecs::input::{ButtonCode, ControllerState, InputEvent, Joystick};
use arena_ecs::map::{prefab, MapGrid};
use arena_ecs::render::{Camera3D, CommandRecorder, DrawCommand};
use arena_ecs::screen::{GameScreen, Screen, ScreenSignal, ScreenState};
use arena_ecs::{GameConfig, Player};

fn running(cells: &[(usize, usize, char)]) -> GameScreen {
    let mut rows: Vec<Vec<char>> = vec![vec![' '; 21]; 21];
    for &(row, col, c) in cells {
        rows[row][col] = c;
    }
    let rows: Vec<String> = rows.into_iter().map(|row| row.into_iter().collect()).collect();

    let mut screen = GameScreen::new(GameConfig::default(), Player::roster(), Box::new(NullAudio));
    screen.init();
    screen.set_players_playing([true, false, false, false]);
    screen.init_entity();
    screen.init_map(&MapGrid::from_rows(&rows).unwrap());
    screen
}

fn p1_position(screen: &GameScreen) -> (f32, f32) {
    let transform = screen
        .world()
        .find_by_type(EntityType::Player(PlayerSlot::One))
        .and_then(|(_, e)| e.get::<Transform>())
        .copied()
        .unwrap();
    (transform.x(), transform.y())
}

#[test]
fn test_frame_command_order() {
    let mut screen = GameScreen::new(GameConfig::default(), Player::roster(), Box::new(NullAudio));
    screen.init();
    screen.set_players_playing([true, false, false, false]);
    screen.init_entity();
    screen.init_map(&MapGrid::classic());
    let drawable = screen.world().entity_count();

    let mut recorder = CommandRecorder::new();
    let report = screen.draw(&mut recorder);
    assert_eq!(report.state, ScreenState::Running);
    assert_eq!(report.removed, 0);

    let commands = recorder.commands();
    assert_eq!(commands[0], DrawCommand::BeginDrawing);
    assert_eq!(commands[1], DrawCommand::Clear(Color::SKYBLUE));
    assert_eq!(commands[2], DrawCommand::BeginMode3D(Camera3D::default()));
    assert_eq!(commands.last(), Some(&DrawCommand::EndDrawing));

    let end_3d = commands
        .iter()
        .position(|c| *c == DrawCommand::EndMode3D)
        .unwrap();
    let first_text = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Text { .. }))
        .unwrap();
    assert!(end_3d < first_text, "HUD is drawn after the world pass");
    assert_eq!(recorder.primitive_3d_count(), drawable);
    assert!(commands.contains(&DrawCommand::Text {
        text: "P1".to_string(),
        x: 57 + 8,
        y: 118 + 8,
        font_size: 20,
        color: Color::WHITE,
    }));
}

#[test]
fn test_idle_frame_keeps_positions() {
    let mut screen = running(&[(10, 10, '1'), (0, 0, '#')]);
    let before = p1_position(&screen);

    for _ in 0..5 {
        screen.handle_event(&InputEvent::new());
        screen.draw(&mut CommandRecorder::new());
    }

    assert_eq!(p1_position(&screen), before);
}

#[test]
fn test_speed_lasts_one_frame() {
    let mut screen = running(&[(10, 10, '1')]);
    assert_eq!(p1_position(&screen), (0.0, 0.0));

    let down = InputEvent::new().with_controller(PlayerSlot::One, ControllerState::moving(Joystick::Down));
    screen.handle_event(&down);
    screen.draw(&mut CommandRecorder::new());
    assert_eq!(p1_position(&screen), (0.0, 0.02));

    screen.draw(&mut CommandRecorder::new());
    assert_eq!(p1_position(&screen), (0.0, 0.02));
}

#[test]
fn test_collide_flags_reset_each_frame() {
    let mut screen = running(&[(10, 10, '1')]);
    screen.add_entity(prefab::wall(3.0, 3.0));
    screen.add_entity(prefab::wall(3.0, 3.0));

    screen.draw(&mut CommandRecorder::new());

    let flagged = screen
        .world()
        .entities()
        .filter_map(|e| e.get::<Collide>())
        .filter(|c| c.is_colliding())
        .count();
    assert_eq!(flagged, 0);
    assert_eq!(screen.world().count_of_type(EntityType::Wall), 2);
}

#[test]
fn test_only_first_controller_leaves() {
    let mut screen = running(&[(10, 10, '1')]);

    let second = InputEvent::new()
        .with_controller(PlayerSlot::Two, ControllerState::pressing(ButtonCode::Options));
    assert_eq!(screen.handle_event(&second), ScreenSignal::Continue);
    assert_eq!(screen.state(), ScreenState::Running);

    let first = InputEvent::new()
        .with_controller(PlayerSlot::One, ControllerState::pressing(ButtonCode::Options));
    let signal = screen.handle_event(&first);
    assert_eq!(signal, ScreenSignal::Options);
    assert_eq!(signal.code(), 4);
    assert_eq!(screen.state(), ScreenState::GameOver);

    // Input is ignored once the match is over
    let down = InputEvent::new().with_controller(PlayerSlot::One, ControllerState::moving(Joystick::Down));
    screen.handle_event(&down);
    screen.draw(&mut CommandRecorder::new());
    assert_eq!(p1_position(&screen), (0.0, 0.0));
}

#[test]
fn test_update_refreshes_hud() {
    let mut screen = running(&[(10, 10, '1')]);
    if let Some(inventory) = screen
        .world_mut()
        .find_by_type_mut(EntityType::Player(PlayerSlot::One))
        .and_then(|(_, e)| e.get_mut::<Inventory>())
    {
        inventory.grant(BonusType::SpeedUp);
    }
    screen.draw(&mut CommandRecorder::new());
    assert_eq!(screen.huds()[0].snapshot().speed(), 10);

    screen.update(1.0 / 60.0);
    assert_eq!(screen.huds()[0].snapshot().speed(), 12);
}
