//! Per-player status overlays

use crate::ecs::components::Color;
use crate::ecs::PlayerSlot;
use crate::map::prefab::player_color;
use crate::player::Player;
use crate::render::Renderer;

const PANEL_SIZE_PCT: f32 = 15.0;
const LEFT_PCT: f32 = 3.0;
const RIGHT_PCT: f32 = 84.0;
const TOP_PCT: f32 = 11.0;
const BOTTOM_PCT: f32 = 82.0;
const FONT_SIZE: i32 = 20;

fn percentage(pct: f32, of: f32) -> f32 {
    of * pct / 100.0
}

/// Status panel for one seat, anchored in that seat's screen corner
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerHud {
    slot: PlayerSlot,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    snapshot: Player,
}

impl PlayerHud {
    /// Create a panel sized for a virtual screen
    ///
    /// Seats 1 to 4 go top-left, top-right, bottom-left and bottom-right.
    pub fn new(player: &Player, screen_width: f32, screen_height: f32) -> Self {
        let (x_pct, y_pct) = match player.slot() {
            PlayerSlot::One => (LEFT_PCT, TOP_PCT),
            PlayerSlot::Two => (RIGHT_PCT, TOP_PCT),
            PlayerSlot::Three => (LEFT_PCT, BOTTOM_PCT),
            PlayerSlot::Four => (RIGHT_PCT, BOTTOM_PCT),
        };
        PlayerHud {
            slot: player.slot(),
            x: percentage(x_pct, screen_width),
            y: percentage(y_pct, screen_height),
            width: percentage(PANEL_SIZE_PCT, screen_height),
            height: percentage(PANEL_SIZE_PCT, screen_width),
            snapshot: player.clone(),
        }
    }

    /// Seat shown
    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    /// Top-left corner in screen pixels
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Stats as of the last refresh
    pub fn snapshot(&self) -> &Player {
        &self.snapshot
    }

    /// Refresh from the player record
    pub fn update(&mut self, player: &Player) {
        if player.slot() == self.slot {
            self.snapshot = player.clone();
        }
    }

    /// Draw the panel
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let x = self.x as i32;
        let y = self.y as i32;
        let line = FONT_SIZE + FONT_SIZE / 2;
        let player = &self.snapshot;

        renderer.draw_rectangle(
            x,
            y,
            self.width as i32,
            self.height as i32,
            player_color(self.slot).fade(160),
        );
        renderer.draw_text(&self.slot.to_string(), x + 8, y + 8, FONT_SIZE, Color::WHITE);
        let rows = [
            format!("Bombs {}/{}", player.bomb_stock(), player.max_bomb_stock()),
            format!("Fire {}", player.bomb_radius()),
            format!("Speed {}", player.speed()),
        ];
        for (i, text) in rows.iter().enumerate() {
            renderer.draw_text(text, x + 8, y + 8 + line * (i as i32 + 1), FONT_SIZE, Color::WHITE);
        }
    }
}
