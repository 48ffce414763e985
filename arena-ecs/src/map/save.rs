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
//! Save-file records
//!
//! A save file holds one `<symbol> <x> <y>` line per persisted entity. Only
//! walls, boxes, players and uncollected bonuses are written; only type and
//! position survive. A bonus and the box hiding it are two separate
//! records, so reloading keeps both but not their pairing.

use crate::ecs::components::{Collectable, Transform};
use crate::ecs::{Entity, EntityType, World};
use crate::error::MapError;
use crate::map::{prefab, TileSymbol};
use std::fs;
use std::io;
use std::path::Path;

/// One persisted entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveRecord {
    tile: TileSymbol,
    x: f32,
    y: f32,
}

impl SaveRecord {
    /// Create a record
    ///
    /// # Panics
    ///
    /// Panics if `tile` is [`TileSymbol::Empty`], which has no symbol.
    pub fn new(tile: TileSymbol, x: f32, y: f32) -> Self {
        assert!(tile != TileSymbol::Empty, "Empty tiles are never saved");
        SaveRecord { tile, x, y }
    }

    /// Record for an entity, if its type is persisted
    pub fn from_entity(entity: &Entity) -> Option<Self> {
        let tile = match entity.entity_type() {
            EntityType::Wall => TileSymbol::Wall,
            EntityType::Box => TileSymbol::Box,
            EntityType::Player(slot) => TileSymbol::Player(slot),
            EntityType::Bonus => {
                let collectable = entity.get::<Collectable>()?;
                if collectable.is_collected() {
                    return None;
                }
                TileSymbol::BonusBox(collectable.bonus())
            }
            EntityType::Bomb | EntityType::Unknown => return None,
        };
        let transform = entity.get::<Transform>()?;
        Some(SaveRecord::new(tile, transform.x(), transform.y()))
    }

    /// What the record describes
    pub fn tile(&self) -> TileSymbol {
        self.tile
    }

    /// Saved x position
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Saved y position
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Format as a save line, without the newline
    pub fn to_line(&self) -> String {
        let symbol = self.tile.symbol().unwrap_or(' ');
        format!("{} {} {}", symbol, self.x, self.y)
    }

    /// Parse one save line; `line` is the one-based line number for errors
    pub fn parse_line(text: &str, line: usize) -> Result<Self, MapError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [symbol, x, y] = fields[..] else {
            return Err(MapError::MalformedLine {
                line,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        };

        let mut chars = symbol.chars();
        let tile = match (chars.next(), chars.next()) {
            (Some(c), None) => TileSymbol::from_char(c),
            _ => TileSymbol::Empty,
        };
        if tile == TileSymbol::Empty {
            return Err(MapError::UnknownSymbol {
                symbol: symbol.to_string(),
                line,
            });
        }

        Ok(SaveRecord::new(
            tile,
            parse_coordinate(x, line)?,
            parse_coordinate(y, line)?,
        ))
    }

    /// Build the entity this record describes
    ///
    /// A bonus record yields the bonus alone; the box that hid it has its
    /// own record.
    pub fn to_entity(&self) -> Entity {
        match self.tile {
            TileSymbol::Wall => prefab::wall(self.x, self.y),
            TileSymbol::Box => prefab::crate_box(self.x, self.y),
            TileSymbol::Player(slot) => prefab::player(slot, self.x, self.y),
            TileSymbol::BonusBox(kind) => prefab::bonus(kind, self.x, self.y),
            TileSymbol::Empty => unreachable!("SaveRecord::new rejects empty tiles"),
        }
    }
}

fn parse_coordinate(field: &str, line: usize) -> Result<f32, MapError> {
    match field.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MapError::MalformedLine {
            line,
            reason: format!("invalid coordinate '{}'", field),
        }),
    }
}

/// Records for every persisted entity, in world order
pub fn records_of(world: &World) -> Vec<SaveRecord> {
    world.entities().filter_map(SaveRecord::from_entity).collect()
}

/// Serialize records, one line each
pub fn encode(records: &[SaveRecord]) -> String {
    let mut text = String::new();
    for record in records {
        text.push_str(&record.to_line());
        text.push('\n');
    }
    text
}

/// Parse a whole save file
///
/// Blank lines are skipped. The first bad line fails the whole parse.
pub fn decode(text: &str) -> Result<Vec<SaveRecord>, MapError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| SaveRecord::parse_line(line, index + 1))
        .collect()
}

/// Write a world's persisted entities to `path`, replacing any old file
///
/// Returns the number of records written.
pub fn write_save(path: &Path, world: &World) -> Result<usize, MapError> {
    let records = records_of(world);
    fs::write(path, encode(&records))?;
    log::info!("Saved {} map entities to {}", records.len(), path.display());
    Ok(records.len())
}

/// Read and parse `path`
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_save(path: &Path) -> Result<Option<Vec<SaveRecord>>, MapError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    decode(&text).map(Some)
}
