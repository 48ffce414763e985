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
//! Character grids and the tile lattice they are laid out on

use crate::ecs::components::BonusType;
use crate::ecs::PlayerSlot;
use crate::error::MapError;

/// Width and height of an arena grid
pub const GRID_SIZE: usize = 21;

/// Regular lattice mapping grid cells to world positions
///
/// Column 0, row 0 sits at the origin; each column adds `step` to x and
/// each row subtracts `step` from y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lattice {
    origin_x: f32,
    origin_y: f32,
    step: f32,
}

impl Lattice {
    /// Create a lattice
    ///
    /// # Panics
    ///
    /// Panics if `step` is not positive and finite.
    pub fn new(origin_x: f32, origin_y: f32, step: f32) -> Self {
        assert!(step > 0.0 && step.is_finite(), "Tile step must be positive and finite");
        Lattice {
            origin_x,
            origin_y,
            step,
        }
    }

    /// World position of the top-left cell
    pub fn origin(&self) -> (f32, f32) {
        (self.origin_x, self.origin_y)
    }

    /// Distance between neighbouring cells
    pub fn step(&self) -> f32 {
        self.step
    }

    /// World position of a cell
    pub fn position_of(&self, col: i32, row: i32) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.step,
            self.origin_y - row as f32 * self.step,
        )
    }

    /// Nearest cell to a world position, as (column, row)
    pub fn cell_of(&self, x: f32, y: f32) -> (i32, i32) {
        (
            ((x - self.origin_x) / self.step).round() as i32,
            ((self.origin_y - y) / self.step).round() as i32,
        )
    }

    /// Snap a world position to the centre of its nearest cell
    pub fn snap(&self, x: f32, y: f32) -> (f32, f32) {
        let (col, row) = self.cell_of(x, y);
        self.position_of(col, row)
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Lattice::new(-5.0, 5.0, 0.5)
    }
}

/// Meaning of one grid character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSymbol {
    /// `#`
    Wall,
    /// `.`
    Box,
    /// `1` to `4`
    Player(PlayerSlot),
    /// `B`, `S` or `R`: a bonus hidden under a box
    BonusBox(BonusType),
    /// Anything else
    Empty,
}

impl TileSymbol {
    /// Classify a grid character
    pub fn from_char(c: char) -> Self {
        match c {
            '#' => TileSymbol::Wall,
            '.' => TileSymbol::Box,
            _ => {
                if let Some(slot) = PlayerSlot::from_symbol(c) {
                    TileSymbol::Player(slot)
                } else if let Some(bonus) = BonusType::from_symbol(c) {
                    TileSymbol::BonusBox(bonus)
                } else {
                    TileSymbol::Empty
                }
            }
        }
    }

    /// Character for this tile, `None` for empty floor
    pub fn symbol(self) -> Option<char> {
        match self {
            TileSymbol::Wall => Some('#'),
            TileSymbol::Box => Some('.'),
            TileSymbol::Player(slot) => Some(slot.symbol()),
            TileSymbol::BonusBox(bonus) => Some(bonus.symbol()),
            TileSymbol::Empty => None,
        }
    }
}

/// A validated square grid of map characters
///
/// # Examples
///
/// ```
/// use arena_ecs::map::{MapGrid, TileSymbol};
///
/// let mut rows = vec![".".repeat(21); 21];
/// rows[0] = format!("#.1{}", ".".repeat(18));
/// let grid = MapGrid::from_rows(&rows).unwrap();
/// assert_eq!(grid.tile(0, 0), Some(TileSymbol::Wall));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapGrid {
    size: usize,
    cells: Vec<char>,
}

impl MapGrid {
    /// Build a grid of the standard size
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        MapGrid::with_size(rows, GRID_SIZE)
    }

    /// Build a grid that must be exactly `size` by `size`
    pub fn with_size<S: AsRef<str>>(rows: &[S], size: usize) -> Result<Self, MapError> {
        let mut cells = Vec::with_capacity(size * size);
        for (index, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            let cols = cells.len() - before;
            if cols != size || index >= size {
                return Err(MapError::GridSize {
                    expected: size,
                    rows: rows.len(),
                    row: index,
                    cols,
                });
            }
        }
        if rows.len() != size {
            return Err(MapError::GridSize {
                expected: size,
                rows: rows.len(),
                row: rows.len(),
                cols: 0,
            });
        }
        Ok(MapGrid { size, cells })
    }

    /// Parse newline-separated rows of the standard size
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text.lines().collect();
        MapGrid::from_rows(&rows)
    }

    /// Width and height
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw character at a cell
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    /// Tile at a cell
    pub fn tile(&self, row: usize, col: usize) -> Option<TileSymbol> {
        self.get(row, col).map(TileSymbol::from_char)
    }

    /// Iterate all cells in row-major order as (row, col, tile)
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, TileSymbol)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i / self.size, i % self.size, TileSymbol::from_char(c)))
    }

    /// Rows as strings
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// The standard arena
    ///
    /// Border walls, pillars on every even interior cell, boxes elsewhere,
    /// a cleared L around each spawn corner and a few bonuses under boxes.
    pub fn classic() -> Self {
        let last = GRID_SIZE - 1;
        let mut cells = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let border = row == 0 || col == 0 || row == last || col == last;
                let pillar = row % 2 == 0 && col % 2 == 0;
                cells.push(if border || pillar { '#' } else { '.' });
            }
        }
        let mut grid = MapGrid {
            size: GRID_SIZE,
            cells,
        };

        let spawns = [
            (PlayerSlot::One, 1, 1, 1isize, 1isize),
            (PlayerSlot::Two, 1, last - 1, 1, -1),
            (PlayerSlot::Three, last - 1, 1, -1, 1),
            (PlayerSlot::Four, last - 1, last - 1, -1, -1),
        ];
        for (slot, row, col, dr, dc) in spawns {
            grid.set(row, col, slot.symbol());
            grid.set(row.saturating_add_signed(dr), col, ' ');
            grid.set(row, col.saturating_add_signed(dc), ' ');
        }

        let center = GRID_SIZE / 2;
        grid.set(3, center, BonusType::BombUp.symbol());
        grid.set(center, 3, BonusType::SpeedUp.symbol());
        grid.set(center, last - 3, BonusType::FireUp.symbol());
        grid.set(last - 3, center, BonusType::BombUp.symbol());
        grid
    }

    fn set(&mut self, row: usize, col: usize, c: char) {
        if let Some(cell) = self.cells.get_mut(row * self.size + col) {
            *cell = c;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_rows() -> Vec<String> {
        vec![" ".repeat(GRID_SIZE); GRID_SIZE]
    }

    #[test]
    fn test_lattice_positions() {
        let lattice = Lattice::default();
        assert_eq!(lattice.position_of(0, 0), (-5.0, 5.0));
        assert_eq!(lattice.position_of(2, 0), (-4.0, 5.0));
        assert_eq!(lattice.position_of(20, 20), (5.0, -5.0));
        assert_eq!(lattice.cell_of(-4.5, 5.0), (1, 0));
        assert_eq!(lattice.cell_of(-4.4, 4.1), (1, 2));
    }

    #[test]
    fn test_lattice_snap() {
        let lattice = Lattice::default();
        assert_eq!(lattice.snap(-4.37, 4.88), (-4.5, 5.0));
    }

    #[test]
    #[should_panic(expected = "Tile step must be positive")]
    fn test_lattice_rejects_zero_step() {
        Lattice::new(0.0, 0.0, 0.0);
    }

    #[test]
    fn test_tile_symbols() {
        assert_eq!(TileSymbol::from_char('#'), TileSymbol::Wall);
        assert_eq!(TileSymbol::from_char('3'), TileSymbol::Player(PlayerSlot::Three));
        assert_eq!(TileSymbol::from_char('S'), TileSymbol::BonusBox(BonusType::SpeedUp));
        assert_eq!(TileSymbol::from_char('x'), TileSymbol::Empty);
        assert_eq!(TileSymbol::from_char('5'), TileSymbol::Empty);
        assert_eq!(TileSymbol::Empty.symbol(), None);
        assert_eq!(TileSymbol::BonusBox(BonusType::FireUp).symbol(), Some('R'));
    }

    #[test]
    fn test_grid_accepts_exact_size() {
        let grid = MapGrid::from_rows(&blank_rows()).unwrap();
        assert_eq!(grid.size(), GRID_SIZE);
        assert_eq!(grid.tile(20, 20), Some(TileSymbol::Empty));
        assert_eq!(grid.get(21, 0), None);
    }

    #[test]
    fn test_grid_rejects_short_row() {
        let mut rows = blank_rows();
        rows[4].pop();
        match MapGrid::from_rows(&rows) {
            Err(MapError::GridSize { row: 4, cols: 20, .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_grid_rejects_missing_rows() {
        let mut rows = blank_rows();
        rows.truncate(20);
        assert!(matches!(
            MapGrid::from_rows(&rows),
            Err(MapError::GridSize { rows: 20, .. })
        ));
    }

    #[test]
    fn test_grid_rejects_extra_rows() {
        let mut rows = blank_rows();
        rows.push(" ".repeat(GRID_SIZE));
        assert!(MapGrid::from_rows(&rows).is_err());
    }

    #[test]
    fn test_parse_and_rows() {
        let text = blank_rows().join("\n");
        let grid = MapGrid::parse(&text).unwrap();
        assert_eq!(grid.rows(), blank_rows());
    }

    #[test]
    fn test_classic_layout() {
        let grid = MapGrid::classic();
        assert_eq!(grid.tile(0, 0), Some(TileSymbol::Wall));
        assert_eq!(grid.tile(2, 2), Some(TileSymbol::Wall));
        assert_eq!(grid.tile(1, 1), Some(TileSymbol::Player(PlayerSlot::One)));
        assert_eq!(grid.tile(19, 19), Some(TileSymbol::Player(PlayerSlot::Four)));
        assert_eq!(grid.tile(1, 2), Some(TileSymbol::Empty));
        assert_eq!(grid.tile(2, 1), Some(TileSymbol::Empty));
        assert_eq!(grid.tile(3, 10), Some(TileSymbol::BonusBox(BonusType::BombUp)));

        let players = grid
            .tiles()
            .filter(|(_, _, tile)| matches!(tile, TileSymbol::Player(_)))
            .count();
        assert_eq!(players, 4);
    }
}
