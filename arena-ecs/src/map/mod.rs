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
//! Arena maps
//!
//! A map starts life as a [`MapGrid`] of characters, is laid out on a
//! [`Lattice`] through the templates in [`prefab`], and is persisted as
//! [`save::SaveRecord`] lines.

mod grid;
pub mod prefab;
pub mod save;

pub use grid::{Lattice, MapGrid, TileSymbol, GRID_SIZE};
pub use save::SaveRecord;
