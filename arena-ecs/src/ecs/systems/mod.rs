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
//! Arena systems
//!
//! One module per behavior. The game screen registers them in the stage
//! order defined by [`stages`](crate::ecs::scheduler::stages).

mod collide;
mod draw;
mod explode;
mod movement;
mod sound;

pub use collide::CollideSystem;
pub use draw::{Draw2DSystem, Draw3DSystem};
pub use explode::{blast_cells, ExplodeSystem};
pub use movement::MovementSystem;
pub use sound::SoundSystem;
