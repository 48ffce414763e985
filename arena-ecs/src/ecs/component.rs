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
//! Component storage and lookup
//!
//! Components are plain data records attached to entities. The set of
//! component kinds is closed, so every entity stores its components in a
//! [`ComponentSet`] with one optional slot per [`ComponentKind`]. Lookup is a
//! field access rather than a scan, and absence is always an `Option`.

use crate::ecs::components::{
    Alive, Collectable, Collide, Destroyable, Drawable2D, Drawable3D, Explodable, Inventory, Sound,
    Transform,
};
use std::fmt;

/// Discriminant for every component kind an entity can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Position and per-frame speed
    Transform,
    /// Screen-space visual
    Drawable2D,
    /// World-space visual
    Drawable3D,
    /// Transient collision flag
    Collide,
    /// Entity can be removed by a blast
    Destroyable,
    /// Bomb fuse and blast data
    Explodable,
    /// One-shot pickup flags
    Inventory,
    /// Player liveness
    Alive,
    /// Bonus tag
    Collectable,
    /// Playback flag for sound entities
    Sound,
}

impl ComponentKind {
    /// Every kind, in slot order
    pub const ALL: [ComponentKind; 10] = [
        ComponentKind::Transform,
        ComponentKind::Drawable2D,
        ComponentKind::Drawable3D,
        ComponentKind::Collide,
        ComponentKind::Destroyable,
        ComponentKind::Explodable,
        ComponentKind::Inventory,
        ComponentKind::Alive,
        ComponentKind::Collectable,
        ComponentKind::Sound,
    ];
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Trait that all components must implement
///
/// Components should be plain data structures without behavior. Each
/// implementation names its [`ComponentKind`] and the slot of a
/// [`ComponentSet`] it lives in; use [`impl_component!`](crate::impl_component)
/// rather than writing the accessors by hand.
pub trait Component: 'static + Send + Sync + Sized {
    /// Kind tag of this component
    const KIND: ComponentKind;

    /// Borrow this component's slot
    fn slot(set: &ComponentSet) -> &Option<Self>;

    /// Mutably borrow this component's slot
    fn slot_mut(set: &mut ComponentSet) -> &mut Option<Self>;
}

/// Implements [`Component`] for a type stored in the named `ComponentSet` field
#[macro_export]
macro_rules! impl_component {
    ($ty:ty, $kind:ident, $field:ident) => {
        impl $crate::ecs::Component for $ty {
            const KIND: $crate::ecs::ComponentKind = $crate::ecs::ComponentKind::$kind;

            fn slot(set: &$crate::ecs::ComponentSet) -> &Option<Self> {
                &set.$field
            }

            fn slot_mut(set: &mut $crate::ecs::ComponentSet) -> &mut Option<Self> {
                &mut set.$field
            }
        }
    };
}

/// Fixed-capacity component storage owned by a single entity
///
/// At most one component of each kind can be present. Fields are public to
/// the crate so the `impl_component!` macro can address them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentSet {
    #[doc(hidden)]
    pub transform: Option<Transform>,
    #[doc(hidden)]
    pub drawable_2d: Option<Drawable2D>,
    #[doc(hidden)]
    pub drawable_3d: Option<Drawable3D>,
    #[doc(hidden)]
    pub collide: Option<Collide>,
    #[doc(hidden)]
    pub destroyable: Option<Destroyable>,
    #[doc(hidden)]
    pub explodable: Option<Explodable>,
    #[doc(hidden)]
    pub inventory: Option<Inventory>,
    #[doc(hidden)]
    pub alive: Option<Alive>,
    #[doc(hidden)]
    pub collectable: Option<Collectable>,
    #[doc(hidden)]
    pub sound: Option<Sound>,
}

impl ComponentSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component, returning the one it replaced
    pub fn insert<T: Component>(&mut self, component: T) -> Option<T> {
        T::slot_mut(self).replace(component)
    }

    /// Remove a component
    pub fn remove<T: Component>(&mut self) -> Option<T> {
        T::slot_mut(self).take()
    }

    /// Get a reference to a component
    pub fn get<T: Component>(&self) -> Option<&T> {
        T::slot(self).as_ref()
    }

    /// Get a mutable reference to a component
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        T::slot_mut(self).as_mut()
    }

    /// Check whether a component of the given kind is present
    pub fn contains(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Transform => self.transform.is_some(),
            ComponentKind::Drawable2D => self.drawable_2d.is_some(),
            ComponentKind::Drawable3D => self.drawable_3d.is_some(),
            ComponentKind::Collide => self.collide.is_some(),
            ComponentKind::Destroyable => self.destroyable.is_some(),
            ComponentKind::Explodable => self.explodable.is_some(),
            ComponentKind::Inventory => self.inventory.is_some(),
            ComponentKind::Alive => self.alive.is_some(),
            ComponentKind::Collectable => self.collectable.is_some(),
            ComponentKind::Sound => self.sound.is_some(),
        }
    }

    /// Kinds currently present, in slot order
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        ComponentKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }

    /// Number of components present
    pub fn len(&self) -> usize {
        self.kinds().count()
    }

    /// Check whether no component is present
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every component
    pub fn clear(&mut self) {
        *self = ComponentSet::default();
    }
}
