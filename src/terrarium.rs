// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! The owner of every turtle and of the surface they draw on.
//!
//! A turtle may own one child turtle. The parent holds the owning link, the child holds a plain
//! back-reference. Both links are only ever changed together, by [`Terrarium::assign_child`],
//! [`Terrarium::discard_child`], [`Terrarium::discard`] and [`Terrarium::remove`]. Since each
//! turtle has at most one child, the links form simple paths.

mod chain;
mod motion;

use crate::{TurtleError, config::TurtleOptions, surface::DrawingSurface, turtle::Turtle};
use glam::DVec3;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Identifies a turtle within its [`Terrarium`]. Ids of removed turtles are never reused.
    pub struct TurtleId;
}

pub struct Terrarium<S: DrawingSurface> {
    turtles: SlotMap<TurtleId, Turtle>,
    surface: S,
}

impl<S: DrawingSurface> Terrarium<S> {
    pub fn new(surface: S) -> Self {
        Self {
            turtles: SlotMap::with_key(),
            surface,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Drop every turtle and hand back the surface
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Number of live turtles, roots and children alike
    pub fn len(&self) -> usize {
        self.turtles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turtles.is_empty()
    }

    pub fn contains(&self, id: TurtleId) -> bool {
        self.turtles.contains_key(id)
    }

    /// Ids of every turtle without a parent
    pub fn roots(&self) -> impl Iterator<Item = TurtleId> + '_ {
        self.turtles
            .iter()
            .filter(|(_, turtle)| turtle.parent.is_none())
            .map(|(id, _)| id)
    }

    /// Add a new root turtle at the origin
    pub fn spawn(&mut self) -> TurtleId {
        self.turtles.insert(Turtle::new())
    }

    /// Add a new root turtle at `position`
    pub fn spawn_at(&mut self, position: DVec3) -> Result<TurtleId, TurtleError> {
        Ok(self.turtles.insert(Turtle::at(position)?))
    }

    /// Add a new root turtle configured by `options`
    pub fn spawn_with(&mut self, options: &TurtleOptions) -> Result<TurtleId, TurtleError> {
        Ok(self.turtles.insert(options.build()?))
    }

    pub fn turtle(&self, id: TurtleId) -> Result<&Turtle, TurtleError> {
        self.turtles.get(id).ok_or_else(|| unknown_turtle(id))
    }

    /// Mutable access to the state of a turtle. The links are not reachable this way.
    pub fn turtle_mut(&mut self, id: TurtleId) -> Result<&mut Turtle, TurtleError> {
        self.turtles.get_mut(id).ok_or_else(|| unknown_turtle(id))
    }

    pub fn parent(&self, id: TurtleId) -> Result<Option<TurtleId>, TurtleError> {
        Ok(self.turtle(id)?.parent)
    }

    pub fn child(&self, id: TurtleId) -> Result<Option<TurtleId>, TurtleError> {
        Ok(self.turtle(id)?.child)
    }

    /// Create a new child turtle at the parent's local origin and give it to `id`.
    ///
    /// An existing child is owned by `id`, so it is destroyed together with its own chain of
    /// children. With `inherit_style` the child copies pen width, pen height and pen color from
    /// its parent.
    pub fn assign_child(
        &mut self,
        id: TurtleId,
        inherit_style: bool,
    ) -> Result<TurtleId, TurtleError> {
        let mut child = Turtle::new();
        {
            let parent = self.turtle(id)?;
            if inherit_style {
                let _ = child.inherit_style(parent);
            }
            child.parent = Some(id);
        }
        if self.turtle(id)?.child.is_some() {
            let displaced = self.discard_child(id)?;
            let removed = self.remove_chain(displaced)?;
            log::debug!("turtle {id:?} replaced its child, {removed} turtles destroyed");
        }
        let child_id = self.turtles.insert(child);
        self.turtle_mut(id)?.child = Some(child_id);
        log::debug!("assigned child {child_id:?} to turtle {id:?}");
        Ok(child_id)
    }

    /// Unlink the child of `id`. The former child becomes a root turtle (keeping any child of
    /// its own) and its id is returned.
    pub fn discard_child(&mut self, id: TurtleId) -> Result<TurtleId, TurtleError> {
        let child_id = self.turtle(id)?.child.ok_or_else(|| {
            TurtleError::InvalidState(format!("Turtle {id:?} has no child to discard"))
        })?;
        // validate both ends before touching any of them
        let _ = self.turtle(child_id)?;
        self.turtle_mut(child_id)?.parent = None;
        self.turtle_mut(id)?.child = None;
        log::debug!("turtle {id:?} discarded its child {child_id:?}");
        Ok(child_id)
    }

    /// Release `id` from its parent, returns the former parent.
    pub fn discard(&mut self, id: TurtleId) -> Result<TurtleId, TurtleError> {
        let parent_id = self.turtle(id)?.parent.ok_or_else(|| {
            TurtleError::InvalidState(format!("Turtle {id:?} is a root turtle, nothing to discard"))
        })?;
        let _ = self.discard_child(parent_id)?;
        Ok(parent_id)
    }

    /// Destroy `id` together with the chain of children it owns. The parent, if any, loses its
    /// child. Returns the number of destroyed turtles.
    pub fn remove(&mut self, id: TurtleId) -> Result<usize, TurtleError> {
        if let Some(parent_id) = self.turtle(id)?.parent {
            let _ = self.discard_child(parent_id)?;
        }
        let removed = self.remove_chain(id)?;
        log::debug!("removed turtle {id:?} and its owned chain, {removed} turtles in total");
        Ok(removed)
    }

    /// Remove the root turtle `id` and every turtle it owns
    fn remove_chain(&mut self, id: TurtleId) -> Result<usize, TurtleError> {
        let mut removed = 0_usize;
        let mut next = Some(id);
        while let Some(current) = next {
            next = self
                .turtles
                .remove(current)
                .ok_or_else(|| unknown_turtle(current))?
                .child;
            removed += 1;
        }
        Ok(removed)
    }

    /// The root of the chain `id` belongs to
    pub fn origin_turtle(&self, id: TurtleId) -> Result<TurtleId, TurtleError> {
        Ok(self.ancestors(id)?.first().copied().unwrap_or(id))
    }
}

pub(crate) fn unknown_turtle(id: TurtleId) -> TurtleError {
    TurtleError::InvalidState(format!("Unknown turtle {id:?}"))
}
