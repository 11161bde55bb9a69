// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! Transform chains: composing the frames of every ancestor of a turtle, and undoing them.
//!
//! The chain is always walked root first, since a child's frame is expressed inside its
//! parent's frame.

use super::{Terrarium, TurtleId};
use crate::{
    TurtleError,
    surface::DrawingSurface,
    transform::{FrameOp, Transform},
    turtle::{Frame, Turtle, validate_position},
};
use glam::DVec3;
use smallvec::SmallVec;

/// Frame ops of a typical chain fit inline
pub(crate) type ChainOps = SmallVec<[FrameOp; 16]>;

fn renormalize(direction: DVec3) -> Result<DVec3, TurtleError> {
    direction.try_normalize().ok_or_else(|| {
        TurtleError::InvalidState(format!("Can't normalize the direction {direction}"))
    })
}

/// Replay `ops` onto the active transform of the surface
pub(crate) fn replay<S: DrawingSurface>(surface: &mut S, ops: &[FrameOp]) {
    for op in ops {
        op.replay(surface);
    }
}

impl<S: DrawingSurface> Terrarium<S> {
    /// The ancestors of `id`, root first. `id` itself is not included.
    pub fn ancestors(&self, id: TurtleId) -> Result<SmallVec<[TurtleId; 8]>, TurtleError> {
        let mut path = SmallVec::<[TurtleId; 8]>::new();
        let mut current = self.turtle(id)?.parent;
        while let Some(parent_id) = current {
            if path.len() >= self.turtles.len() {
                return Err(TurtleError::InvalidState(format!(
                    "The parent chain of turtle {id:?} does not end"
                )));
            }
            path.push(parent_id);
            current = self.turtle(parent_id)?.parent;
        }
        path.reverse();
        Ok(path)
    }

    /// Every ancestor's full frame followed by the `frame` part of `local`, where `local` stands
    /// in for the state of turtle `id`.
    pub(crate) fn chain_ops(
        &self,
        id: TurtleId,
        local: &Turtle,
        frame: Frame,
    ) -> Result<ChainOps, TurtleError> {
        let mut ops = ChainOps::new();
        for ancestor in self.ancestors(id)? {
            ops.extend(self.turtle(ancestor)?.frame_ops(Frame::Full));
        }
        ops.extend(local.frame_ops(frame));
        Ok(ops)
    }

    /// The transform in effect when turtle `id` draws: every ancestor's frame, then its own.
    pub fn active_transform(&self, id: TurtleId) -> Result<Transform, TurtleError> {
        let turtle = self.turtle(id)?;
        Ok(self.chain_ops(id, turtle, Frame::Full)?.iter().collect())
    }

    /// Like [`Self::active_transform`] but without the turtle's own rotation. Used by overlays
    /// that draw their own rotations at the turtle's position.
    pub fn marker_transform(&self, id: TurtleId) -> Result<Transform, TurtleError> {
        let turtle = self.turtle(id)?;
        Ok(self
            .chain_ops(id, turtle, Frame::TranslationOnly)?
            .iter()
            .collect())
    }

    /// The transform from the local space of `id` (the space its position is expressed in)
    /// into the root context.
    pub fn context_transform(&self, id: TurtleId) -> Result<Transform, TurtleError> {
        self.compose_ancestors(id, Frame::Full)
    }

    fn compose_ancestors(&self, id: TurtleId, frame: Frame) -> Result<Transform, TurtleError> {
        let mut transform = Transform::IDENTITY;
        for ancestor in self.ancestors(id)? {
            transform = transform.compose(&self.turtle(ancestor)?.local_transform(frame));
        }
        Ok(transform)
    }

    /// Convert a point in the root context into the local space of `id`.
    pub fn to_local_point(&self, id: TurtleId, point: DVec3) -> Result<DVec3, TurtleError> {
        let mut rv = validate_position(point)?;
        for ancestor in self.ancestors(id)? {
            rv = self
                .turtle(ancestor)?
                .local_transform(Frame::Full)
                .rigid_inverse()
                .apply_to_point(rv);
        }
        Ok(rv)
    }

    /// Convert a direction in the root context into the local space of `id`. The result is
    /// normalized, unless `id` is a root turtle, then the input is returned as is.
    pub fn to_local_direction(
        &self,
        id: TurtleId,
        direction: DVec3,
    ) -> Result<DVec3, TurtleError> {
        let direction = validate_position(direction)?;
        let ancestors = self.ancestors(id)?;
        if ancestors.is_empty() {
            return Ok(direction);
        }
        let mut rv = direction;
        for ancestor in ancestors {
            rv = self
                .turtle(ancestor)?
                .local_transform(Frame::RotationOnly)
                .rigid_inverse()
                .apply_to_direction(rv);
        }
        renormalize(rv)
    }

    /// Convert a point in the local space of `id` into the root context.
    pub fn to_top_point(&self, id: TurtleId, point: DVec3) -> Result<DVec3, TurtleError> {
        let point = validate_position(point)?;
        Ok(self.context_transform(id)?.apply_to_point(point))
    }

    /// Convert a direction in the local space of `id` into the root context, normalized unless
    /// `id` is a root turtle.
    pub fn to_top_direction(&self, id: TurtleId, direction: DVec3) -> Result<DVec3, TurtleError> {
        let direction = validate_position(direction)?;
        if self.turtle(id)?.parent.is_none() {
            return Ok(direction);
        }
        renormalize(
            self.compose_ancestors(id, Frame::RotationOnly)?
                .apply_to_direction(direction),
        )
    }
}
