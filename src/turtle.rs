// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! The state of a single turtle: position, orientation and pen.
//!
//! Rotations are applied yaw (around Y) first, then pitch (around X), then spin (around Z). With
//! all angles at zero the turtle looks down the +Z axis.

mod impls;
#[cfg(test)]
mod tests;

use crate::{
    TurtleError,
    surface::Color,
    terrarium::TurtleId,
    transform::{FrameOp, Transform},
};
use glam::DVec3;
use smallvec::SmallVec;
use std::f64::consts::{FRAC_PI_2, TAU};

pub const DEFAULT_PEN_SIZE: f64 = 1.0;

/// The primitive used to render a forward step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PenLine {
    /// A stroked line
    Line,
    /// A filled box, `pen_width` x `pen_height` in cross-section
    #[default]
    Box,
}

/// Selects which parts of a turtle's local transform to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// translation, then yaw, pitch and spin
    Full,
    /// yaw, pitch and spin only
    RotationOnly,
    /// translation only
    TranslationOnly,
}

/// Moves an angle into `[0, 2π)`.
pub fn normalize_angle(rad: f64) -> f64 {
    // try to get rid of the -0.0 value
    let rv = rad.rem_euclid(TAU) + 0.0;
    // tiny negative values round up to exactly TAU
    if rv >= TAU { 0.0 } else { rv }
}

pub(crate) fn validate_angle(rad: f64) -> Result<f64, TurtleError> {
    if !rad.is_finite() {
        return Err(TurtleError::InvalidAngle(format!("{rad} is not finite")));
    }
    Ok(normalize_angle(rad))
}

pub(crate) fn validate_coordinate(value: f64) -> Result<f64, TurtleError> {
    if !value.is_finite() {
        return Err(TurtleError::InvalidCoordinate(format!(
            "{value} is not finite"
        )));
    }
    Ok(value)
}

pub(crate) fn validate_position(position: DVec3) -> Result<DVec3, TurtleError> {
    if !position.is_finite() {
        return Err(TurtleError::InvalidCoordinate(format!(
            "{position} is not finite"
        )));
    }
    Ok(position)
}

pub(crate) fn validate_pen_size(px: f64) -> Result<f64, TurtleError> {
    if !px.is_finite() || px < 0.0 {
        return Err(TurtleError::InvalidPenSize(format!(
            "{px} is not a finite, non-negative size"
        )));
    }
    Ok(px)
}

/// The (yaw, pitch) pair of a turtle looking along `delta`, `None` for a zero vector.
fn angles_along(delta: DVec3) -> Result<Option<(f64, f64)>, TurtleError> {
    if delta == DVec3::ZERO {
        return Ok(None);
    }
    let yaw = FRAC_PI_2 - delta.z.atan2(delta.x);
    let pitch = (-delta.y).atan2(delta.x.hypot(delta.z));
    Ok(Some((validate_angle(yaw)?, validate_angle(pitch)?)))
}

#[derive(Debug)]
pub struct Turtle {
    position: DVec3,
    yaw: f64,
    pitch: f64,
    spin: f64,
    pen_width: f64,
    pen_height: f64,
    /// Should the turtle draw while moving?
    pen_down: bool,
    pen_color: Color,
    pen_line: PenLine,
    /// the owning link, the child's coordinate space is relative to this turtle
    pub(crate) child: Option<TurtleId>,
    /// back-reference to the owner, never keeps anything alive
    pub(crate) parent: Option<TurtleId>,
}

impl Turtle {
    /// A root turtle at the origin, looking down +Z, pen down.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: DVec3) -> Result<Self, TurtleError> {
        let mut turtle = Self::new();
        let _ = turtle.set_position(position)?;
        Ok(turtle)
    }

    /// A new root turtle with every attribute of this turtle, but none of its links.
    pub fn detached_copy(&self) -> Self {
        Self {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
            spin: self.spin,
            pen_width: self.pen_width,
            pen_height: self.pen_height,
            pen_down: self.pen_down,
            pen_color: self.pen_color,
            pen_line: self.pen_line,
            child: None,
            parent: None,
        }
    }

    /// Copy pen width, height and color from `other`
    pub fn inherit_style(&mut self, other: &Turtle) -> &mut Self {
        self.pen_width = other.pen_width;
        self.pen_height = other.pen_height;
        self.pen_color = other.pen_color;
        self
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec3) -> Result<&mut Self, TurtleError> {
        self.position = validate_position(position)?;
        Ok(self)
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn set_x(&mut self, value: f64) -> Result<&mut Self, TurtleError> {
        self.position.x = validate_coordinate(value)?;
        Ok(self)
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn set_y(&mut self, value: f64) -> Result<&mut Self, TurtleError> {
        self.position.y = validate_coordinate(value)?;
        Ok(self)
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn set_z(&mut self, value: f64) -> Result<&mut Self, TurtleError> {
        self.position.z = validate_coordinate(value)?;
        Ok(self)
    }

    /// Rotation around the Y axis, in `[0, 2π)`
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn set_yaw(&mut self, rad: f64) -> Result<&mut Self, TurtleError> {
        self.yaw = validate_angle(rad)?;
        Ok(self)
    }

    pub fn yaw_by(&mut self, increment: f64) -> Result<&mut Self, TurtleError> {
        self.yaw = validate_angle(self.yaw + increment)?;
        Ok(self)
    }

    /// Rotation around the X axis, in `[0, 2π)`
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn set_pitch(&mut self, rad: f64) -> Result<&mut Self, TurtleError> {
        self.pitch = validate_angle(rad)?;
        Ok(self)
    }

    pub fn pitch_by(&mut self, increment: f64) -> Result<&mut Self, TurtleError> {
        self.pitch = validate_angle(self.pitch + increment)?;
        Ok(self)
    }

    /// Rotation around the Z axis, in `[0, 2π)`
    pub fn spin(&self) -> f64 {
        self.spin
    }

    pub fn set_spin(&mut self, rad: f64) -> Result<&mut Self, TurtleError> {
        self.spin = validate_angle(rad)?;
        Ok(self)
    }

    pub fn spin_by(&mut self, increment: f64) -> Result<&mut Self, TurtleError> {
        self.spin = validate_angle(self.spin + increment)?;
        Ok(self)
    }

    /// Set yaw, pitch and spin increments in one go, nothing is changed if any of them fails.
    pub fn rotate_by(&mut self, yaw: f64, pitch: f64, spin: f64) -> Result<&mut Self, TurtleError> {
        let yaw = validate_angle(self.yaw + yaw)?;
        let pitch = validate_angle(self.pitch + pitch)?;
        let spin = validate_angle(self.spin + spin)?;
        self.yaw = yaw;
        self.pitch = pitch;
        self.spin = spin;
        Ok(self)
    }

    pub fn pen_width(&self) -> f64 {
        self.pen_width
    }

    pub fn set_pen_width(&mut self, px: f64) -> Result<&mut Self, TurtleError> {
        self.pen_width = validate_pen_size(px)?;
        Ok(self)
    }

    pub fn pen_height(&self) -> f64 {
        self.pen_height
    }

    pub fn set_pen_height(&mut self, px: f64) -> Result<&mut Self, TurtleError> {
        self.pen_height = validate_pen_size(px)?;
        Ok(self)
    }

    /// Sets both pen width and pen height
    pub fn set_pen_size(&mut self, px: f64) -> Result<&mut Self, TurtleError> {
        let px = validate_pen_size(px)?;
        self.pen_width = px;
        self.pen_height = px;
        Ok(self)
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn set_pen_down(&mut self, down: bool) -> &mut Self {
        self.pen_down = down;
        self
    }

    pub fn toggle_pen(&mut self) -> &mut Self {
        self.pen_down = !self.pen_down;
        self
    }

    pub fn pen_color(&self) -> Color {
        self.pen_color
    }

    pub fn set_pen_color(&mut self, color: Color) -> &mut Self {
        self.pen_color = color;
        self
    }

    pub fn pen_line(&self) -> PenLine {
        self.pen_line
    }

    pub fn set_pen_line(&mut self, mode: PenLine) -> &mut Self {
        self.pen_line = mode;
        self
    }

    /// The turtle that owns this one, if any
    pub fn parent(&self) -> Option<TurtleId> {
        self.parent
    }

    /// The turtle owned by this one, if any
    pub fn child(&self) -> Option<TurtleId> {
        self.child
    }

    /// The unit vector the turtle is looking along, derived from yaw and pitch.
    pub fn direction(&self) -> DVec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        DVec3::new(sin_yaw * cos_pitch, -sin_pitch, cos_yaw * cos_pitch).normalize()
    }

    /// The (yaw, pitch) pair that would make the turtle look at `target`.
    /// Returns `None` if `target` is the current position.
    pub fn facing_angles(&self, target: DVec3) -> Result<Option<(f64, f64)>, TurtleError> {
        angles_along(validate_position(target)? - self.position)
    }

    /// Turn the turtle so that it looks at `target`. Spin is left untouched.
    ///
    /// If `target` is the current position there is nothing to look at, and the orientation is
    /// left unchanged.
    pub fn face(&mut self, target: DVec3) -> Result<&mut Self, TurtleError> {
        if let Some((yaw, pitch)) = self.facing_angles(target)? {
            self.yaw = yaw;
            self.pitch = pitch;
        }
        Ok(self)
    }

    /// Look along `direction`, the length of the vector does not matter. Spin is left
    /// untouched, and a zero vector leaves the orientation unchanged.
    pub fn set_direction(&mut self, direction: DVec3) -> Result<&mut Self, TurtleError> {
        if let Some((yaw, pitch)) = angles_along(validate_position(direction)?)? {
            self.yaw = yaw;
            self.pitch = pitch;
        }
        Ok(self)
    }

    /// Add every vector to the current direction and look along the normalized sum.
    pub fn add_directions(&mut self, directions: &[DVec3]) -> Result<&mut Self, TurtleError> {
        let sum = directions
            .iter()
            .fold(self.direction(), |sum, direction| sum + *direction);
        let sum = validate_position(sum)?;
        let direction = sum.try_normalize().ok_or_else(|| {
            TurtleError::InvalidState("The sum of the directions is a zero vector".to_string())
        })?;
        self.set_direction(direction)
    }

    /// The steps that take the parent's space into this turtle's space, in application order.
    pub fn frame_ops(&self, frame: Frame) -> SmallVec<[FrameOp; 4]> {
        let mut ops = SmallVec::new();
        if frame != Frame::RotationOnly {
            ops.push(FrameOp::Translate(self.position));
        }
        if frame != Frame::TranslationOnly {
            ops.push(FrameOp::RotateY(self.yaw));
            ops.push(FrameOp::RotateX(self.pitch));
            ops.push(FrameOp::RotateZ(self.spin));
        }
        ops
    }

    /// The transform from this turtle's local space into its parent's space.
    pub fn local_transform(&self, frame: Frame) -> Transform {
        self.frame_ops(frame).iter().collect()
    }
}
