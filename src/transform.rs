// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! The minimal affine algebra a turtle chain needs: build a transform from translations and
//! axis rotations, apply it to points and directions, and invert it.

mod impls;
#[cfg(test)]
mod tests;

use crate::surface::DrawingSurface;
use glam::{DAffine3, DMat4, DVec3};

/// One step of a transform chain. A chain of these can either be folded into a [`Transform`] or
/// replayed, step by step, onto a [`DrawingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOp {
    Translate(DVec3),
    /// rotation around the Y axis (yaw)
    RotateY(f64),
    /// rotation around the X axis (pitch)
    RotateX(f64),
    /// rotation around the Z axis (spin)
    RotateZ(f64),
    Scale(DVec3),
}

impl FrameOp {
    fn as_affine(&self) -> DAffine3 {
        match *self {
            FrameOp::Translate(v) => DAffine3::from_translation(v),
            FrameOp::RotateY(rad) => DAffine3::from_rotation_y(rad),
            FrameOp::RotateX(rad) => DAffine3::from_rotation_x(rad),
            FrameOp::RotateZ(rad) => DAffine3::from_rotation_z(rad),
            FrameOp::Scale(s) => DAffine3::from_scale(s),
        }
    }

    /// Issue this step as the matching call on the surface's active transform.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        match *self {
            FrameOp::Translate(v) => surface.translate(v.x, v.y, v.z),
            FrameOp::RotateY(rad) => surface.rotate_y(rad),
            FrameOp::RotateX(rad) => surface.rotate_x(rad),
            FrameOp::RotateZ(rad) => surface.rotate_z(rad),
            FrameOp::Scale(s) => surface.scale(s.x, s.y, s.z),
        }
    }
}

/// An affine 3D transform.
///
/// Operations are post-multiplied: `t.translate(v).rotate_y(a)` moves first and rotates inside
/// the moved frame, exactly like the push/translate/rotate sequence of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(DAffine3);

impl Transform {
    pub const IDENTITY: Self = Self(DAffine3::IDENTITY);

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Reset to the identity transform
    pub fn reset(&mut self) -> &mut Self {
        self.0 = DAffine3::IDENTITY;
        self
    }

    pub fn translate(&mut self, v: DVec3) -> &mut Self {
        self.then(FrameOp::Translate(v))
    }

    pub fn rotate_y(&mut self, rad: f64) -> &mut Self {
        self.then(FrameOp::RotateY(rad))
    }

    pub fn rotate_x(&mut self, rad: f64) -> &mut Self {
        self.then(FrameOp::RotateX(rad))
    }

    pub fn rotate_z(&mut self, rad: f64) -> &mut Self {
        self.then(FrameOp::RotateZ(rad))
    }

    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) -> &mut Self {
        self.then(FrameOp::Scale(DVec3::new(sx, sy, sz)))
    }

    /// Post-multiply a single chain step onto this transform
    pub fn then(&mut self, op: FrameOp) -> &mut Self {
        self.0 = self.0 * op.as_affine();
        self
    }

    /// Returns `self * inner`, i.e. `inner` is applied first when transforming a vector.
    pub fn compose(&self, inner: &Transform) -> Transform {
        Self(self.0 * inner.0)
    }

    pub fn apply_to_point(&self, p: DVec3) -> DVec3 {
        self.0.transform_point3(p)
    }

    /// Transform a direction, the translation part is ignored.
    pub fn apply_to_direction(&self, d: DVec3) -> DVec3 {
        self.0.transform_vector3(d)
    }

    /// Closed form inverse of a rigid transform (orthonormal rotation + translation).
    ///
    /// The rotation part is inverted by transposition, so the result is only correct when no
    /// scale or shear has been applied. Every local turtle frame fulfills this.
    pub fn rigid_inverse(&self) -> Transform {
        let rotation = self.0.matrix3.transpose();
        Self(DAffine3 {
            matrix3: rotation,
            translation: -(rotation * self.0.translation),
        })
    }

    /// Generic inverse, `None` if the linear part is singular or the inverse overflows
    pub fn inverse(&self) -> Option<Transform> {
        let det = self.0.matrix3.determinant();
        if !det.is_finite() || det == 0.0 {
            return None;
        }
        Some(Self(self.0.inverse())).filter(Transform::is_finite)
    }

    /// The translation part of the transform, i.e. where the local origin ends up.
    pub fn translation(&self) -> DVec3 {
        self.0.translation
    }

    pub fn as_affine(&self) -> &DAffine3 {
        &self.0
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from(self.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn abs_diff_eq(&self, other: &Transform, max_abs_diff: f64) -> bool {
        self.0.abs_diff_eq(other.0, max_abs_diff)
    }
}
