// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

//! A module containing boiler-plate implementations of standard traits such as Default, From etc etc

use super::{FrameOp, Transform};
use glam::DAffine3;
use std::ops::Mul;

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<DAffine3> for Transform {
    fn from(affine: DAffine3) -> Self {
        Self(affine)
    }
}

impl From<FrameOp> for Transform {
    fn from(op: FrameOp) -> Self {
        Self(op.as_affine())
    }
}

impl FromIterator<FrameOp> for Transform {
    /// Folds the steps in order, the first step becomes the outermost transform.
    fn from_iter<I: IntoIterator<Item = FrameOp>>(iter: I) -> Self {
        let mut transform = Transform::IDENTITY;
        for op in iter {
            let _ = transform.then(op);
        }
        transform
    }
}

impl<'a> FromIterator<&'a FrameOp> for Transform {
    fn from_iter<I: IntoIterator<Item = &'a FrameOp>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        self.compose(&rhs)
    }
}
