// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2023, 2025 lacklustr@protonmail.com https://github.com/eadf
// This file is part of the terrapin crate.

#![deny(
    rust_2018_compatibility,
    rust_2018_idioms,
    nonstandard_style,
    unused,
    future_incompatible,
    non_camel_case_types,
    unused_parens,
    non_upper_case_globals,
    unused_qualifications,
    unused_results,
    unused_imports,
    unused_variables,
    bare_trait_objects,
    ellipsis_inclusive_range_patterns,
    elided_lifetimes_in_paths
)]
#![warn(clippy::explicit_into_iter_loop)]

//! A 3D turtle for procedural geometry.
//!
//! A turtle tracks a position, a yaw/pitch/spin orientation and a pen. Moving it with the pen
//! down emits primitives to a [`DrawingSurface`](surface::DrawingSurface). A turtle may own one
//! child turtle whose coordinate space is relative to the parent's current position and
//! orientation, so a chain of turtles forms a chain of coordinate frames.
//!
//! All turtles, and the surface they draw on, are owned by a [`Terrarium`](terrarium::Terrarium).
//! Turtles are addressed by [`TurtleId`](terrarium::TurtleId).

pub mod command;
pub mod config;
pub mod surface;
pub mod terrarium;
pub mod transform;
pub mod turtle;
#[cfg(test)]
pub(crate) mod test_util;

pub mod prelude {
    pub use crate::{
        TurtleError,
        command::TurtleCommand,
        config::{ConfigType, Options, TurtleOptions},
        surface::{Color, DrawingSurface, RecordingSurface, SurfaceCall},
        terrarium::{Terrarium, TurtleId},
        transform::{FrameOp, Transform},
        turtle::{Frame, PenLine, Turtle},
    };
    pub use glam::DVec3;
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TurtleError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid angle: {0}")]
    InvalidAngle(String),

    #[error("Invalid pen size: {0}")]
    InvalidPenSize(String),

    #[error("Invalid turtle state: {0}")]
    InvalidState(String),

    #[error("Invalid input data: {0}")]
    InvalidParameter(String),

    #[error("Missing parameter: {0}")]
    MissingParameter(String),
}
